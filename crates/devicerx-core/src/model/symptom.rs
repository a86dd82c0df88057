use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum free-text length (in characters) that counts as a description
pub const MIN_DESCRIPTION_CHARS: usize = 5;

/// Common symptom from the fixed vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymptomTag {
    /// "Slow Performance"
    #[serde(rename = "Slow Performance")]
    SlowPerformance,
    /// "Overheating"
    Overheating,
    /// "Blue Screen"
    #[serde(rename = "Blue Screen")]
    BlueScreen,
    /// "Battery Draining Fast"
    #[serde(rename = "Battery Draining Fast")]
    BatteryDrainingFast,
    /// "Noisy Fan"
    #[serde(rename = "Noisy Fan")]
    NoisyFan,
    /// "Wifi Issues"
    #[serde(rename = "Wifi Issues")]
    WifiIssues,
    /// "App Crashes"
    #[serde(rename = "App Crashes")]
    AppCrashes,
}

impl SymptomTag {
    /// The whole vocabulary, in display order
    pub const ALL: [SymptomTag; 7] = [
        SymptomTag::SlowPerformance,
        SymptomTag::Overheating,
        SymptomTag::BlueScreen,
        SymptomTag::BatteryDrainingFast,
        SymptomTag::NoisyFan,
        SymptomTag::WifiIssues,
        SymptomTag::AppCrashes,
    ];

    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::SlowPerformance => "Slow Performance",
            Self::Overheating => "Overheating",
            Self::BlueScreen => "Blue Screen",
            Self::BatteryDrainingFast => "Battery Draining Fast",
            Self::NoisyFan => "Noisy Fan",
            Self::WifiIssues => "Wifi Issues",
            Self::AppCrashes => "App Crashes",
        }
    }

    /// Look up a tag by its exact label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for SymptomTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selected symptom tags plus a free-text description.
///
/// Tags keep selection order; a tag appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomInput {
    selected_tags: Vec<SymptomTag>,
    /// User's own description
    pub free_text: String,
}

impl SymptomInput {
    /// Selected tags, in selection order
    #[must_use]
    pub fn selected_tags(&self) -> &[SymptomTag] {
        &self.selected_tags
    }

    /// Whether `tag` is selected
    #[must_use]
    pub fn is_selected(&self, tag: SymptomTag) -> bool {
        self.selected_tags.contains(&tag)
    }

    /// Select `tag` if absent, deselect it if present
    pub fn toggle(&mut self, tag: SymptomTag) {
        if let Some(pos) = self.selected_tags.iter().position(|t| *t == tag) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag);
        }
    }

    /// Length of the description in characters
    #[must_use]
    pub fn description_chars(&self) -> usize {
        self.free_text.chars().count()
    }

    /// At least one tag, or a description of `MIN_DESCRIPTION_CHARS`+
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.selected_tags.is_empty() || self.description_chars() >= MIN_DESCRIPTION_CHARS
    }

    /// Tag labels joined with ", "
    #[must_use]
    pub fn tags_joined(&self) -> String {
        self.selected_tags
            .iter()
            .map(SymptomTag::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_restores_original() {
        let mut input = SymptomInput::default();
        input.toggle(SymptomTag::NoisyFan);
        input.toggle(SymptomTag::Overheating);
        let before = input.clone();

        for tag in SymptomTag::ALL {
            input.toggle(tag);
            input.toggle(tag);
            assert_eq!(input, before, "double toggle of {} changed the set", tag);
        }
    }

    #[test]
    fn test_toggle_preserves_order_without_duplicates() {
        let mut input = SymptomInput::default();
        input.toggle(SymptomTag::WifiIssues);
        input.toggle(SymptomTag::BlueScreen);
        input.toggle(SymptomTag::AppCrashes);
        input.toggle(SymptomTag::BlueScreen);
        input.toggle(SymptomTag::BlueScreen);

        assert_eq!(
            input.selected_tags(),
            &[
                SymptomTag::WifiIssues,
                SymptomTag::AppCrashes,
                SymptomTag::BlueScreen
            ]
        );
        assert_eq!(input.tags_joined(), "Wifi Issues, App Crashes, Blue Screen");
    }

    #[test]
    fn test_completeness_boundaries() {
        let mut input = SymptomInput::default();
        input.free_text = "abcd".into();
        assert!(!input.is_complete());

        input.free_text = "abcde".into();
        assert!(input.is_complete());

        let mut tagged = SymptomInput::default();
        tagged.toggle(SymptomTag::Overheating);
        assert!(tagged.is_complete());
    }

    #[test]
    fn test_description_counts_characters_not_bytes() {
        let mut input = SymptomInput::default();
        // four characters, eight bytes
        input.free_text = "éééé".into();
        assert_eq!(input.description_chars(), 4);
        assert!(!input.is_complete());
    }

    #[test]
    fn test_from_label() {
        assert_eq!(
            SymptomTag::from_label("Battery Draining Fast"),
            Some(SymptomTag::BatteryDrainingFast)
        );
        assert_eq!(SymptomTag::from_label("battery"), None);
    }
}

//! One renderer per wizard step
//!
//! Views only read state from `App`; every change goes back through a
//! `WizardAction`.

mod admin;
mod form;
mod landing;
mod report;

use devicerx_core::Step;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::app::App;

pub(super) const ACCENT: Color = Color::Blue;
pub(super) const MUTED: Color = Color::DarkGray;

/// Screen shown for a step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Landing,
    Category,
    Symptoms,
    Specs,
    Analyzing,
    Results,
    Upgrades,
    Summary,
    Admin,
}

impl View {
    pub fn for_step(step: Step) -> Self {
        match step {
            Step::Landing => Self::Landing,
            Step::Category => Self::Category,
            Step::Symptoms => Self::Symptoms,
            Step::Specs => Self::Specs,
            Step::Analyzing => Self::Analyzing,
            Step::Results => Self::Results,
            Step::Upgrades => Self::Upgrades,
            Step::Summary => Self::Summary,
            Step::Admin => Self::Admin,
        }
    }

    /// Unknown ordinals show the landing page
    pub fn for_ordinal(ordinal: u8) -> Self {
        Step::from_ordinal(ordinal)
            .map(Self::for_step)
            .unwrap_or(Self::Landing)
    }

    /// Footer key hints
    pub fn hints(self) -> &'static str {
        match self {
            Self::Landing => "Enter start checkup",
            Self::Category => "↑/↓ move · Space select · Enter next · Shift+Tab back",
            Self::Symptoms => "↑/↓ move · Space toggle · type on Description · Enter next · Shift+Tab back",
            Self::Specs => "↑/↓ move · type to edit · ←/→ RAM & age · Enter analyze · Shift+Tab back",
            Self::Analyzing => "Please wait",
            Self::Results => "Enter view upgrades · Ctrl+R start over",
            Self::Upgrades => "Enter final summary · Shift+Tab back to report",
            Self::Summary => "p save report · Enter diagnose another device · Shift+Tab back",
            Self::Admin => "Enter / F10 exit admin",
        }
    }
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    match View::for_step(app.step()) {
        View::Landing => landing::draw(frame, area),
        View::Category => form::draw_category(frame, app, area),
        View::Symptoms => form::draw_symptoms(frame, app, area),
        View::Specs => form::draw_specs(frame, app, area),
        View::Analyzing => report::draw_analyzing(frame, app, area),
        View::Results => report::draw_results(frame, app, area),
        View::Upgrades => report::draw_upgrades(frame, app, area),
        View::Summary => report::draw_summary(frame, app, area),
        View::Admin => admin::draw(frame, area),
    }
}

pub(super) fn title(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

pub(super) fn subtitle(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(MUTED)))
}

/// Row marker for the highlighted item
pub(super) fn pointer(active: bool) -> Span<'static> {
    if active {
        Span::styled("› ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
    } else {
        Span::raw("  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_step_is_total() {
        for step in Step::ALL {
            let view = View::for_step(step);
            assert_eq!(View::for_ordinal(step.ordinal()), view);
            assert!(!view.hints().is_empty());
        }
    }

    #[test]
    fn test_unknown_ordinal_falls_back_to_landing() {
        assert_eq!(View::for_ordinal(8), View::Landing);
        assert_eq!(View::for_ordinal(200), View::Landing);
        assert_eq!(View::for_ordinal(99), View::Admin);
    }
}

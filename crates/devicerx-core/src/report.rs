//! Repair-vs-replace comparison and plain-text report export

use crate::error::{Error, Result};
use crate::model::DiagnosisResult;
use crate::wizard::WizardState;

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

/// Upgrade spend above which a new device is flagged as the better value
pub const REPLACEMENT_VALUE_THRESHOLD_USD: f64 = 300.0;

/// Price band of a replacement device
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplacementEstimate {
    /// Entry-level price
    pub low_usd: f64,
    /// Mid-level price
    pub high_usd: f64,
}

impl Default for ReplacementEstimate {
    fn default() -> Self {
        Self {
            low_usd: 600.0,
            high_usd: 1200.0,
        }
    }
}

impl ReplacementEstimate {
    /// "$600 - $1200"
    #[must_use]
    pub fn label(&self) -> String {
        format!("${} - ${}", format_usd(self.low_usd), format_usd(self.high_usd))
    }
}

/// Repair path vs. replacement, derived from a diagnosis
#[derive(Debug, Clone, PartialEq)]
pub struct CostComparison {
    /// Shop repair estimate
    pub fix_price_usd: f64,
    /// Sum of all recommended upgrade parts
    pub upgrades_total_usd: f64,
    /// Replacement price band
    pub replacement: ReplacementEstimate,
}

impl CostComparison {
    /// Build the comparison for `result`
    #[must_use]
    pub fn from_result(result: &DiagnosisResult) -> Self {
        Self {
            fix_price_usd: result.estimated_fix_price_usd,
            upgrades_total_usd: result.total_upgrade_cost(),
            replacement: ReplacementEstimate::default(),
        }
    }

    /// Fix price plus upgrades
    #[must_use]
    pub fn repair_total_usd(&self) -> f64 {
        self.fix_price_usd + self.upgrades_total_usd
    }

    /// Whether the upgrades cost enough that replacing is worth a look
    #[must_use]
    pub fn favors_replacement(&self) -> bool {
        self.upgrades_total_usd > REPLACEMENT_VALUE_THRESHOLD_USD
    }

    /// Bullet points for the repair path
    #[must_use]
    pub fn repair_points(&self) -> [&'static str; 3] {
        [
            "Extends life by ~1-2 years",
            "Keeps your data and settings",
            "Environmentally friendly",
        ]
    }

    /// Bullet points for the replacement path
    #[must_use]
    pub fn replacement_points(&self) -> [&'static str; 3] {
        [
            "Latest technology & warranty",
            "Better battery life",
            if self.favors_replacement() {
                "Might be better value"
            } else {
                "More expensive option"
            },
        ]
    }
}

/// Format a dollar amount without trailing ".00"
#[must_use]
pub fn format_usd(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

/// Render the session as a plain-text report.
///
/// Fails when no diagnosis has been made yet.
pub fn render_text(state: &WizardState) -> Result<String> {
    render_text_at(state, Local::now())
}

fn render_text_at(state: &WizardState, now: DateTime<Local>) -> Result<String> {
    let diagnosis = state
        .diagnosis
        .as_ref()
        .ok_or_else(|| Error::Report("no diagnosis to report".to_string()))?;
    let specs = &state.specs;
    let costs = CostComparison::from_result(diagnosis);

    let mut out = String::new();
    out.push_str("SmartDevice Rx - Diagnosis Report\n");
    out.push_str(&format!("Generated: {}\n\n", now.format("%Y-%m-%d %H:%M")));

    out.push_str("DEVICE\n");
    let device = state.device_type.map(|d| d.label()).unwrap_or("Unknown");
    out.push_str(&format!("  Type:      {}\n", device));
    out.push_str(&format!("  Brand:     {}\n", specs.brand));
    out.push_str(&format!("  Model:     {}\n", specs.model));
    out.push_str(&format!("  Processor: {}\n", specs.processor));
    out.push_str(&format!("  RAM:       {}\n", specs.ram_label()));
    out.push_str(&format!("  Storage:   {}\n", specs.storage));
    out.push_str(&format!("  Age:       {} years\n\n", specs.age_years));

    out.push_str("SYMPTOMS\n");
    if !state.symptoms.selected_tags().is_empty() {
        out.push_str(&format!("  Tags: {}\n", state.symptoms.tags_joined()));
    }
    if !state.symptoms.free_text.is_empty() {
        out.push_str(&format!("  Description: {}\n", state.symptoms.free_text));
    }
    out.push('\n');

    out.push_str(&format!("DIAGNOSIS ({} severity)\n", diagnosis.severity));
    out.push_str(&format!("  {}\n\n", diagnosis.diagnosis_summary));
    out.push_str("Potential causes:\n");
    push_items(&mut out, "  - ", &diagnosis.potential_causes);
    out.push_str("Maintenance tips:\n");
    push_items(&mut out, "  - ", &diagnosis.maintenance_tips);
    out.push('\n');

    out.push_str("RECOMMENDED UPGRADES\n");
    if diagnosis.recommended_upgrades.is_empty() {
        out.push_str("  None needed.\n");
    }
    for upgrade in &diagnosis.recommended_upgrades {
        out.push_str(&format!(
            "  - {} [{} priority] ~${}, +{}% performance\n",
            upgrade.component,
            upgrade.priority,
            format_usd(upgrade.estimated_cost_usd),
            upgrade.performance_boost_percentage
        ));
        out.push_str(&format!("    {}\n", upgrade.reason));
    }
    out.push('\n');

    out.push_str("DECISION\n");
    out.push_str(&format!(
        "  Repair & Upgrade: ~${}\n",
        format_usd(costs.repair_total_usd())
    ));
    push_items(&mut out, "    * ", &costs.repair_points());
    out.push_str(&format!(
        "  New Device (Est.): {}\n",
        costs.replacement.label()
    ));
    push_items(&mut out, "    * ", &costs.replacement_points());

    Ok(out)
}

fn push_items<S: AsRef<str>>(out: &mut String, bullet: &str, items: &[S]) {
    for item in items {
        out.push_str(bullet);
        out.push_str(item.as_ref());
        out.push('\n');
    }
}

/// Write the report into `dir`, returning the file path
pub fn write_report(state: &WizardState, dir: &Path) -> Result<PathBuf> {
    let now = Local::now();
    let text = render_text_at(state, now)?;

    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!(
        "devicerx-report-{}.txt",
        now.format("%Y%m%d-%H%M%S")
    ));
    std::fs::write(&path, text)?;

    info!(path = %path.display(), "Report written");
    Ok(path)
}

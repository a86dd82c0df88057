use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary text of the fallback diagnosis
pub const FALLBACK_SUMMARY: &str = "We encountered an error analyzing your device. However, based on general knowledge, your device may be suffering from hardware aging.";

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Needs attention now
    Critical,
    /// Worth fixing soon
    Moderate,
    /// Minor
    Low,
}

impl Severity {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upgrade priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Do this first
    High,
    /// Worth doing
    Medium,
    /// Optional
    Low,
}

impl Priority {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recommended hardware upgrade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeRecommendation {
    /// Component label, e.g. "16GB DDR4 RAM"
    pub component: String,
    /// Why the upgrade helps
    pub reason: String,
    /// Approximate part price
    #[serde(rename = "estimatedCostUSD")]
    pub estimated_cost_usd: f64,
    /// Estimated speed-up, nominally 0-100
    #[serde(rename = "performanceBoostPercentage")]
    pub performance_boost_percentage: f64,
    /// Priority
    pub priority: Priority,
}

impl UpgradeRecommendation {
    /// First two words of the component, used as a chart label
    #[must_use]
    pub fn short_label(&self) -> String {
        self.component
            .split(' ')
            .take(2)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Structured diagnosis returned by the model (or the fallback)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    /// Plain-language explanation
    #[serde(rename = "diagnosisSummary")]
    pub diagnosis_summary: String,
    /// Severity
    pub severity: Severity,
    /// Likely technical causes (3-5 expected)
    #[serde(rename = "potentialCauses")]
    pub potential_causes: Vec<String>,
    /// Shop repair estimate, excluding upgrades
    #[serde(rename = "estimatedFixPriceUSD")]
    pub estimated_fix_price_usd: f64,
    /// Upgrade recommendations
    #[serde(rename = "recommendedUpgrades")]
    pub recommended_upgrades: Vec<UpgradeRecommendation>,
    /// Actionable advice
    #[serde(rename = "maintenanceTips")]
    pub maintenance_tips: Vec<String>,
}

impl DiagnosisResult {
    /// The fixed result used when the model cannot be reached or answers
    /// with something unusable.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            diagnosis_summary: FALLBACK_SUMMARY.to_string(),
            severity: Severity::Moderate,
            potential_causes: vec![
                "API Connection Error".to_string(),
                "Complex Hardware Failure".to_string(),
            ],
            estimated_fix_price_usd: 0.0,
            recommended_upgrades: Vec::new(),
            maintenance_tips: vec![
                "Please try again later".to_string(),
                "Check your internet connection".to_string(),
            ],
        }
    }

    /// Sum of all upgrade part prices
    #[must_use]
    pub fn total_upgrade_cost(&self) -> f64 {
        self.recommended_upgrades
            .iter()
            .map(|u| u.estimated_cost_usd)
            .sum()
    }

    /// Check the value constraints serde cannot express.
    ///
    /// Returns a description of the first violation.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.diagnosis_summary.trim().is_empty() {
            return Err("diagnosisSummary is empty".to_string());
        }
        if !is_price(self.estimated_fix_price_usd) {
            return Err(format!(
                "estimatedFixPriceUSD is not a non-negative number: {}",
                self.estimated_fix_price_usd
            ));
        }
        for upgrade in &self.recommended_upgrades {
            if !is_price(upgrade.estimated_cost_usd) {
                return Err(format!(
                    "estimatedCostUSD for '{}' is not a non-negative number: {}",
                    upgrade.component, upgrade.estimated_cost_usd
                ));
            }
        }
        Ok(())
    }
}

fn is_price(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

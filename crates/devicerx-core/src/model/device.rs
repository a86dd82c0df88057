use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound applied to every write of `DeviceSpecs::age_years`
pub const MAX_AGE_YEARS: u8 = 20;

/// Device category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    /// Laptop computer
    Laptop,
    /// Desktop computer
    Desktop,
    /// Smartphone
    Smartphone,
    /// Tablet
    Tablet,
    /// Anything else
    Other,
}

impl DeviceType {
    /// All device types, in selection order
    pub const ALL: [DeviceType; 5] = [
        DeviceType::Laptop,
        DeviceType::Desktop,
        DeviceType::Smartphone,
        DeviceType::Tablet,
        DeviceType::Other,
    ];

    /// Display label (also the label used in the prompt)
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Laptop => "Laptop",
            Self::Desktop => "Desktop",
            Self::Smartphone => "Smartphone",
            Self::Tablet => "Tablet",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Installed memory bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RamBucket {
    /// 4GB
    #[serde(rename = "4GB")]
    Gb4,
    /// 8GB
    #[serde(rename = "8GB")]
    Gb8,
    /// 16GB
    #[serde(rename = "16GB")]
    Gb16,
    /// 32GB or more
    #[serde(rename = "32GB+")]
    Gb32Plus,
}

impl RamBucket {
    /// All buckets, smallest first
    pub const ALL: [RamBucket; 4] = [
        RamBucket::Gb4,
        RamBucket::Gb8,
        RamBucket::Gb16,
        RamBucket::Gb32Plus,
    ];

    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gb4 => "4GB",
            Self::Gb8 => "8GB",
            Self::Gb16 => "16GB",
            Self::Gb32Plus => "32GB+",
        }
    }

    /// Parse a bucket label ("8GB", "32GB+")
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label.trim())
    }

    /// Cycle `None → 4GB → … → 32GB+ → None`
    #[must_use]
    pub fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Gb4),
            Some(Self::Gb4) => Some(Self::Gb8),
            Some(Self::Gb8) => Some(Self::Gb16),
            Some(Self::Gb16) => Some(Self::Gb32Plus),
            Some(Self::Gb32Plus) => None,
        }
    }
}

impl fmt::Display for RamBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Device specifications as entered by the user.
///
/// Every field is optional and forwarded verbatim; only `age_years` is
/// clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSpecs {
    /// Manufacturer
    pub brand: String,
    /// Model name
    pub model: String,
    /// Installed memory, `None` when not selected
    pub ram: Option<RamBucket>,
    /// Storage description
    pub storage: String,
    /// Processor description
    pub processor: String,
    /// Device age in years (0-20)
    pub age_years: u8,
}

impl Default for DeviceSpecs {
    fn default() -> Self {
        Self {
            brand: String::new(),
            model: String::new(),
            ram: None,
            storage: String::new(),
            processor: String::new(),
            age_years: 1,
        }
    }
}

impl DeviceSpecs {
    /// RAM label for display and prompts ("" when unset)
    #[must_use]
    pub fn ram_label(&self) -> &'static str {
        self.ram.map(|r| r.label()).unwrap_or("")
    }

    /// Set the age, clamped to `0..=MAX_AGE_YEARS`
    pub fn set_age_years(&mut self, years: i64) {
        self.age_years = clamp_age(years);
    }

    /// Apply a single field edit
    pub fn apply(&mut self, field: SpecField) {
        match field {
            SpecField::Brand(v) => self.brand = v,
            SpecField::Model(v) => self.model = v,
            SpecField::Ram(v) => self.ram = v,
            SpecField::Storage(v) => self.storage = v,
            SpecField::Processor(v) => self.processor = v,
            SpecField::AgeYears(v) => self.set_age_years(v),
        }
    }
}

fn clamp_age(years: i64) -> u8 {
    // Clamped to 0..=20, so the narrowing cannot truncate.
    years.clamp(0, i64::from(MAX_AGE_YEARS)) as u8
}

/// One edit to `DeviceSpecs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecField {
    /// Set brand
    Brand(String),
    /// Set model
    Model(String),
    /// Set or clear RAM bucket
    Ram(Option<RamBucket>),
    /// Set storage
    Storage(String),
    /// Set processor
    Processor(String),
    /// Set age (clamped)
    AgeYears(i64),
}

//! Core data types for launch records
//!
//! - `LaunchRecord`: one launch event
//! - `Outcome`: binary launch outcome class

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Launch outcome class
///
/// Serialized as the integer class used in the source data (`0` or `1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    /// Class 0
    Failure,
    /// Class 1
    Success,
}

impl Outcome {
    /// Numeric class value
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Convert a numeric class value, `None` for anything but 0 or 1
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.class())
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.class())
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let class = i64::deserialize(deserializer)?;
        Outcome::from_class(class)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid outcome class: {}", class)))
    }
}

/// A single launch record
///
/// Records are immutable once loaded into a [`Dataset`](super::Dataset).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Launch site name
    pub launch_site: String,
    /// Payload mass in kilograms
    pub payload_mass_kg: f64,
    /// Booster version category label
    pub booster_version: String,
    /// Outcome class
    pub outcome: Outcome,
}

impl LaunchRecord {
    /// Create a new launch record
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        booster_version: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            booster_version: booster_version.into(),
            outcome,
        }
    }

    /// Check if this record was launched from `site`
    pub fn is_from(&self, site: &str) -> bool {
        self.launch_site == site
    }
}

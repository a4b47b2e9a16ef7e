//! Filter selections
//!
//! The two pieces of UI state the dashboard controls own: the selected
//! launch site and the selected payload range.

use crate::dataset::LaunchRecord;
use serde::{Deserialize, Serialize};

/// Sentinel value selecting every launch site
pub const ALL_SITES: &str = "ALL";

/// Launch site selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteFilter {
    /// No site restriction
    #[default]
    All,
    /// Only records launched from this site
    Site(String),
}

impl SiteFilter {
    /// Parse a dropdown value; `"ALL"` selects every site
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(value.to_string())
        }
    }

    /// Check whether a record passes this filter
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(site) => record.is_from(site),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteFilter::All)
    }

    /// The selected site, `None` for all sites
    pub fn site(&self) -> Option<&str> {
        match self {
            SiteFilter::All => None,
            SiteFilter::Site(site) => Some(site),
        }
    }
}

impl std::fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteFilter::All => write!(f, "{}", ALL_SITES),
            SiteFilter::Site(site) => write!(f, "{}", site),
        }
    }
}

impl From<String> for SiteFilter {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(value)
        }
    }
}

impl From<SiteFilter> for String {
    fn from(filter: SiteFilter) -> Self {
        match filter {
            SiteFilter::All => ALL_SITES.to_string(),
            SiteFilter::Site(site) => site,
        }
    }
}

/// Closed payload mass interval `[low, high]` in kilograms
///
/// Bounds are not validated. An inverted range (`low > high`) is allowed
/// and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Check if a payload mass lies within the closed interval
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

impl std::fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

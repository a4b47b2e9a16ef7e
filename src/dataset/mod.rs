//! Launch Records Dataset
//!
//! The in-memory table of launch records the dashboard is built on:
//!
//! - **types**: `LaunchRecord` and `Outcome`
//! - **loader**: CSV parsing by header name
//! - **error**: Error types
//!
//! A [`Dataset`] is built once at startup and never modified afterwards.
//! It is shared between request handlers behind an `Arc`.
//!
//! # Example
//!
//! ```rust,no_run
//! use launch_dashboard::dataset::Dataset;
//!
//! let dataset = Dataset::load("spacex_launch_dash.csv").unwrap();
//! println!("{} launches from {} sites", dataset.len(), dataset.sites().len());
//! ```

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{COL_BOOSTER_CATEGORY, COL_CLASS, COL_LAUNCH_SITE, COL_PAYLOAD_MASS};
pub use types::{LaunchRecord, Outcome};

use std::path::Path;

/// Immutable, ordered table of launch records
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    /// Distinct launch sites in order of first appearance
    sites: Vec<String>,
}

impl Dataset {
    /// Build a dataset from records already in memory
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.iter().any(|s| s == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }

        Self { records, sites }
    }

    /// Load a dataset from a CSV file
    pub fn load(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let records = loader::load_path(path)?;
        tracing::debug!("Loaded {} launch records from {:?}", records.len(), path);
        Ok(Self::from_records(records))
    }

    /// Load a dataset from CSV data in any reader
    pub fn from_reader<R: std::io::Read>(source: R) -> DatasetResult<Self> {
        Ok(Self::from_records(loader::load_reader(source)?))
    }

    /// All records in load order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in order of first appearance
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Check whether `site` appears in the dataset
    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest payload mass, `None` for an empty dataset
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        min_max(self.records.iter().map(|r| r.payload_mass_kg))
    }

    /// Initial slider selection: from zero up to the heaviest payload
    pub fn default_payload_range(&self) -> crate::query::PayloadRange {
        let max = self.payload_bounds().map(|(_, hi)| hi).unwrap_or(0.0);
        crate::query::PayloadRange::new(0.0, max)
    }

    /// Summary statistics for logging and the CLI
    pub fn stats(&self) -> DatasetStats {
        let successes = self
            .records
            .iter()
            .filter(|r| r.outcome.is_success())
            .count();

        DatasetStats {
            records: self.records.len(),
            sites: self.sites.len(),
            successes,
            failures: self.records.len() - successes,
            payload_bounds: self.payload_bounds(),
        }
    }
}

/// Smallest and largest value of a sequence, `None` when it is empty
pub(crate) fn min_max(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut iter = values.into_iter();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// Dataset statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DatasetStats {
    pub records: usize,
    pub sites: usize,
    pub successes: usize,
    pub failures: usize,
    pub payload_bounds: Option<(f64, f64)>,
}

impl std::fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "records={}, sites={}, successes={}, failures={}",
            self.records, self.sites, self.successes, self.failures
        )?;
        if let Some((lo, hi)) = self.payload_bounds {
            write!(f, ", payload={}..={} kg", lo, hi)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("B", 500.0, "v1.1", Outcome::Failure),
            LaunchRecord::new("A", 2000.0, "FT", Outcome::Success),
            LaunchRecord::new("B", 1500.0, "FT", Outcome::Success),
            LaunchRecord::new("C", 9600.0, "B4", Outcome::Success),
        ])
    }

    #[test]
    fn test_sites_in_first_appearance_order() {
        let dataset = sample();
        assert_eq!(dataset.sites(), &["B", "A", "C"]);
        assert!(dataset.has_site("C"));
        assert!(!dataset.has_site("D"));
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max([3.0, 1.0, 2.0]), Some((1.0, 3.0)));
        assert_eq!(min_max([4.0]), Some((4.0, 4.0)));
        assert_eq!(min_max(std::iter::empty()), None);
    }

    #[test]
    fn test_payload_bounds() {
        let dataset = sample();
        assert_eq!(dataset.payload_bounds(), Some((500.0, 9600.0)));

        let range = dataset.default_payload_range();
        assert_eq!(range.low, 0.0);
        assert_eq!(range.high, 9600.0);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.payload_bounds(), None);
        assert_eq!(dataset.default_payload_range().high, 0.0);
        assert!(dataset.sites().is_empty());
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.records, 4);
        assert_eq!(stats.sites, 3);
        assert_eq!(stats.successes, 3);
        assert_eq!(stats.failures, 1);
        assert_eq!(
            stats.to_string(),
            "records=4, sites=3, successes=3, failures=1, payload=500..=9600 kg"
        );
    }

    #[test]
    fn test_from_reader() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version Category,class
A,100,v1.0,1
B,200,v1.0,0
A,300,FT,1";

        let dataset = Dataset::from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.sites(), &["A", "B"]);
    }
}

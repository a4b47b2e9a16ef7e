//! Chart-ready summaries produced by the transforms

use crate::dataset::{LaunchRecord, Outcome};
use serde::Serialize;
use std::collections::BTreeMap;

/// Launch counts per outcome class
///
/// Only classes with at least one matching record are present. Keys iterate
/// in class order so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PieSummary {
    counts: BTreeMap<Outcome, usize>,
}

impl PieSummary {
    /// Count one more record with the given outcome
    pub(crate) fn record(&mut self, outcome: Outcome) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    /// Count for an outcome, `None` if no record had it
    pub fn get(&self, outcome: Outcome) -> Option<usize> {
        self.counts.get(&outcome).copied()
    }

    pub fn successes(&self) -> usize {
        self.get(Outcome::Success).unwrap_or(0)
    }

    pub fn failures(&self) -> usize {
        self.get(Outcome::Failure).unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct classes present
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `(outcome, count)` pairs in class order
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, usize)> + '_ {
        self.counts.iter().map(|(o, c)| (*o, *c))
    }
}

impl FromIterator<(Outcome, usize)> for PieSummary {
    fn from_iter<I: IntoIterator<Item = (Outcome, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// One scatter point: a record projected onto the chart's axes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// x axis
    pub payload_mass_kg: f64,
    /// y axis
    pub outcome: Outcome,
    /// color grouping
    pub booster_version: String,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            payload_mass_kg: record.payload_mass_kg,
            outcome: record.outcome,
            booster_version: record.booster_version.clone(),
        }
    }
}

/// Filtered points in original dataset order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScatterSummary {
    points: Vec<ScatterPoint>,
}

impl ScatterSummary {
    pub fn points(&self) -> &[ScatterPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScatterPoint> {
        self.points.iter()
    }

    /// Smallest and largest payload among the points
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        crate::dataset::min_max(self.points.iter().map(|p| p.payload_mass_kg))
    }
}

impl FromIterator<ScatterPoint> for ScatterSummary {
    fn from_iter<I: IntoIterator<Item = ScatterPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ScatterSummary {
    type Item = &'a ScatterPoint;
    type IntoIter = std::slice::Iter<'a, ScatterPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_counts() {
        let mut pie = PieSummary::default();
        pie.record(Outcome::Success);
        pie.record(Outcome::Success);
        pie.record(Outcome::Failure);

        assert_eq!(pie.successes(), 2);
        assert_eq!(pie.failures(), 1);
        assert_eq!(pie.total(), 3);
        assert_eq!(
            pie.iter().collect::<Vec<_>>(),
            vec![(Outcome::Failure, 1), (Outcome::Success, 2)]
        );
    }

    #[test]
    fn test_pie_serializes_as_class_map() {
        let pie: PieSummary = [(Outcome::Success, 3), (Outcome::Failure, 1)]
            .into_iter()
            .collect();
        assert_eq!(serde_json::to_string(&pie).unwrap(), r#"{"0":1,"1":3}"#);
    }

    #[test]
    fn test_pie_missing_class() {
        let pie: PieSummary = [(Outcome::Success, 2)].into_iter().collect();
        assert_eq!(pie.get(Outcome::Failure), None);
        assert_eq!(pie.failures(), 0);
        assert_eq!(pie.len(), 1);
    }

    #[test]
    fn test_scatter_point_json() {
        let record = LaunchRecord::new("A", 525.0, "v1.0", Outcome::Failure);
        let point = ScatterPoint::from(&record);
        let json = serde_json::to_value(&point).unwrap();

        assert_eq!(json["payload_mass_kg"], 525.0);
        assert_eq!(json["outcome"], 0);
        assert_eq!(json["booster_version"], "v1.0");
    }
}

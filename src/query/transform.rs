//! Summary transforms
//!
//! Pure functions of `(Dataset, filter selection)`. They never mutate the
//! dataset and hold no state between calls.

use super::filter::{PayloadRange, SiteFilter};
use super::summary::{PieSummary, ScatterPoint, ScatterSummary};
use crate::dataset::Dataset;

/// Count launches per outcome class for the selected site
///
/// An unknown site matches nothing and yields an empty summary.
pub fn pie_summary(dataset: &Dataset, site: &SiteFilter) -> PieSummary {
    let mut summary = PieSummary::default();
    for record in dataset.records().iter().filter(|r| site.matches(r)) {
        summary.record(record.outcome);
    }
    summary
}

/// Project launches within the payload range and selected site onto
/// `(payload, class, booster category)` points, keeping dataset order
pub fn scatter_summary(dataset: &Dataset, site: &SiteFilter, range: PayloadRange) -> ScatterSummary {
    dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(r))
        .map(ScatterPoint::from)
        .collect()
}

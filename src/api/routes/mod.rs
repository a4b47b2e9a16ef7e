//! API Routes
//!
//! Route handlers organized by functionality.

pub mod charts;
pub mod dashboard;
pub mod health;
pub mod summary;

use crate::dataset::Dataset;
use crate::query::{PayloadRange, SiteFilter};

/// Log selections that are valid but can only produce an empty chart
fn log_selection(dataset: &Dataset, site: &SiteFilter, range: Option<PayloadRange>) {
    if let Some(name) = site.site() {
        if !dataset.has_site(name) {
            tracing::debug!(site = %name, "Selected site is not in the dataset");
        }
    }
    if let Some(range) = range.filter(PayloadRange::is_inverted) {
        tracing::debug!(range = %range, "Inverted payload range selects nothing");
    }
}

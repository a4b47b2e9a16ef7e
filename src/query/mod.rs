//! Launch Query Engine
//!
//! Maps the dataset and the current filter selection to chart-ready data:
//!
//! - **filter**: `SiteFilter` and `PayloadRange` selections
//! - **summary**: `PieSummary` and `ScatterSummary` outputs
//! - **transform**: the `pie_summary` and `scatter_summary` functions
//!
//! # Examples
//!
//! ```rust,ignore
//! use launch_dashboard::query::{pie_summary, scatter_summary, PayloadRange, SiteFilter};
//!
//! // Success/failure counts across every site
//! let pie = pie_summary(&dataset, &SiteFilter::All);
//!
//! // Launches from one site between 2 and 6 tonnes
//! let points = scatter_summary(
//!     &dataset,
//!     &SiteFilter::parse("KSC LC-39A"),
//!     PayloadRange::new(2000.0, 6000.0),
//! );
//! ```

mod filter;
mod summary;
mod transform;

pub use filter::{PayloadRange, SiteFilter, ALL_SITES};
pub use summary::{PieSummary, ScatterPoint, ScatterSummary};
pub use transform::{pie_summary, scatter_summary};

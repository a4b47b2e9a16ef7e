//! Figure descriptions
//!
//! Renderer-independent chart specifications built from summaries. They
//! serialize to JSON for clients that draw their own charts and feed the
//! SVG renderer in [`super::svg`].

use crate::query::{PieSummary, ScatterSummary, SiteFilter};
use serde::Serialize;

/// Chart colors, assigned in order of appearance
pub const SERIES_COLORS: [&str; 10] = [
    "#636EFA", // Blue
    "#EF553B", // Red
    "#00CC96", // Green
    "#AB63FA", // Purple
    "#FFA15A", // Orange
    "#19D3F3", // Cyan
    "#FF6692", // Pink
    "#B6E880", // Lime
    "#FF97FF", // Magenta
    "#FECB52", // Yellow
];

/// Color for the n-th series or slice
pub fn series_color(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Pie chart title for a site selection
pub fn pie_title(site: &SiteFilter) -> String {
    match site {
        SiteFilter::All => "Total Success vs. Failed Launches for All Sites".to_string(),
        SiteFilter::Site(site) => format!("Success vs. Failed Launches for {}", site),
    }
}

/// Scatter chart title for a site selection
pub fn scatter_title(site: &SiteFilter) -> String {
    match site {
        SiteFilter::All => "Correlation between Payload and Success for All Sites".to_string(),
        SiteFilter::Site(site) => format!("Correlation between Payload and Success for {}", site),
    }
}

/// One pie slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    /// Outcome class label ("0" or "1")
    pub label: String,
    pub value: usize,
    /// Share of the total, 0-100
    pub percent: f64,
    pub color: String,
}

/// Two-slice success/failure pie chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieFigure {
    /// Build a pie figure with one slice per outcome class present
    pub fn from_summary(site: &SiteFilter, summary: &PieSummary) -> Self {
        let total = summary.total();
        let slices = summary
            .iter()
            .enumerate()
            .map(|(idx, (outcome, count))| PieSlice {
                label: outcome.to_string(),
                value: count,
                percent: if total == 0 {
                    0.0
                } else {
                    count as f64 * 100.0 / total as f64
                },
                color: series_color(idx).to_string(),
            })
            .collect();

        Self {
            title: pie_title(site),
            slices,
        }
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Points sharing one booster version category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    /// Booster version category
    pub name: String,
    pub color: String,
    /// `(payload mass, class)` pairs in dataset order
    pub points: Vec<(f64, u8)>,
}

/// Payload vs. outcome scatter chart, colored by booster category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Payload bounds of the plotted points, `None` when there are none
    pub x_range: Option<(f64, f64)>,
    pub series: Vec<ScatterSeries>,
}

impl ScatterFigure {
    /// Group summary points by booster category in order of first appearance
    pub fn from_summary(site: &SiteFilter, summary: &ScatterSummary) -> Self {
        let mut series: Vec<ScatterSeries> = Vec::new();

        for point in summary {
            let entry = match series.iter().position(|s| s.name == point.booster_version) {
                Some(idx) => &mut series[idx],
                None => {
                    let color = series_color(series.len()).to_string();
                    series.push(ScatterSeries {
                        name: point.booster_version.clone(),
                        color,
                        points: Vec::new(),
                    });
                    let last = series.len() - 1;
                    &mut series[last]
                }
            };
            entry
                .points
                .push((point.payload_mass_kg, point.outcome.class()));
        }

        Self {
            title: scatter_title(site),
            x_label: crate::dataset::COL_PAYLOAD_MASS.to_string(),
            y_label: crate::dataset::COL_CLASS.to_string(),
            x_range: summary.payload_bounds(),
            series,
        }
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, LaunchRecord, Outcome};
    use crate::query::{pie_summary, scatter_summary, PayloadRange};

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("A", 500.0, "v1.0", Outcome::Success),
            LaunchRecord::new("A", 2000.0, "FT", Outcome::Failure),
            LaunchRecord::new("B", 1500.0, "v1.0", Outcome::Success),
            LaunchRecord::new("B", 3000.0, "FT", Outcome::Success),
        ])
    }

    #[test]
    fn test_titles() {
        assert_eq!(
            pie_title(&SiteFilter::All),
            "Total Success vs. Failed Launches for All Sites"
        );
        assert_eq!(
            pie_title(&SiteFilter::parse("KSC LC-39A")),
            "Success vs. Failed Launches for KSC LC-39A"
        );
        assert_eq!(
            scatter_title(&SiteFilter::All),
            "Correlation between Payload and Success for All Sites"
        );
        assert_eq!(
            scatter_title(&SiteFilter::parse("CCAFS LC-40")),
            "Correlation between Payload and Success for CCAFS LC-40"
        );
    }

    #[test]
    fn test_pie_figure_slices() {
        let dataset = dataset();
        let figure = PieFigure::from_summary(&SiteFilter::All, &pie_summary(&dataset, &SiteFilter::All));

        assert_eq!(figure.slices.len(), 2);
        assert_eq!(figure.slices[0].label, "0");
        assert_eq!(figure.slices[0].value, 1);
        assert_eq!(figure.slices[0].percent, 25.0);
        assert_eq!(figure.slices[1].label, "1");
        assert_eq!(figure.slices[1].value, 3);
        assert_ne!(figure.slices[0].color, figure.slices[1].color);
        assert_eq!(figure.total(), 4);
    }

    #[test]
    fn test_pie_figure_empty() {
        let site = SiteFilter::parse("Z");
        let figure = PieFigure::from_summary(&site, &PieSummary::default());
        assert!(figure.is_empty());
        assert_eq!(figure.title, "Success vs. Failed Launches for Z");
    }

    #[test]
    fn test_scatter_figure_groups_by_booster() {
        let dataset = dataset();
        let summary = scatter_summary(&dataset, &SiteFilter::All, PayloadRange::new(0.0, 5000.0));
        let figure = ScatterFigure::from_summary(&SiteFilter::All, &summary);

        assert_eq!(figure.series.len(), 2);
        assert_eq!(figure.series[0].name, "v1.0");
        assert_eq!(figure.series[0].points, vec![(500.0, 1), (1500.0, 1)]);
        assert_eq!(figure.series[1].name, "FT");
        assert_eq!(figure.series[1].points, vec![(2000.0, 0), (3000.0, 1)]);
        assert_eq!(figure.x_range, Some((500.0, 3000.0)));
        assert_eq!(figure.point_count(), 4);
        assert_eq!(figure.x_label, "Payload Mass (kg)");
        assert_eq!(figure.y_label, "class");
    }

    #[test]
    fn test_scatter_figure_empty() {
        let figure = ScatterFigure::from_summary(&SiteFilter::All, &ScatterSummary::default());
        assert!(figure.is_empty());
        assert!(figure.series.is_empty());
        assert_eq!(figure.x_range, None);
    }

    #[test]
    fn test_series_color_wraps() {
        assert_eq!(series_color(0), series_color(SERIES_COLORS.len()));
    }
}

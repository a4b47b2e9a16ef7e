//! Dashboard Charts
//!
//! Turns query summaries into figures:
//!
//! - **figure**: Titles, pie slices and per-booster scatter series
//! - **svg**: Server-side SVG rendering of figures
//!
//! ```text
//! Summary → Figure (JSON) → SVG
//! ```

pub mod figure;
pub mod svg;

pub use figure::{
    pie_title, scatter_title, series_color, PieFigure, PieSlice, ScatterFigure, ScatterSeries,
    SERIES_COLORS,
};
pub use svg::{render_pie_svg, render_scatter_svg};

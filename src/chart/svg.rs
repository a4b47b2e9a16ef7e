//! SVG rendering for dashboard figures

use super::figure::{PieFigure, ScatterFigure};
use std::f64::consts::PI;
use std::fmt::Write;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 420.0;
const TITLE_Y: f64 = 30.0;

/// Escape text for use inside SVG elements and attributes
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn open_svg(out: &mut String, title: &str) {
    let _ = write!(
        out,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" style="background:white; font-family:sans-serif">
<text x="{cx}" y="{ty}" text-anchor="middle" font-size="17" fill="#2A3F5F">{title}</text>
"##,
        w = WIDTH,
        h = HEIGHT,
        cx = WIDTH / 2.0,
        ty = TITLE_Y,
        title = escape(title),
    );
}

fn no_data(out: &mut String) {
    let _ = writeln!(
        out,
        r##"<text x="{}" y="{}" text-anchor="middle" font-size="14" fill="#888">No data</text>"##,
        WIDTH / 2.0,
        HEIGHT / 2.0
    );
}

/// Render a pie figure; an empty figure shows the title and a notice
pub fn render_pie_svg(figure: &PieFigure) -> String {
    let mut out = String::new();
    open_svg(&mut out, &figure.title);

    let total = figure.total();
    if total == 0 {
        no_data(&mut out);
        out.push_str("</svg>");
        return out;
    }

    let cx = WIDTH / 2.0 - 60.0;
    let cy = HEIGHT / 2.0 + 20.0;
    let r = 150.0;

    // Slices start at twelve o'clock and run clockwise
    let mut start = -PI / 2.0;
    for slice in figure.slices.iter().filter(|s| s.value > 0) {
        let sweep = 2.0 * PI * slice.value as f64 / total as f64;
        let end = start + sweep;

        if slice.value == total {
            let _ = writeln!(
                out,
                r##"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{}" stroke="white"/>"##,
                slice.color
            );
        } else {
            let (x0, y0) = (cx + r * start.cos(), cy + r * start.sin());
            let (x1, y1) = (cx + r * end.cos(), cy + r * end.sin());
            let large_arc = if sweep > PI { 1 } else { 0 };
            let _ = writeln!(
                out,
                r##"<path d="M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z" fill="{}" stroke="white"/>"##,
                slice.color
            );
        }

        let mid = start + sweep / 2.0;
        let (lx, ly) = (cx + 0.6 * r * mid.cos(), cy + 0.6 * r * mid.sin());
        let _ = writeln!(
            out,
            r##"<text x="{lx:.2}" y="{ly:.2}" text-anchor="middle" font-size="13" fill="white">{:.1}%</text>"##,
            slice.percent
        );

        start = end;
    }

    // Legend
    let legend_x = cx + r + 50.0;
    for (idx, slice) in figure.slices.iter().enumerate() {
        let y = cy - r + 20.0 + idx as f64 * 24.0;
        let _ = writeln!(
            out,
            r##"<rect x="{legend_x:.2}" y="{:.2}" width="14" height="14" fill="{}"/><text x="{:.2}" y="{y:.2}" font-size="13" fill="#2A3F5F">{}</text>"##,
            y - 11.0,
            slice.color,
            legend_x + 20.0,
            escape(&slice.label)
        );
    }

    out.push_str("</svg>");
    out
}

/// Render a scatter figure; x covers the plotted payloads, y the two classes
pub fn render_scatter_svg(figure: &ScatterFigure) -> String {
    let mut out = String::new();
    open_svg(&mut out, &figure.title);

    let Some((mut x_min, mut x_max)) = figure.x_range else {
        no_data(&mut out);
        out.push_str("</svg>");
        return out;
    };

    if x_max - x_min < f64::EPSILON {
        x_min -= 500.0;
        x_max += 500.0;
    }
    let pad = (x_max - x_min) * 0.05;
    x_min -= pad;
    x_max += pad;

    let (left, right, top, bottom) = (70.0, WIDTH - 170.0, 60.0, HEIGHT - 60.0);
    let sx = |x: f64| left + (x - x_min) / (x_max - x_min) * (right - left);
    // Classes sit at 0 and 1 with a margin above and below
    let sy = |y: f64| bottom - (y + 0.2) / 1.4 * (bottom - top);

    // Axes
    let _ = writeln!(
        out,
        r##"<line x1="{left}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="#444"/><line x1="{left}" y1="{top}" x2="{left}" y2="{bottom}" stroke="#444"/>"##
    );

    for i in 0..=5 {
        let value = x_min + (x_max - x_min) * i as f64 / 5.0;
        let x = sx(value);
        let _ = writeln!(
            out,
            r##"<line x1="{x:.2}" y1="{bottom}" x2="{x:.2}" y2="{:.2}" stroke="#444"/><text x="{x:.2}" y="{:.2}" text-anchor="middle" font-size="11" fill="#444">{:.0}</text>"##,
            bottom + 5.0,
            bottom + 18.0,
            value
        );
    }

    for class in [0u8, 1u8] {
        let y = sy(class as f64);
        let _ = writeln!(
            out,
            r##"<line x1="{left}" y1="{y:.2}" x2="{right}" y2="{y:.2}" stroke="#EEE"/><text x="{:.2}" y="{:.2}" text-anchor="end" font-size="11" fill="#444">{class}</text>"##,
            left - 8.0,
            y + 4.0
        );
    }

    let _ = writeln!(
        out,
        r##"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="13" fill="#2A3F5F">{}</text>"##,
        (left + right) / 2.0,
        HEIGHT - 20.0,
        escape(&figure.x_label)
    );
    let _ = writeln!(
        out,
        r##"<text x="20" y="{:.2}" text-anchor="middle" font-size="13" fill="#2A3F5F" transform="rotate(-90 20 {:.2})">{}</text>"##,
        (top + bottom) / 2.0,
        (top + bottom) / 2.0,
        escape(&figure.y_label)
    );

    for series in &figure.series {
        for (payload, class) in &series.points {
            let _ = writeln!(
                out,
                r##"<circle cx="{:.2}" cy="{:.2}" r="5" fill="{}" fill-opacity="0.8"/>"##,
                sx(*payload),
                sy(*class as f64),
                series.color
            );
        }
    }

    // Legend
    let legend_x = right + 25.0;
    for (idx, series) in figure.series.iter().enumerate() {
        let y = top + 10.0 + idx as f64 * 22.0;
        let _ = writeln!(
            out,
            r##"<circle cx="{legend_x:.2}" cy="{:.2}" r="5" fill="{}"/><text x="{:.2}" y="{y:.2}" font-size="12" fill="#2A3F5F">{}</text>"##,
            y - 4.0,
            series.color,
            legend_x + 12.0,
            escape(&series.name)
        );
    }

    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, LaunchRecord, Outcome};
    use crate::query::{pie_summary, scatter_summary, PayloadRange, PieSummary, ScatterSummary, SiteFilter};

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("A & B", 500.0, "v1.0", Outcome::Success),
            LaunchRecord::new("A & B", 2000.0, "FT", Outcome::Failure),
        ])
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a & 'b'>"), "&lt;a &amp; &#39;b&#39;&gt;");
    }

    #[test]
    fn test_pie_svg() {
        let site = SiteFilter::parse("A & B");
        let figure = PieFigure::from_summary(&site, &pie_summary(&dataset(), &site));
        let svg = render_pie_svg(&figure);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Success vs. Failed Launches for A &amp; B"));
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains("50.0%"));
    }

    #[test]
    fn test_pie_svg_single_slice_is_circle() {
        let summary: PieSummary = [(Outcome::Success, 4)].into_iter().collect();
        let figure = PieFigure::from_summary(&SiteFilter::All, &summary);
        let svg = render_pie_svg(&figure);

        assert!(!svg.contains("<path"));
        assert!(svg.contains("100.0%"));
    }

    #[test]
    fn test_pie_svg_empty() {
        let figure = PieFigure::from_summary(&SiteFilter::parse("Z"), &PieSummary::default());
        let svg = render_pie_svg(&figure);
        assert!(svg.contains("No data"));
        assert!(svg.contains("Success vs. Failed Launches for Z"));
    }

    #[test]
    fn test_scatter_svg() {
        let summary = scatter_summary(&dataset(), &SiteFilter::All, PayloadRange::new(0.0, 5000.0));
        let figure = ScatterFigure::from_summary(&SiteFilter::All, &summary);
        let svg = render_scatter_svg(&figure);

        assert!(svg.contains("Correlation between Payload and Success for All Sites"));
        // two points plus two legend markers
        assert_eq!(svg.matches("<circle").count(), 4);
        assert!(svg.contains("Payload Mass (kg)"));
    }

    #[test]
    fn test_scatter_svg_single_payload() {
        let summary = scatter_summary(&dataset(), &SiteFilter::All, PayloadRange::new(500.0, 500.0));
        let figure = ScatterFigure::from_summary(&SiteFilter::All, &summary);
        let svg = render_scatter_svg(&figure);

        assert!(!svg.contains("NaN"));
        assert_eq!(svg.matches("<circle").count(), 2);
    }

    #[test]
    fn test_scatter_svg_empty() {
        let figure = ScatterFigure::from_summary(&SiteFilter::All, &ScatterSummary::default());
        assert!(render_scatter_svg(&figure).contains("No data"));
    }
}

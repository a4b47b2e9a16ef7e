//! Launch Dashboard CLI
//!
//! Command-line access to the same transforms the dashboard uses:
//! - List launch sites
//! - Show dataset statistics
//! - Print pie and scatter summaries for a filter selection
//! - Generate a default config file

use clap::{Parser, Subcommand};
use launch_dashboard::config::generate_default_config;
use launch_dashboard::dataset::Dataset;
use launch_dashboard::query::{pie_summary, scatter_summary, PayloadRange, SiteFilter, ALL_SITES};
use launch_dashboard::{PieFigure, ScatterFigure};
use std::fmt::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "launch-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect launch records from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Launch records CSV
    #[arg(short, long, default_value = "spacex_launch_dash.csv", global = true)]
    pub data: PathBuf,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List distinct launch sites
    Sites,

    /// Show dataset statistics
    Stats,

    /// Success/failure counts
    Pie {
        /// Launch site, or ALL
        #[arg(short, long, default_value = ALL_SITES)]
        site: String,
    },

    /// Payload vs. outcome points
    Scatter {
        /// Launch site, or ALL
        #[arg(short, long, default_value = ALL_SITES)]
        site: String,
        /// Lower payload bound in kg (default: 0)
        #[arg(long)]
        low: Option<f64>,
        /// Upper payload bound in kg (default: heaviest payload)
        #[arg(long)]
        high: Option<f64>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let output = match cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    format!("Config written to {:?}\n", path)
                }
                None => content,
            }
        }
        Commands::Sites => format_sites(&open_dataset(&cli.data), json)?,
        Commands::Stats => format_stats(&open_dataset(&cli.data), json)?,
        Commands::Pie { site } => format_pie(&open_dataset(&cli.data), &site, json)?,
        Commands::Scatter { site, low, high } => {
            format_scatter(&open_dataset(&cli.data), &site, low, high, json)?
        }
    };

    print!("{}", output);
    Ok(())
}

fn open_dataset(path: &Path) -> Dataset {
    match Dataset::load(path) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Cannot load launch records from {:?}", path);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn format_sites(dataset: &Dataset, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(dataset.sites())?));
    }

    let mut out = String::new();
    for site in dataset.sites() {
        writeln!(out, "{}", site)?;
    }
    Ok(out)
}

fn format_stats(dataset: &Dataset, json: bool) -> anyhow::Result<String> {
    let stats = dataset.stats();
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&stats)?));
    }

    let mut out = String::new();
    writeln!(out, "Launch records: {}", stats.records)?;
    writeln!(out, "Launch sites:   {}", stats.sites)?;
    writeln!(out, "Successes:      {}", stats.successes)?;
    writeln!(out, "Failures:       {}", stats.failures)?;
    if let Some((lo, hi)) = stats.payload_bounds {
        writeln!(out, "Payload range:  {} - {} kg", lo, hi)?;
    }
    Ok(out)
}

fn format_pie(dataset: &Dataset, site: &str, json: bool) -> anyhow::Result<String> {
    let site = SiteFilter::parse(site);
    let summary = pie_summary(dataset, &site);
    let figure = PieFigure::from_summary(&site, &summary);

    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&figure)?));
    }

    let mut out = String::new();
    writeln!(out, "{}", figure.title)?;
    writeln!(out)?;
    writeln!(out, "{:<8} {:>8} {:>8}", "Class", "Count", "Share")?;
    writeln!(out, "{}", "-".repeat(26))?;
    for slice in &figure.slices {
        writeln!(
            out,
            "{:<8} {:>8} {:>7.1}%",
            slice.label, slice.value, slice.percent
        )?;
    }
    if figure.is_empty() {
        writeln!(out, "(no launches)")?;
    }
    Ok(out)
}

fn format_scatter(
    dataset: &Dataset,
    site: &str,
    low: Option<f64>,
    high: Option<f64>,
    json: bool,
) -> anyhow::Result<String> {
    let site = SiteFilter::parse(site);
    let default = dataset.default_payload_range();
    let range = PayloadRange::new(low.unwrap_or(default.low), high.unwrap_or(default.high));
    let summary = scatter_summary(dataset, &site, range);

    if json {
        let figure = ScatterFigure::from_summary(&site, &summary);
        return Ok(format!("{}\n", serde_json::to_string_pretty(&figure)?));
    }

    let mut out = String::new();
    writeln!(out, "{}", launch_dashboard::chart::scatter_title(&site))?;
    writeln!(out, "Payload range: {} kg", range)?;
    writeln!(out)?;
    writeln!(out, "{:>12} {:>6}  {}", "Payload", "Class", "Booster")?;
    writeln!(out, "{}", "-".repeat(36))?;
    for point in &summary {
        writeln!(
            out,
            "{:>12.1} {:>6}  {}",
            point.payload_mass_kg,
            point.outcome.class(),
            point.booster_version
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{} launches", summary.len())?;
    Ok(out)
}

//! CSV Loader
//!
//! Reads the launch records table from a delimited file. Columns are matched
//! by header name, so extra columns and column order do not matter.

use super::error::{DatasetError, DatasetResult};
use super::types::{LaunchRecord, Outcome};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Header of the launch site column
pub const COL_LAUNCH_SITE: &str = "Launch Site";
/// Header of the payload mass column
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
/// Header of the booster version category column
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
/// Header of the outcome class column
pub const COL_CLASS: &str = "class";

const REQUIRED_COLUMNS: [&str; 4] = [
    COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS,
    COL_BOOSTER_CATEGORY,
    COL_CLASS,
];

/// One CSV row as it appears on disk
#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version: String,
    #[serde(rename = "class")]
    class: f64,
}

impl RawLaunchRow {
    fn into_record(self, line: u64) -> DatasetResult<LaunchRecord> {
        if !self.payload_mass_kg.is_finite() {
            return Err(invalid(line, "payload mass is not a finite number"));
        }
        if self.payload_mass_kg < 0.0 {
            return Err(invalid(
                line,
                format!("negative payload mass: {}", self.payload_mass_kg),
            ));
        }

        // Accept "1" and "1.0" alike
        let outcome = Some(self.class)
            .filter(|c| c.fract() == 0.0)
            .and_then(|c| Outcome::from_class(c as i64))
            .ok_or_else(|| invalid(line, format!("invalid outcome class: {}", self.class)))?;

        Ok(LaunchRecord {
            launch_site: self.launch_site,
            payload_mass_kg: self.payload_mass_kg,
            booster_version: self.booster_version,
            outcome,
        })
    }
}

fn invalid(line: u64, message: impl Into<String>) -> DatasetError {
    DatasetError::InvalidRecord {
        line,
        message: message.into(),
    }
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

/// Load launch records from a CSV file
pub fn load_path(path: &Path) -> DatasetResult<Vec<LaunchRecord>> {
    let reader = reader_builder().from_path(path)?;
    read_records(reader)
}

/// Load launch records from any reader (useful for testing)
pub fn load_reader<R: Read>(source: R) -> DatasetResult<Vec<LaunchRecord>> {
    read_records(reader_builder().from_reader(source))
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> DatasetResult<Vec<LaunchRecord>> {
    let headers = reader.headers()?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let raw: RawLaunchRow = row
            .deserialize(Some(&headers))
            .map_err(|e| invalid(line, e.to_string()))?;

        records.push(raw.into_record(line)?);
    }

    Ok(records)
}

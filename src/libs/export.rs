//! Writing battery record exports to disk.
//!
//! Two sources are supported:
//!
//! - **Service export**: the CSV produced by the service's export endpoint,
//!   saved byte for byte ([`Exporter::save_download`]).
//! - **Search results**: rows already fetched by a search, written locally
//!   with the same column rules as the table view ([`Exporter::write_rows`]).

use super::view::{cell_text, columns};
use crate::api::SearchRow;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name for a battery export, `battery_<id>_export.csv`.
pub fn default_file_name(battery_id: &str) -> String {
    format!("battery_{}_export.csv", battery_id)
}

pub struct Exporter {
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(battery_id: &str, output: Option<PathBuf>) -> Self {
        Self {
            output_path: output.unwrap_or_else(|| PathBuf::from(default_file_name(battery_id))),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Saves downloaded CSV bytes and returns the number of data rows.
    pub fn save_download(&self, bytes: &[u8]) -> Result<usize> {
        if let Some(parent) = self.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.output_path, bytes)?;
        count_rows(bytes)
    }

    /// Writes search rows as CSV, columns taken from the first row.
    pub fn write_rows(&self, rows: &[SearchRow]) -> Result<usize> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        let header = columns(rows);
        wtr.write_record(&header)?;

        for row in rows {
            wtr.write_record(header.iter().map(|key| cell_text(row.get(key))))?;
        }

        wtr.flush()?;
        Ok(rows.len())
    }
}

/// Counts data rows in CSV content, excluding the header line.
pub fn count_rows(bytes: &[u8]) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(bytes);
    let mut count = 0;
    for record in reader.records() {
        record?;
        count += 1;
    }
    Ok(count)
}

use super::record::{ChargingRecord, Field};
use super::validator::ValidationErrors;
use crate::api::SearchRow;
use prettytable::{row, Cell, Row, Table};
use serde_json::Value;

/// Placeholder for missing or null cells.
pub const EMPTY_CELL: &str = "-";

/// Column keys of a search result: the keys of the first row, in order.
pub fn columns(rows: &[SearchRow]) -> Vec<String> {
    rows.first().map(|row| row.keys().cloned().collect()).unwrap_or_default()
}

pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => EMPTY_CELL.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

pub struct View {}

impl View {
    pub fn rows_table(rows: &[SearchRow]) -> Table {
        let header = columns(rows);
        let mut table = Table::new();

        table.set_titles(Row::new(header.iter().map(|key| Cell::new(key)).collect()));
        for row in rows {
            table.add_row(Row::new(header.iter().map(|key| Cell::new(&cell_text(row.get(key)))).collect()));
        }
        table
    }

    pub fn rows(rows: &[SearchRow]) {
        Self::rows_table(rows).printstd();
    }

    pub fn errors(errors: &ValidationErrors) {
        let mut table = Table::new();
        table.set_titles(row!["FIELD", "ERROR"]);
        for (field, error) in errors.iter() {
            table.add_row(row![field.label(), error]);
        }
        table.printstd();
    }

    /// Summary of a filled-in form before it is submitted.
    pub fn record_table(record: &ChargingRecord) -> Table {
        let mut table = Table::new();
        for field in Field::ALL {
            let value = record.get(field);
            let shown = if value.is_empty() { EMPTY_CELL } else { value };
            table.add_row(row![field.label(), shown]);
        }
        table
    }

    pub fn record(record: &ChargingRecord) {
        Self::record_table(record).printstd();
    }
}

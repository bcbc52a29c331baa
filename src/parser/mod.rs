//! CSV parsing and record store construction

use crate::error::{ConvertError, ConvertResult};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::PathBuf;

/// One row of source data: a field-name-to-value mapping.
///
/// Every value is a JSON string as read from the CSV. Key order follows the
/// header row, so encoding is deterministic.
pub type Record = Value;

/// The full ordered collection of records for one run.
pub type RecordStore = Vec<Record>;

/// Source for CSV parsing operations
#[derive(Debug, Clone)]
pub enum CsvSource {
    String(String),
    File(PathBuf),
    Stdin,
}

impl CsvSource {
    /// Parse the source into a record store.
    ///
    /// A missing file is a `CsvNotFound` error naming the path; malformed
    /// CSV rows propagate as unclassified failures.
    pub fn parse(&self) -> ConvertResult<RecordStore> {
        match self {
            CsvSource::String(content) => read_records(content.as_bytes()),
            CsvSource::File(path) => {
                let file = std::fs::File::open(path)
                    .map_err(|_| ConvertError::csv_not_found(path.clone()))?;
                read_records(file)
            }
            CsvSource::Stdin => read_records(std::io::stdin()),
        }
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            CsvSource::String(_) => "string input".to_string(),
            CsvSource::File(path) => format!("file: {}", path.display()),
            CsvSource::Stdin => "standard input".to_string(),
        }
    }
}

/// Read CSV rows into records keyed by the header row.
///
/// Short rows are padded with empty strings; values past the header set are
/// dropped. Non-ASCII text survives unchanged (input is required UTF-8).
fn read_records<R: Read>(reader: R) -> ConvertResult<RecordStore> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| ConvertError::Other(anyhow::anyhow!("cannot read CSV header: {}", e)))?
        .clone();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row =
            row.map_err(|e| ConvertError::Other(anyhow::anyhow!("cannot read CSV row: {}", e)))?;

        let mut fields = Map::new();
        for (index, header) in headers.iter().enumerate() {
            let value = row.get(index).unwrap_or("");
            fields.insert(header.to_string(), Value::String(value.to_string()));
        }
        records.push(Value::Object(fields));
    }

    Ok(records)
}

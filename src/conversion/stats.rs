//! Per-run reporting for conversion operations

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// What one conversion run did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Records admitted by validation and written to every output
    pub total_records: usize,
    /// Records dropped by lenient field validation
    pub removed_records: usize,
    /// Aggregate schema error count (coarse, 0 or 1)
    pub schema_errors: usize,
    /// Output files written, in request order
    pub outputs: Vec<PathBuf>,
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u64,
    /// When the run finished
    pub completed_at: chrono::DateTime<chrono::Utc>,
}

impl ConversionReport {
    pub fn new(
        total_records: usize,
        removed_records: usize,
        schema_errors: usize,
        outputs: Vec<PathBuf>,
        elapsed: Duration,
    ) -> Self {
        Self {
            total_records,
            removed_records,
            schema_errors,
            outputs,
            processing_time_ms: elapsed.as_millis() as u64,
            completed_at: chrono::Utc::now(),
        }
    }

    /// One-line human-readable summary for the terminal.
    pub fn summary(&self) -> String {
        let formats: Vec<String> = self
            .outputs
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        format!(
            "Converted {} records to {} ({} removed, {} schema errors)",
            self.total_records,
            formats.join(", "),
            self.removed_records,
            self.schema_errors
        )
    }
}

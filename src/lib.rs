//! CSV Converter
//!
//! A Rust CLI tool for converting CSV data into structured output formats
//! (JSON and XML) with field-level validation and an externally configurable
//! schema check.

// Allow dead code for library exports that may not be used by the binary yet
#![allow(dead_code)]

pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod validation;

// Re-export commonly used types
pub use conversion::{ConversionConfig, ConversionEngine, ConversionReport, LogLevel};
pub use error::{ConvertError, ConvertErrorKind, ConvertResult};
pub use formatter::Encoder;
pub use parser::{CsvSource, Record, RecordStore};
pub use validation::{SchemaValidator, ValidationGate, ValidationMode};

/// Convert a CSV file into the requested formats with default configuration
pub fn convert_csv_file(
    path: impl Into<std::path::PathBuf>,
    formats: &[String],
) -> ConvertResult<ConversionReport> {
    convert_csv_file_with_config(path, formats, ConversionConfig::default())
}

/// Convert a CSV file into the requested formats with custom configuration
pub fn convert_csv_file_with_config(
    path: impl Into<std::path::PathBuf>,
    formats: &[String],
    config: ConversionConfig,
) -> ConvertResult<ConversionReport> {
    let engine = ConversionEngine::new(config)?;
    engine.run(&CsvSource::File(path.into()), formats)
}

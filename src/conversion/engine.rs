//! Core orchestration: parse, validate, dispatch to encoders, report

use crate::conversion::config::{ConversionConfig, LogLevel};
use crate::conversion::stats::ConversionReport;
use crate::error::ConvertResult;
use crate::formatter;
use crate::parser::{CsvSource, RecordStore};
use crate::validation::{SchemaValidator, ValidationGate, ValidationMode};
use serde_json::Value;
use std::time::Instant;

/// Main conversion engine.
///
/// One engine owns one run: load the source, run the validation gate, then
/// dispatch the admitted records to each requested format in order. The first
/// failing format aborts the remaining ones.
pub struct ConversionEngine {
    config: ConversionConfig,
    schema: SchemaValidator,
}

impl ConversionEngine {
    /// Create an engine with the schema resolved from the standard
    /// locations (`~/.config/validate.json`, else the project default).
    pub fn new(config: ConversionConfig) -> ConvertResult<Self> {
        let schema = SchemaValidator::from_default_locations()?;
        Ok(Self::with_schema(config, schema))
    }

    /// Create an engine with an explicitly loaded schema.
    pub fn with_schema(config: ConversionConfig, schema: SchemaValidator) -> Self {
        Self { config, schema }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Run the full conversion sequence for one source and a list of
    /// requested formats.
    pub fn run(&self, source: &CsvSource, formats: &[String]) -> ConvertResult<ConversionReport> {
        let start = Instant::now();

        self.info(&format!("parsing {}", source.description()));
        let mut records = source.parse()?;
        self.debug(&format!("parsed {} records", records.len()));

        self.info("validating records");
        let mode = if self.config.strict {
            ValidationMode::Strict
        } else {
            ValidationMode::Lenient
        };
        let gate = ValidationGate::new(mode);
        let gate_report = gate.admit(&mut records, &self.schema)?;
        self.debug(&format!(
            "admitted {} records, removed {}, {} schema errors",
            gate_report.admitted, gate_report.removed, gate_report.schema_errors
        ));

        if let Some(key) = &self.config.sort_key {
            sort_records(&mut records, key);
        }

        let output_dir = self.config.resolve_output_dir();
        let progress = self.format_progress(formats.len() as u64);
        let mut outputs = Vec::with_capacity(formats.len());
        for format in formats {
            progress.set_message(format.to_uppercase());
            self.debug(&format!("dispatching to the {} encoder", format));
            let written = formatter::dispatch(
                format,
                &records,
                &output_dir,
                &self.config.output_name,
                self.config.pretty,
            )?;
            outputs.push(written);
            progress.inc(1);
        }
        progress.finish_and_clear();

        Ok(ConversionReport::new(
            records.len(),
            gate_report.removed,
            gate_report.schema_errors,
            outputs,
            start.elapsed(),
        ))
    }

    fn format_progress(&self, total: u64) -> indicatif::ProgressBar {
        if self.config.quiet || !atty::is(atty::Stream::Stdout) {
            return indicatif::ProgressBar::hidden();
        }
        let bar = indicatif::ProgressBar::new(total);
        bar.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar
    }

    fn info(&self, message: &str) {
        if self.config.log_level >= LogLevel::Info {
            eprintln!("[info] {}", message);
        }
    }

    fn debug(&self, message: &str) {
        if self.config.log_level >= LogLevel::Debug {
            eprintln!("[debug] {}", message);
        }
    }
}

/// Stable sort by the text value of one field; records without the field
/// sort first.
fn sort_records(records: &mut RecordStore, key: &str) {
    records.sort_by(|a, b| {
        let left = a.get(key).and_then(Value::as_str).unwrap_or("");
        let right = b.get(key).and_then(Value::as_str).unwrap_or("");
        left.cmp(right)
    });
}

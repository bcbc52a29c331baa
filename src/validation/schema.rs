//! Externally configurable schema validation
//!
//! The schema is a JSON Schema (draft 7) document named `validate.json`,
//! resolved from the user configuration directory first and the project root
//! second. Changing the schema changes what the second validation phase
//! accepts without touching any code.

use crate::error::{ConvertError, ConvertResult};
use crate::parser::Record;
use serde_json::Value;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "validate.json";

/// Schema-based validator, loaded once per run.
#[derive(Debug)]
pub struct SchemaValidator {
    validator: jsonschema::Validator,
    settings_path: PathBuf,
}

impl SchemaValidator {
    /// Load the schema from the standard resolution order:
    /// `~/.config/validate.json`, else `validate.json` at the project root.
    /// Neither existing is a fatal configuration error.
    pub fn from_default_locations() -> ConvertResult<Self> {
        let path = resolve_settings_path().ok_or_else(|| {
            ConvertError::settings_not_found(format!(
                "~/.config/{} and the project root",
                SETTINGS_FILE
            ))
        })?;
        Self::from_path(&path)
    }

    /// Load the schema from an explicit path.
    pub fn from_path(path: &Path) -> ConvertResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|_| ConvertError::settings_not_found(path.display().to_string()))?;

        let document: Value = serde_json::from_str(&raw)
            .map_err(|e| ConvertError::invalid_schema(format!("not valid JSON: {}", e)))?;

        let validator = jsonschema::draft7::new(&document)
            .map_err(|e| ConvertError::invalid_schema(e.to_string()))?;

        Ok(Self {
            validator,
            settings_path: path.to_path_buf(),
        })
    }

    /// The path the schema was loaded from.
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Check every record against the schema and report the aggregate error
    /// count.
    ///
    /// The count is the number of validation runs that ended with any error,
    /// so it is 0 or 1 regardless of how many records fail. This mirrors the
    /// observed contract of the tool being replaced; callers wanting
    /// per-record diagnostics should use [`Self::errors_for`].
    pub fn validate(&self, records: &[Record]) -> usize {
        let any_failed = records
            .iter()
            .any(|record| !self.validator.is_valid(record));

        usize::from(any_failed)
    }

    /// Per-record schema error messages, for diagnostics.
    pub fn errors_for(&self, record: &Record) -> Vec<String> {
        self.validator
            .iter_errors(record)
            .map(|e| e.to_string())
            .collect()
    }
}

/// First user-level override, then the bundled default.
fn resolve_settings_path() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os("HOME") {
        let user_path = Path::new(&home).join(".config").join(SETTINGS_FILE);
        if user_path.is_file() {
            return Some(user_path);
        }
    }

    let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join(SETTINGS_FILE);
    if bundled.is_file() {
        return Some(bundled);
    }

    None
}

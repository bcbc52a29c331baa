//! Error types and handling infrastructure for CSV conversion

use anyhow::Error;
use std::path::PathBuf;

/// Core error kinds for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConvertErrorKind {
    #[error("CSV not found: {}", path.display())]
    CsvNotFound { path: PathBuf },

    #[error("validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("settings not found: searched {searched}")]
    SettingsNotFound { searched: String },

    #[error("invalid schema: {message}")]
    InvalidSchema { message: String },

    #[error("formatter not found for '{format}'")]
    FormatterNotFound { format: String },

    #[error("error converting to {format}")]
    Conversion { format: String },

    #[error("field '{field}' must be {expected}")]
    ContractViolation { field: String, expected: String },
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("{kind}")]
    Convert {
        kind: ConvertErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ConvertError {
    pub fn csv_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Convert {
            kind: ConvertErrorKind::CsvNotFound { path: path.into() },
            source: None,
        }
    }

    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::Convert {
            kind: ConvertErrorKind::ValidationFailed {
                message: message.into(),
            },
            source: None,
        }
    }

    pub fn settings_not_found(searched: impl Into<String>) -> Self {
        Self::Convert {
            kind: ConvertErrorKind::SettingsNotFound {
                searched: searched.into(),
            },
            source: None,
        }
    }

    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::Convert {
            kind: ConvertErrorKind::InvalidSchema {
                message: message.into(),
            },
            source: None,
        }
    }

    pub fn formatter_not_found(format: impl Into<String>) -> Self {
        Self::Convert {
            kind: ConvertErrorKind::FormatterNotFound {
                format: format.into(),
            },
            source: None,
        }
    }

    pub fn conversion(format: impl Into<String>) -> Self {
        Self::Convert {
            kind: ConvertErrorKind::Conversion {
                format: format.into(),
            },
            source: None,
        }
    }

    pub fn conversion_with_source(format: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Convert {
            kind: ConvertErrorKind::Conversion {
                format: format.into(),
            },
            source: Some(source),
        }
    }

    pub fn contract_violation(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::Convert {
            kind: ConvertErrorKind::ContractViolation {
                field: field.into(),
                expected: expected.into(),
            },
            source: None,
        }
    }

    pub fn contract_violation_with_source(
        field: impl Into<String>,
        expected: impl Into<String>,
        source: anyhow::Error,
    ) -> Self {
        Self::Convert {
            kind: ConvertErrorKind::ContractViolation {
                field: field.into(),
                expected: expected.into(),
            },
            source: Some(source),
        }
    }

    /// The classified kind of this error, if it has one.
    pub fn kind(&self) -> Option<&ConvertErrorKind> {
        match self {
            Self::Convert { kind, .. } => Some(kind),
            Self::Other(_) => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Convert { kind, .. } => match kind {
                ConvertErrorKind::CsvNotFound { path } => {
                    format!(
                        "{} not found. Are you in the right directory?",
                        path.display()
                    )
                }
                ConvertErrorKind::ValidationFailed { .. } => {
                    "Validation failed. Please check your csv file for invalid names/stars/uri."
                        .to_string()
                }
                ConvertErrorKind::SettingsNotFound { .. } => {
                    "Please make sure that validate.json is present in ~/.config or the project root."
                        .to_string()
                }
                ConvertErrorKind::InvalidSchema { .. } => {
                    "There is a problem with your schema. Please check validate.json.".to_string()
                }
                ConvertErrorKind::FormatterNotFound { format } => {
                    format!("{} is not supported yet. Can you add support for this format?", format)
                }
                ConvertErrorKind::Conversion { format } => {
                    format!(
                        "There was a problem converting and writing the {} output file.",
                        format
                    )
                }
                ConvertErrorKind::ContractViolation { field, expected } => {
                    format!("Field '{}' must be {}.", field, expected)
                }
            },
            Self::Other(err) => err.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

//! Configuration options for one conversion run

use clap::ValueEnum;
use std::path::PathBuf;

/// Diagnostic verbosity, configured once at process start and carried in the
/// config handle instead of any process-wide logger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    /// No diagnostics
    Notset,
    /// High-level progress diagnostics
    Info,
    /// Per-step diagnostics
    Debug,
}

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Base name of the output files, without extension
    pub output_name: String,
    /// Pretty-print output (vs compact)
    pub pretty: bool,
    /// Abort the run on any validation violation
    pub strict: bool,
    /// Optional field to sort admitted records by before encoding
    pub sort_key: Option<String>,
    /// Diagnostic verbosity
    pub log_level: LogLevel,
    /// Suppress non-error terminal output
    pub quiet: bool,
    /// Directory for output files; the current working directory when unset
    pub output_dir: Option<PathBuf>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            output_name: "output".to_string(),
            pretty: false,
            strict: false,
            sort_key: None,
            log_level: LogLevel::Notset,
            quiet: false,
            output_dir: None,
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output base name
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = name.into();
        self
    }

    /// Enable/disable pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Enable/disable strict validation
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sort admitted records by a field before encoding
    pub fn with_sort_key(mut self, key: impl Into<String>) -> Self {
        self.sort_key = Some(key.into());
        self
    }

    /// Set diagnostic verbosity
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Suppress non-error terminal output
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Write output files into an explicit directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Directory output files land in.
    pub fn resolve_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

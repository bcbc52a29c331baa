//! CSV to structured-format conversion
//!
//! This module contains the orchestration logic, configuration, and run
//! reporting.

pub mod config;
pub mod engine;
pub mod stats;

pub use config::{ConversionConfig, LogLevel};
pub use engine::ConversionEngine;
pub use stats::ConversionReport;

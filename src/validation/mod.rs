//! Record validation: fixed field rules plus the external schema check

pub mod fields;
pub mod gate;
pub mod schema;

pub use gate::{GateReport, ValidationGate, ValidationMode};
pub use schema::SchemaValidator;

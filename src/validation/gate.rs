//! Two-phase validation gate run before any conversion

use crate::error::{ConvertError, ConvertResult};
use crate::parser::RecordStore;
use crate::validation::fields;
use crate::validation::schema::SchemaValidator;

/// What the gate decided about a record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateReport {
    /// Records remaining after admission.
    pub admitted: usize,
    /// Records dropped by lenient field validation.
    pub removed: usize,
    /// Aggregate schema error count (coarse, 0 or 1).
    pub schema_errors: usize,
}

/// Admission policy for records failing field rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Any violation aborts the whole run.
    Strict,
    /// Failing records are dropped and the run continues.
    Lenient,
}

/// Orchestrates field-level rules and the schema check over a record store.
pub struct ValidationGate {
    mode: ValidationMode,
}

impl ValidationGate {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn strict(&self) -> bool {
        self.mode == ValidationMode::Strict
    }

    /// Run both validation phases.
    ///
    /// Phase 1 applies the field rules. Strict mode fails the run on the
    /// first offending record; lenient mode removes offenders in place, and
    /// an empty store afterwards is still valid input. Phase 2 runs the
    /// schema validator over whatever remains and never mutates; a nonzero
    /// aggregate fails the run only under strict mode.
    pub fn admit(
        &self,
        records: &mut RecordStore,
        schema: &SchemaValidator,
    ) -> ConvertResult<GateReport> {
        let before = records.len();

        let mut verdicts = Vec::with_capacity(records.len());
        for record in records.iter() {
            let valid = fields::is_record_valid(record)?;
            if !valid && self.strict() {
                return Err(ConvertError::validation_failed(
                    "a record failed field-level validation",
                ));
            }
            verdicts.push(valid);
        }

        let mut index = 0;
        records.retain(|_| {
            let keep = verdicts[index];
            index += 1;
            keep
        });
        let removed = before - records.len();

        let schema_errors = schema.validate(records);
        if self.strict() && schema_errors > 0 {
            return Err(ConvertError::validation_failed(
                "records violate the external schema",
            ));
        }

        Ok(GateReport {
            admitted: records.len(),
            removed,
            schema_errors,
        })
    }
}

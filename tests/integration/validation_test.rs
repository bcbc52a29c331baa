//! Validation policy tests: strict vs lenient, schema phase behavior

use assert_matches::assert_matches;
use csvconv::{
    ConversionConfig, ConversionEngine, ConvertErrorKind, CsvSource, SchemaValidator,
    ValidationGate, ValidationMode,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use std::path::Path;
use tempfile::{tempdir, NamedTempFile};

fn schema_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

fn engine_with_schema(dir: &Path, schema: &NamedTempFile, strict: bool) -> ConversionEngine {
    let validator = SchemaValidator::from_path(schema.path()).unwrap();
    let config = ConversionConfig::new()
        .with_output_dir(dir)
        .with_strict(strict)
        .with_quiet(true);
    ConversionEngine::with_schema(config, validator)
}

#[test]
fn test_strict_run_aborts_before_any_output() {
    let dir = tempdir().unwrap();
    let schema = schema_file(r#"{ "type": "object" }"#);
    let engine = engine_with_schema(dir.path(), &schema, true);

    let csv = "name,stars,uri\nOverrated,100,http://www.example.com";
    let err = engine
        .run(&CsvSource::String(csv.to_string()), &["json".to_string()])
        .unwrap_err();

    assert_matches!(err.kind(), Some(ConvertErrorKind::ValidationFailed { .. }));
    assert!(!dir.path().join("output.json").exists());
}

#[test]
fn test_lenient_run_drops_invalid_and_continues() {
    let dir = tempdir().unwrap();
    let schema = schema_file(r#"{ "type": "object" }"#);
    let engine = engine_with_schema(dir.path(), &schema, false);

    let csv = "name,stars,uri\n\
        Overrated,100,http://www.example.com\n\
        Decent,5,http://www.example.com";
    let report = engine
        .run(&CsvSource::String(csv.to_string()), &["json".to_string()])
        .unwrap();

    assert_eq!(report.total_records, 1);
    assert_eq!(report.removed_records, 1);

    let decoded: Vec<serde_json::Value> = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("output.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0]["name"], "Decent");
}

#[test]
fn test_strict_schema_violation_also_aborts() {
    let dir = tempdir().unwrap();
    let schema = schema_file(r#"{ "type": "object", "required": ["phone"] }"#);
    let engine = engine_with_schema(dir.path(), &schema, true);

    // Field rules pass; only the schema phase rejects.
    let csv = "name,stars,uri\nFine,5,http://www.example.com";
    let err = engine
        .run(&CsvSource::String(csv.to_string()), &["json".to_string()])
        .unwrap_err();

    assert_matches!(err.kind(), Some(ConvertErrorKind::ValidationFailed { .. }));
}

#[test]
fn test_lenient_schema_violations_counted_not_raised() {
    let dir = tempdir().unwrap();
    let schema = schema_file(r#"{ "type": "object", "required": ["phone"] }"#);
    let engine = engine_with_schema(dir.path(), &schema, false);

    let csv = "name,stars,uri\n\
        One,5,http://www.example.com\n\
        Two,4,http://www.example.com";
    let report = engine
        .run(&CsvSource::String(csv.to_string()), &["json".to_string()])
        .unwrap();

    // The aggregate is the number of validation runs with any error, not a
    // per-record count. Both records violate the schema, the count is 1.
    // Known coarse behavior, preserved deliberately.
    assert_eq!(report.schema_errors, 1);
    assert_eq!(report.total_records, 2);
}

#[test]
fn test_schema_aggregate_is_coarse() {
    let schema = schema_file(
        r#"{ "type": "object", "required": ["name"], "properties": { "name": { "minLength": 2 } } }"#,
    );
    let validator = SchemaValidator::from_path(schema.path()).unwrap();

    // Three failing records still yield an aggregate of 1.
    let records = vec![json!({}), json!({"name": "x"}), json!({})];
    assert_eq!(validator.validate(&records), 1);
}

#[test]
fn test_gate_usable_directly() {
    let schema = schema_file(r#"{ "type": "object" }"#);
    let validator = SchemaValidator::from_path(schema.path()).unwrap();
    let gate = ValidationGate::new(ValidationMode::Lenient);

    let mut records = vec![
        json!({"name": "Keep", "stars": "3", "uri": "http://www.example.com"}),
        json!({"name": "Drop", "stars": "9", "uri": "http://www.example.com"}),
    ];
    let report = gate.admit(&mut records, &validator).unwrap();

    assert_eq!(report.admitted, 1);
    assert_eq!(records[0]["name"], "Keep");
}

#[test]
fn test_missing_settings_surfaces_as_settings_not_found() {
    let err = SchemaValidator::from_path(Path::new("nowhere/validate.json")).unwrap_err();
    assert_matches!(err.kind(), Some(ConvertErrorKind::SettingsNotFound { .. }));
}

#[test]
fn test_malformed_settings_surfaces_as_invalid_schema() {
    let schema = schema_file("{ definitely not json");
    let err = SchemaValidator::from_path(schema.path()).unwrap_err();
    assert_matches!(err.kind(), Some(ConvertErrorKind::InvalidSchema { .. }));
}

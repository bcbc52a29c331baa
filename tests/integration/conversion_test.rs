//! End-to-end conversion tests through the library API

use csvconv::{ConversionConfig, ConversionEngine, CsvSource, SchemaValidator};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{tempdir, NamedTempFile};

const HOTELS_CSV: &str = "name,address,stars,contact,phone,uri\n\
    Jürgen-Gehringer,\"63847 Lowe Knoll, East Maxine, WA 97030-4876\",5,\
    Dr. Sinda Wyman,1-270-665-9933x1626,http://www.paucek.com/search.htm";

fn permissive_schema() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", r#"{ "type": "object" }"#).unwrap();
    file
}

fn engine_for(dir: &Path, pretty: bool) -> (NamedTempFile, ConversionEngine) {
    let schema_file = permissive_schema();
    let schema = SchemaValidator::from_path(schema_file.path()).unwrap();
    let config = ConversionConfig::new()
        .with_output_dir(dir)
        .with_output_name("data")
        .with_pretty(pretty)
        .with_quiet(true);
    (schema_file, ConversionEngine::with_schema(config, schema))
}

#[test]
fn test_hotel_scenario_produces_expected_json() {
    let dir = tempdir().unwrap();
    let (_schema, engine) = engine_for(dir.path(), true);

    let report = engine
        .run(
            &CsvSource::String(HOTELS_CSV.to_string()),
            &["json".to_string()],
        )
        .unwrap();
    assert_eq!(report.total_records, 1);

    let contents = fs::read_to_string(dir.path().join("data.json")).unwrap();
    let decoded: Vec<Value> = serde_json::from_str(&contents).unwrap();

    assert_eq!(decoded.len(), 1);
    let entry = decoded[0].as_object().unwrap();
    assert_eq!(entry["name"], "Jürgen-Gehringer");
    assert_eq!(entry["stars"], "5");
    assert_eq!(entry["address"], "63847 Lowe Knoll, East Maxine, WA 97030-4876");
    assert_eq!(entry["uri"], "http://www.paucek.com/search.htm");
}

#[test]
fn test_json_round_trip_preserves_record_sequence() {
    let dir = tempdir().unwrap();
    let (_schema, engine) = engine_for(dir.path(), false);

    let csv = "name,stars,uri\n\
        First,1,http://www.example.com\n\
        Second,2,http://www.example.com\n\
        Third,3,http://www.example.com";
    engine
        .run(&CsvSource::String(csv.to_string()), &["json".to_string()])
        .unwrap();

    let decoded: Vec<Value> =
        serde_json::from_str(&fs::read_to_string(dir.path().join("data.json")).unwrap()).unwrap();

    let names: Vec<&str> = decoded.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);

    for record in &decoded {
        let keys: Vec<&String> = record.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["name", "stars", "uri"]);
    }
}

#[test]
fn test_xml_output_parses_back_with_same_shape() {
    let dir = tempdir().unwrap();
    let (_schema, engine) = engine_for(dir.path(), true);

    engine
        .run(
            &CsvSource::String(HOTELS_CSV.to_string()),
            &["xml".to_string()],
        )
        .unwrap();

    let contents = fs::read_to_string(dir.path().join("data.xml")).unwrap();

    let mut reader = quick_xml::Reader::from_str(&contents);
    let mut items = 0;
    let mut fields = 0;
    let mut depth = 0;
    loop {
        match reader.read_event().unwrap() {
            quick_xml::events::Event::Start(e) => {
                depth += 1;
                if depth == 2 && e.name().as_ref() == b"item" {
                    items += 1;
                } else if depth == 3 {
                    fields += 1;
                }
            }
            quick_xml::events::Event::End(_) => depth -= 1,
            quick_xml::events::Event::Eof => break,
            _ => {}
        }
    }
    assert_eq!(items, 1);
    assert_eq!(fields, 6);
    assert!(contents.contains("Jürgen-Gehringer"));
}

#[test]
fn test_second_run_overwrites_byte_identically() {
    let dir = tempdir().unwrap();
    let (_schema, engine) = engine_for(dir.path(), true);
    let source = CsvSource::String(HOTELS_CSV.to_string());
    let formats = vec!["json".to_string(), "xml".to_string()];

    engine.run(&source, &formats).unwrap();
    let first_json = fs::read(dir.path().join("data.json")).unwrap();
    let first_xml = fs::read(dir.path().join("data.xml")).unwrap();

    engine.run(&source, &formats).unwrap();
    assert_eq!(fs::read(dir.path().join("data.json")).unwrap(), first_json);
    assert_eq!(fs::read(dir.path().join("data.xml")).unwrap(), first_xml);
}

#[test]
fn test_file_source_reads_from_disk() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("hotels.csv");
    fs::write(&csv_path, HOTELS_CSV).unwrap();

    let (_schema, engine) = engine_for(dir.path(), false);
    let report = engine
        .run(&CsvSource::File(csv_path), &["json".to_string()])
        .unwrap();

    assert_eq!(report.total_records, 1);
    assert_eq!(report.outputs.len(), 1);
}

#[test]
fn test_report_summary_mentions_totals() {
    let dir = tempdir().unwrap();
    let (_schema, engine) = engine_for(dir.path(), false);

    let report = engine
        .run(
            &CsvSource::String(HOTELS_CSV.to_string()),
            &["json".to_string()],
        )
        .unwrap();

    assert!(report.summary().contains("1 records"));
    assert!(report.summary().contains("data.json"));
}

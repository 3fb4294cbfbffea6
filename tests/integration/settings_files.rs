// tests/integration/settings_files.rs
use std::io::Write;

use range_filter::{
    BoundMode, RangeFilter, RawFilterInput, Scalar,
    infra::{read_catalog, read_settings},
};

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

const CATALOG: &str = r#"{
    "table": "mm_courses",
    "attributes": [
        {"id": 7, "col_name": "age_min", "name": "Minimum age", "value_type": "numeric"},
        {"id": 8, "col_name": "age_max", "name": "Maximum age", "value_type": "numeric"}
    ],
    "rows": [
        {"id": 1, "values": {"age_min": "6", "age_max": "10"}},
        {"id": 2, "values": {"age_min": "11", "age_max": "14"}}
    ]
}"#;

#[test]
fn loaded_settings_drive_the_filter() {
    let catalog_file = write_temp(".json", CATALOG);
    let settings_file = write_temp(
        ".json",
        r#"[
            {"attr_id": 7, "attr_id2": 8, "urlparam": "age", "moreequal": "1", "lessequal": "1"},
            {"primary_attribute_id": 7, "secondary_attribute_id": 8, "bound_mode": "distinct"}
        ]"#,
    );

    let catalog = read_catalog(catalog_file.path()).expect("catalog loads");
    let settings = read_settings(settings_file.path()).expect("settings load");
    assert_eq!(settings.len(), 2);
    assert_eq!(settings[1].bound_mode, BoundMode::Distinct);

    let legacy = RangeFilter::new(settings[0].clone(), &catalog, &catalog);
    let rule = legacy.predicate(&RawFilterInput::new().with("age", "8"));
    let fragment = rule.as_query().expect("active predicate");
    assert_eq!(fragment.sql_template, "SELECT id FROM mm_courses WHERE (?<=age_max AND ?>=age_min)");
    assert_eq!(fragment.bind_values, vec![Scalar::text("8"); 2]);

    let distinct = RangeFilter::new(settings[1].clone(), &catalog, &catalog);
    let rule = distinct.predicate(&RawFilterInput::new().with("age_min", "7__9"));
    assert_eq!(rule.as_query().unwrap().bind_values, vec![Scalar::text("9"), Scalar::text("7")]);
}

#[test]
fn rejects_settings_without_primary_attribute() {
    let settings_file = write_temp(".json", r#"{"settings": [{"attr_id": 0, "attr_id2": 8}]}"#);
    let err = read_settings(settings_file.path()).unwrap_err();
    assert!(err.to_string().contains("primary attribute is not configured"), "{err}");
}

#[cfg(feature = "yaml")]
#[test]
fn reads_yaml_settings() {
    let settings_file = write_temp(".yaml", "- attr_id: 7\n  attr_id2: 8\n  lessequal: true\n");
    let settings = read_settings(settings_file.path()).expect("yaml settings load");
    assert!(settings[0].upper_inclusive);
}

use notifications_api::add_pagination;
use serde_json::Value;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture(name: &str) -> Value {
    let path = workspace_root()
        .join("notifications_api/tests/fixtures")
        .join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("fixture is valid JSON")
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

// ---------------------------------------------------------------------------
// Positive validation: fixtures conform to their schemas
// ---------------------------------------------------------------------------

#[test]
fn test_each_listed_notification_conforms_to_schema() {
    let fixture = load_fixture("notifications.json");
    let schema = load_schema("notification.schema.json");

    let validator = jsonschema::draft202012::new(&schema).expect("notification schema compiles");
    for notification in fixture["notifications"].as_array().unwrap() {
        if let Err(e) = validator.validate(notification) {
            panic!("notification failed validation: {e}");
        }
    }
}

#[test]
fn test_paginated_listing_conforms_to_schema() {
    let fixture = load_fixture("notifications.json");
    let schema = load_schema("notifications.schema.json");
    let paged = add_pagination(fixture).expect("fixture is paginated");

    let validator = jsonschema::draft202012::new(&schema).expect("listing schema compiles");
    if let Err(e) = validator.validate(&paged) {
        panic!("paginated listing failed validation: {e}");
    }
}

// ---------------------------------------------------------------------------
// Negative validation: schemas reject invalid data
// ---------------------------------------------------------------------------

#[test]
fn test_listing_schema_rejects_unpaginated_fixture() {
    let fixture = load_fixture("notifications.json");
    let schema = load_schema("notifications.schema.json");

    let validator = jsonschema::draft202012::new(&schema).expect("listing schema compiles");
    assert!(
        !validator.is_valid(&fixture),
        "listing without page_num/total_pages should be rejected"
    );
}

#[test]
fn test_notification_schema_rejects_unknown_template_type() {
    let fixture = load_fixture("notifications.json");
    let schema = load_schema("notification.schema.json");
    let mut notification = fixture["notifications"][0].clone();
    notification["template"]["template_type"] = Value::String("fax".to_string());

    let validator = jsonschema::draft202012::new(&schema).expect("notification schema compiles");
    assert!(!validator.is_valid(&notification));
}

#[test]
fn test_notification_schema_rejects_missing_status() {
    let fixture = load_fixture("notifications.json");
    let schema = load_schema("notification.schema.json");
    let mut notification = fixture["notifications"][0].clone();
    notification.as_object_mut().unwrap().remove("status");

    let validator = jsonschema::draft202012::new(&schema).expect("notification schema compiles");
    assert!(!validator.is_valid(&notification));
}

//! Registry discovery and schema-aware loading against on-disk course data.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use serde_json::json;
use syl_config::DataConfig;
use syl_core::{Intent, Resolution, Slots};
use syl_facts::{CourseFacts, CourseRegistry, FactResolver, SchemaDefaults};
use tempfile::TempDir;

fn write_json(dir: &Path, name: &str, value: &serde_json::Value) {
    fs::write(dir.join(name), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn data_config(dir: &Path) -> DataConfig {
    DataConfig {
        dir: dir.to_path_buf(),
        default_course: String::new(),
        courses: BTreeMap::new(),
    }
}

fn cpsc_330(dir: &Path) {
    write_json(
        dir,
        "cpsc_330_facts.json",
        &json!({
            "_schema": {"course_name": "CPSC 330"},
            "due_dates": [{
                "assessment": "hw1",
                "due_date": "Jan 12, 11:59 pm",
                "where_find": "GitHub",
                "where_submit": "Gradescope",
                "quote": "Jan 12, 11:59 pm",
                "source": "cpsc_330_rules.md"
            }],
            "links": [
                {"name": "Canvas", "url": "https://canvas.ubc.ca", "quote": "Canvas", "source": "x.md"},
                {"name": "Gradescope", "url": "https://www.gradescope.ca", "quote": "Gradescope", "source": "x.md"}
            ]
        }),
    );
}

#[test]
fn discovers_courses_by_declared_and_derived_names() {
    let dir = TempDir::new().unwrap();
    cpsc_330(dir.path());
    write_json(dir.path(), "mds_facts.json", &json!({}));
    fs::write(dir.path().join("notes.json"), "{}").unwrap();

    let registry = CourseRegistry::discover(&data_config(dir.path())).unwrap();
    assert_eq!(registry.list_courses(), vec!["CPSC 330", "MDS"]);

    let files = registry.resolve_course_file("cpsc 330").unwrap();
    assert_eq!(files.display_name, "CPSC 330");
    assert_eq!(files.rules_name(), "cpsc_330_rules.md");
}

#[test]
fn configured_registrations_extend_discovery() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "stat.json", &json!({}));

    let mut config = data_config(dir.path());
    config
        .courses
        .insert("STAT 201".to_string(), "stat.json".to_string());

    let registry = CourseRegistry::discover(&config).unwrap();
    let files = registry.resolve_course_file("STAT 201").unwrap();
    assert_eq!(files.rules_name(), "stat_rules.md");
}

#[test]
fn unknown_course_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    cpsc_330(dir.path());

    let mut config = data_config(dir.path());
    config.default_course = "CPSC 330".to_string();

    let registry = CourseRegistry::discover(&config).unwrap();
    let files = registry.resolve_or_default(Some("PHIL 101")).unwrap();
    assert_eq!(files.display_name, "CPSC 330");
}

#[test]
fn missing_data_dir_leaves_every_course_unavailable() {
    let dir = TempDir::new().unwrap();
    let registry = CourseRegistry::discover(&data_config(&dir.path().join("absent"))).unwrap();
    assert!(registry.list_courses().is_empty());
    assert!(registry
        .resolve_or_default(Some("CPSC 330"))
        .unwrap_err()
        .is_course_unavailable());
}

#[test]
fn registered_but_missing_file_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let mut registry = CourseRegistry::new(dir.path());
    registry.register("CPSC 330", "cpsc_330_facts.json");
    assert!(registry.resolve_course_file("CPSC 330").is_none());
}

#[test]
fn hw1_resolves_with_record_source() {
    let dir = TempDir::new().unwrap();
    cpsc_330(dir.path());
    let registry = CourseRegistry::discover(&data_config(dir.path())).unwrap();
    let files = registry.resolve_or_default(Some("CPSC 330")).unwrap();
    let facts = CourseFacts::load(&files, &SchemaDefaults::default()).unwrap();

    let slots = Slots {
        assessment: Some("hw1".to_string()),
        ..Slots::default()
    };
    let resolution = FactResolver::default().resolve(Intent::DueDate, &facts, &slots);
    let Resolution::Found(answer) = resolution else {
        panic!("expected Found, got {resolution:?}");
    };
    assert!(answer.text.contains("hw1 is due Jan 12, 11:59 pm"));
    assert!(answer
        .citations
        .iter()
        .any(|c| c.source == "cpsc_330_rules.md"));
}

#[test]
fn empty_store_reports_no_due_dates() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "mds_facts.json", &json!({"due_dates": []}));
    let registry = CourseRegistry::discover(&data_config(dir.path())).unwrap();
    let files = registry.resolve_or_default(Some("MDS")).unwrap();
    let facts = CourseFacts::load(&files, &SchemaDefaults::default()).unwrap();

    let resolution = FactResolver::default().resolve(Intent::DueDate, &facts, &Slots::default());
    assert!(matches!(resolution, Resolution::Empty(_)));
    let answer = resolution.into_answer();
    assert!(answer.text.contains("No due dates"));
    assert!(answer.citations.is_empty());
}

#[test]
fn canvas_link_type_returns_only_canvas() {
    let dir = TempDir::new().unwrap();
    cpsc_330(dir.path());
    let registry = CourseRegistry::discover(&data_config(dir.path())).unwrap();
    let files = registry.resolve_course_file("CPSC 330").unwrap();
    let facts = CourseFacts::load(&files, &SchemaDefaults::default()).unwrap();

    let slots = Slots {
        link_type: Some("canvas".to_string()),
        ..Slots::default()
    };
    let answer = FactResolver::default()
        .resolve(Intent::Links, &facts, &slots)
        .into_answer();
    assert_eq!(answer.text, "Canvas: https://canvas.ubc.ca");
    assert!(!answer.text.contains("Gradescope"));
}

#[test]
fn field_map_from_disk_is_applied() {
    let dir = TempDir::new().unwrap();
    write_json(
        dir.path(),
        "dsci_100_facts.json",
        &json!({
            "_schema": {
                "key_map": {"due_date": "assignments"},
                "field_map": {"due_date": {"assessment": "name", "due_date": "deadline"}}
            },
            "assignments": [{"name": "Quiz", "deadline": "Sep 9", "source": "dsci_100_rules.md"}]
        }),
    );
    let registry = CourseRegistry::discover(&data_config(dir.path())).unwrap();
    let files = registry.resolve_course_file("DSCI 100").unwrap();
    let facts = CourseFacts::load(&files, &SchemaDefaults::default()).unwrap();

    let records = facts.records(Intent::DueDate);
    assert_eq!(records[0].get("due_date"), "Sep 9");
    assert!(!records[0].contains("deadline"));

    let slots = Slots {
        assessment: Some("syllabus quiz".to_string()),
        ..Slots::default()
    };
    let answer = FactResolver::default()
        .resolve(Intent::DueDate, &facts, &slots)
        .into_answer();
    assert!(answer.text.starts_with("Quiz is due Sep 9."));
}

#[test]
fn unparseable_facts_file_is_malformed() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad_facts.json"), "{ not json").unwrap();
    let registry = CourseRegistry::discover(&data_config(dir.path())).unwrap();
    let files = registry.resolve_course_file("BAD").unwrap();
    let err = CourseFacts::load(&files, &SchemaDefaults::default()).unwrap_err();
    assert!(err.to_string().starts_with("malformed facts file bad_facts.json"));
}

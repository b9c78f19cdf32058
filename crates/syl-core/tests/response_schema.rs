//! JSON Schema validation for the types the question pipeline serializes.

use std::collections::BTreeMap;

use schemars::schema_for;
use syl_core::{Citation, Intent, QueryOutcome, QueryResponse};

fn validate(schema: &serde_json::Value, instance: &serde_json::Value) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

#[test]
fn answered_response_matches_schema() {
    let mut slots = BTreeMap::new();
    slots.insert("assessment".to_string(), "hw1".to_string());
    let response = QueryResponse::reply(
        Intent::DueDate,
        slots,
        QueryOutcome::Answered,
        "hw1 is due Jan 12, 11:59 pm.",
        vec![Citation::new("Jan 12, 11:59 pm", "Jan 12, 11:59 pm", "cpsc_330_rules.md")],
    );

    let schema = serde_json::to_value(schema_for!(QueryResponse)).unwrap();
    let instance = serde_json::to_value(&response).unwrap();
    let errors = validate(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");

    let recovered: QueryResponse = serde_json::from_value(instance).unwrap();
    assert_eq!(recovered, response);
}

#[test]
fn refusal_serializes_reason_and_snake_case_outcome() {
    let response = QueryResponse::refusal(Intent::OutOfScope, BTreeMap::new(), "Empty question.");
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["outcome"], "refused");
    assert_eq!(value["intent"], "out_of_scope");
    assert_eq!(value["refused"], true);
    assert_eq!(value["refusal_reason"], "Empty question.");

    let schema = serde_json::to_value(schema_for!(QueryResponse)).unwrap();
    assert!(validate(&schema, &value).is_empty());
}

//! Codec boundary suite: round trips for every supported base type, and
//! the degrade-to-null contract for malformed or inconsistent payloads.

use serde_json::json;

use rubric_core::{BaseType, Cardinality, Value, VariableDeclaration};
use rubric_interchange::{declaration_from_json, try_value_from_pci, value_from_pci, value_to_pci};

fn declaration(base_type: &str, cardinality: &str) -> VariableDeclaration {
    declaration_from_json(&json!({
        "identifier": "RESPONSE",
        "baseType": base_type,
        "cardinality": cardinality,
    }))
    .unwrap()
}

/// Decode a payload and re-encode it; for well-formed payloads of
/// supported base types the wire JSON must reproduce exactly.
fn assert_round_trip(base_type: &str, cardinality: &str, payload: serde_json::Value) {
    let decl = declaration(base_type, cardinality);
    let value = try_value_from_pci(&payload, &decl)
        .unwrap_or_else(|e| panic!("decode failed for {}: {}", base_type, e));
    assert_eq!(
        value_to_pci(&value),
        payload,
        "round trip failed for {} {}",
        cardinality,
        base_type,
    );
}

#[test]
fn single_round_trips_all_supported_base_types() {
    assert_round_trip("identifier", "single", json!({ "base": { "identifier": "choiceA" } }));
    assert_round_trip("string", "single", json!({ "base": { "string": "free text" } }));
    assert_round_trip("integer", "single", json!({ "base": { "integer": -17 } }));
    assert_round_trip("float", "single", json!({ "base": { "float": 3.25 } }));
    assert_round_trip("boolean", "single", json!({ "base": { "boolean": true } }));
    assert_round_trip("point", "single", json!({ "base": { "point": [10, 20] } }));
    assert_round_trip("pair", "single", json!({ "base": { "pair": ["A", "B"] } }));
    assert_round_trip(
        "directedPair",
        "single",
        json!({ "base": { "directedPair": ["A", "B"] } }),
    );
    assert_round_trip("duration", "single", json!({ "base": { "duration": 90.5 } }));
    assert_round_trip(
        "uri",
        "single",
        json!({ "base": { "uri": "https://example.org/item" } }),
    );
}

#[test]
fn list_round_trips_with_null_elements() {
    assert_round_trip(
        "identifier",
        "multiple",
        json!({ "list": { "identifier": ["a", null, "b"] } }),
    );
    assert_round_trip("integer", "ordered", json!({ "list": { "integer": [3, 1, 2] } }));
    assert_round_trip("float", "multiple", json!({ "list": { "float": [0.1, 0.2] } }));
}

#[test]
fn null_payload_round_trips_for_single() {
    assert_round_trip("identifier", "single", json!({ "base": null }));
}

#[test]
fn unsupported_base_types_decode_to_null() {
    let decl = declaration("intOrIdentifier", "single");
    assert_eq!(
        try_value_from_pci(&json!({ "base": { "intOrIdentifier": 5 } }), &decl).unwrap(),
        Value::Null
    );

    let decl = declaration("file", "multiple");
    assert_eq!(
        try_value_from_pci(&json!({ "list": { "file": ["x"] } }), &decl).unwrap(),
        Value::Null
    );
}

#[test]
fn cardinality_mismatch_degrades_to_null() {
    let single = declaration("identifier", "single");
    assert_eq!(
        value_from_pci(&json!({ "list": { "identifier": ["a"] } }), &single),
        Value::Null
    );

    let multiple = declaration("identifier", "multiple");
    assert_eq!(
        value_from_pci(&json!({ "base": { "identifier": "a" } }), &multiple),
        Value::Null
    );

    // Null encodes under "base" whatever the cardinality; decoding it
    // against a container declaration still lands on Null.
    assert_eq!(value_from_pci(&json!({ "base": null }), &multiple), Value::Null);
}

#[test]
fn malformed_payloads_degrade_to_null() {
    let decl = declaration("identifier", "single");
    for payload in [
        json!("bare string"),
        json!([1, 2, 3]),
        json!({ "bases": { "identifier": "a" } }),
        json!({ "base": { "float": "a" } }),
        json!({ "base": { "identifier": 42 } }),
    ] {
        assert_eq!(value_from_pci(&payload, &decl), Value::Null, "{}", payload);
    }
}

#[test]
fn list_decode_preserves_declared_cardinality() {
    let ordered = declaration("integer", "ordered");
    let value = try_value_from_pci(&json!({ "list": { "integer": [1, 2] } }), &ordered).unwrap();
    match value {
        Value::Container { cardinality, .. } => assert_eq!(cardinality, Cardinality::Ordered),
        other => panic!("expected container, got {:?}", other),
    }
}

// ── Records ─────────────────────────────────────────────────────────

fn record_declaration() -> VariableDeclaration {
    declaration_from_json(&json!({
        "identifier": "RESPONSE",
        "cardinality": "record",
        "fields": [
            { "identifier": "x", "baseType": "integer" },
            { "identifier": "label", "baseType": "string" },
        ],
    }))
    .unwrap()
}

#[test]
fn record_decodes_declared_fields() {
    let decl = record_declaration();
    let payload = json!({ "record": [
        { "name": "x", "base": { "integer": 5 } },
        { "name": "label", "base": { "string": "hi" } },
    ] });
    let value = try_value_from_pci(&payload, &decl).unwrap();
    let fields = value.record_fields().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].identifier, "x");
    assert_eq!(fields[0].base_type, BaseType::Integer);
    assert_eq!(value_to_pci(&value), payload);
}

#[test]
fn record_fields_without_input_entries_are_absent() {
    let decl = record_declaration();
    let payload = json!({ "record": [ { "name": "x", "base": { "integer": 5 } } ] });
    let value = try_value_from_pci(&payload, &decl).unwrap();
    let fields = value.record_fields().unwrap();
    assert_eq!(fields.len(), 1);
    assert!(value.field("label").is_none());
}

#[test]
fn record_entries_not_in_the_schema_are_ignored() {
    let decl = record_declaration();
    let payload = json!({ "record": [
        { "name": "stray", "base": { "integer": 1 } },
        { "name": "x", "base": { "integer": 5 } },
    ] });
    let value = try_value_from_pci(&payload, &decl).unwrap();
    assert_eq!(value.record_fields().unwrap().len(), 1);
}

#[test]
fn record_without_schema_degrades_to_empty_record() {
    let decl = declaration_from_json(&json!({
        "identifier": "RESPONSE",
        "cardinality": "record",
    }))
    .unwrap();
    let payload = json!({ "record": [ { "name": "x", "base": { "integer": 5 } } ] });
    let value = try_value_from_pci(&payload, &decl).unwrap();
    assert_eq!(value, Value::Record(Vec::new()));
}

#[test]
fn record_field_with_malformed_scalar_decodes_as_null_field() {
    let decl = record_declaration();
    let payload = json!({ "record": [ { "name": "x", "base": { "integer": "five" } } ] });
    let value = try_value_from_pci(&payload, &decl).unwrap();
    let field = value.field("x").unwrap();
    assert!(field.value.is_none());
}

#[test]
fn record_schema_falls_back_to_correct_response() {
    let decl = declaration_from_json(&json!({
        "identifier": "RESPONSE",
        "cardinality": "record",
        "fields": [ { "identifier": "x", "baseType": "integer" } ],
        "correctResponse": { "record": [ { "name": "x", "base": { "integer": 9 } } ] },
    }))
    .unwrap();

    // Strip the default so only the correct response carries the schema.
    let mut decl = decl;
    decl.default_value = Value::Null;

    let payload = json!({ "record": [ { "name": "x", "base": { "integer": 5 } } ] });
    let value = try_value_from_pci(&payload, &decl).unwrap();
    assert_eq!(value.record_fields().unwrap().len(), 1);
}

//! CLI integration tests for the implemented subcommands.
//!
//! Uses `assert_cmd` to spawn the `rubric` binary and verify exit codes,
//! stdout content, and stderr content. Declaration fixtures are written
//! into a TempDir per test.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn rubric() -> Command {
    cargo_bin_cmd!("rubric")
}

fn write_json(dir: &TempDir, name: &str, value: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ──────────────────────────────────────────────
// Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    rubric()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rubric assessment scoring toolchain"));
}

#[test]
fn version_exits_0() {
    rubric()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rubric"));
}

// ──────────────────────────────────────────────
// Classify
// ──────────────────────────────────────────────

#[test]
fn classify_expression_tag() {
    rubric()
        .args(["classify", "qti-sum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("expression"));
}

#[test]
fn classify_unknown_tag_json_output() {
    rubric()
        .args(["--output", "json", "classify", "qti-frobnicate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"grammar\":\"unknown\""));
}

// ──────────────────────────────────────────────
// Encode / decode
// ──────────────────────────────────────────────

#[test]
fn encode_emits_the_pci_payload() {
    let dir = TempDir::new().unwrap();
    let decl = write_json(
        &dir,
        "decl.json",
        &json!({
            "identifier": "RESPONSE",
            "baseType": "identifier",
            "cardinality": "single",
            "value": { "base": { "identifier": "choiceA" } },
        }),
    );

    rubric()
        .args(["--output", "json", "encode", path_arg(&decl)])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"base":{"identifier":"choiceA"}}"#));
}

#[test]
fn decode_degrades_malformed_payload_to_null() {
    let dir = TempDir::new().unwrap();
    let decl = write_json(
        &dir,
        "decl.json",
        &json!({
            "identifier": "RESPONSE",
            "baseType": "identifier",
            "cardinality": "single",
        }),
    );
    let payload = write_json(&dir, "payload.json", &json!([1, 2, 3]));

    rubric()
        .args([
            "--output",
            "json",
            "decode",
            path_arg(&payload),
            "--declaration",
            path_arg(&decl),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"base":null}"#))
        .stderr(predicate::str::contains("pci decode"));
}

#[test]
fn decode_bad_declaration_exits_1() {
    let dir = TempDir::new().unwrap();
    let decl = write_json(
        &dir,
        "decl.json",
        &json!({ "identifier": "X", "cardinality": "plural" }),
    );
    let payload = write_json(&dir, "payload.json", &json!({ "base": null }));

    rubric()
        .args([
            "decode",
            path_arg(&payload),
            "--declaration",
            path_arg(&decl),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown cardinality"));
}

// ──────────────────────────────────────────────
// Map / lookup
// ──────────────────────────────────────────────

#[test]
fn map_scores_a_container_response() {
    let dir = TempDir::new().unwrap();
    let decl = write_json(
        &dir,
        "decl.json",
        &json!({
            "identifier": "RESPONSE",
            "baseType": "identifier",
            "cardinality": "multiple",
            "value": { "list": { "identifier": ["a", "a", "B"] } },
            "mapping": {
                "defaultValue": "0",
                "entries": [ { "mapKey": "A", "mappedValue": "10" } ],
            },
        }),
    );

    rubric()
        .args(["map", path_arg(&decl)])
        .assert()
        .success()
        .stdout(predicate::str::contains("10"));
}

#[test]
fn map_without_mapping_exits_1() {
    let dir = TempDir::new().unwrap();
    let decl = write_json(
        &dir,
        "decl.json",
        &json!({
            "identifier": "RESPONSE",
            "baseType": "identifier",
            "cardinality": "single",
        }),
    );

    rubric()
        .args(["map", path_arg(&decl)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no response mapping"));
}

#[test]
fn lookup_interpolation_table() {
    let dir = TempDir::new().unwrap();
    let decl = write_json(
        &dir,
        "decl.json",
        &json!({
            "identifier": "SCORE",
            "baseType": "float",
            "cardinality": "single",
            "lookupTable": {
                "tableType": "interpolation",
                "entries": [
                    { "sourceValue": "10", "targetValue": { "base": { "identifier": "high" } } },
                    { "sourceValue": "0", "targetValue": { "base": { "identifier": "low" } },
                      "includeBoundary": true },
                ],
            },
        }),
    );

    rubric()
        .args([
            "--output",
            "json",
            "lookup",
            path_arg(&decl),
            "--value",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"base":{"identifier":"high"}}"#));
}

#[test]
fn lookup_null_value_yields_table_default() {
    let dir = TempDir::new().unwrap();
    let decl = write_json(
        &dir,
        "decl.json",
        &json!({
            "identifier": "SCORE",
            "baseType": "float",
            "cardinality": "single",
            "lookupTable": {
                "tableType": "match",
                "defaultValue": { "base": { "identifier": "fallback" } },
                "entries": [],
            },
        }),
    );

    rubric()
        .args(["--output", "json", "lookup", path_arg(&decl)])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"base":{"identifier":"fallback"}}"#));
}

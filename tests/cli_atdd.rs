#![allow(deprecated)]

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn convert_in(dir: &Path, input_text: &str) -> Value {
    fs::write(dir.join("tidy.txt"), input_text).expect("input should write");

    let mut cmd = Command::cargo_bin("tidy-sarif").expect("binary should compile");
    cmd.current_dir(dir)
        .arg("tidy.txt")
        .arg("out.sarif")
        .assert()
        .code(0)
        .stdout("");

    let written = fs::read_to_string(dir.join("out.sarif")).expect("output should exist");
    serde_json::from_str(&written).expect("output should be valid json")
}

fn results(doc: &Value) -> &Vec<Value> {
    doc["runs"][0]["results"]
        .as_array()
        .expect("results should be an array")
}

fn rule_ids(doc: &Value) -> Vec<&str> {
    doc["runs"][0]["tool"]["driver"]["rules"]
        .as_array()
        .expect("rules should be an array")
        .iter()
        .map(|rule| rule["id"].as_str().expect("rule id should be a string"))
        .collect()
}

#[test]
fn converts_mixed_clang_tidy_output() {
    let dir = TempDir::new().expect("temp dir should be created");
    let doc = convert_in(
        dir.path(),
        "src/foo.cpp:10:5: warning: unused variable 'x' [clang-diagnostic-unused-variable]\n\
         src/foo.cpp:22:1: error: missing return [clang-diagnostic-return-type]\n\
         not a diagnostic line\n\
         src/foo.cpp:10:5: warning: unused variable 'x' [clang-diagnostic-unused-variable]\n",
    );

    assert_eq!(
        rule_ids(&doc),
        [
            "clang-diagnostic-unused-variable",
            "clang-diagnostic-return-type"
        ]
    );

    let results = results(&doc);
    assert_eq!(results.len(), 3);
    let levels = results
        .iter()
        .map(|result| result["level"].as_str().expect("level should be a string"))
        .collect::<Vec<_>>();
    assert_eq!(levels, ["warning", "error", "warning"]);
    assert_eq!(results[0]["ruleId"], results[2]["ruleId"]);
    for result in [&results[0], &results[2]] {
        let region = &result["locations"][0]["physicalLocation"]["region"];
        assert_eq!(region["startLine"], 10);
        assert_eq!(region["startColumn"], 5);
    }
}

#[test]
fn artifact_uri_is_resolved_against_working_directory() {
    let dir = TempDir::new().expect("temp dir should be created");
    let doc = convert_in(dir.path(), "src/foo.cpp:1:1: warning: w [r]\n");

    let uri = results(&doc)[0]["locations"][0]["physicalLocation"]["artifactLocation"]["uri"]
        .as_str()
        .expect("uri should be a string")
        .to_string();
    assert!(Path::new(&uri).is_absolute(), "uri should be absolute: {uri}");
    assert!(uri.ends_with("foo.cpp"));
    assert!(uri.contains("src"));
}

#[test]
fn repeated_rule_is_described_once() {
    let dir = TempDir::new().expect("temp dir should be created");
    let lines = (1..=5)
        .map(|n| format!("a.cpp:{n}:1: warning: w{n} [readability-magic-numbers]\n"))
        .collect::<String>();
    let doc = convert_in(dir.path(), &lines);

    assert_eq!(rule_ids(&doc), ["readability-magic-numbers"]);
    let results = results(&doc);
    assert_eq!(results.len(), 5);
    assert!(results
        .iter()
        .all(|result| result["ruleId"] == "readability-magic-numbers"));
}

#[test]
fn note_severity_is_reported_as_warning() {
    let dir = TempDir::new().expect("temp dir should be created");
    let doc = convert_in(
        dir.path(),
        "a.cpp:1:1: note: n [r1]\na.cpp:2:1: error: e [r2]\na.cpp:3:1: warning: w [r3]\n",
    );

    let levels = results(&doc)
        .iter()
        .map(|result| result["level"].as_str().expect("level should be a string"))
        .collect::<Vec<_>>();
    assert_eq!(levels, ["warning", "error", "warning"]);
}

#[test]
fn input_without_diagnostics_yields_empty_run() {
    let dir = TempDir::new().expect("temp dir should be created");
    let doc = convert_in(dir.path(), "clang-tidy banner\n\n12 warnings generated.\n");

    assert!(rule_ids(&doc).is_empty());
    assert!(results(&doc).is_empty());
    assert_eq!(doc["runs"][0]["columnKind"], "utf16CodeUnits");
}

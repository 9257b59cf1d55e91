mod common;

use assert_cmd::Command;
use jsonschema::validator_for;

fn read_schema(name: &str) -> serde_json::Value {
  let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  let path = manifest_dir.join("tests").join("schemas").join(name);
  let data = std::fs::read(&path).expect("schema file");
  serde_json::from_slice(&data).expect("valid schema JSON")
}

fn compile_schema(name: &str) -> jsonschema::Validator {
  let schema = read_schema(name);
  validator_for(&schema).expect("compile schema")
}

#[test]
fn report_json_conforms_to_schema() {
  let td = tempfile::TempDir::new().unwrap();
  let snapshot = common::write_snapshot(&td, &common::fixture_snapshot());

  let out = Command::cargo_bin("pr-review-report")
    .unwrap()
    .args([
      "--emit",
      "json",
      "--input",
      snapshot.to_str().unwrap(),
      "--now-override",
      common::NOW,
      "--tz",
      "utc",
    ])
    .output()
    .unwrap();

  assert!(out.status.success());
  let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();

  let compiled = compile_schema("pr-review-report.report.schema.json");
  compiled.validate(&v).expect("schema validation failed for report JSON");
}

#[test]
fn empty_snapshot_report_conforms_to_schema() {
  let out = Command::cargo_bin("pr-review-report")
    .unwrap()
    .args(["--emit", "json", "--now-override", common::NOW, "--tz", "utc"])
    .write_stdin("[]")
    .output()
    .unwrap();

  assert!(out.status.success());
  let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  assert_eq!(v["total_prs"], 0);

  let compiled = compile_schema("pr-review-report.report.schema.json");
  compiled.validate(&v).expect("schema validation failed for empty report");
}

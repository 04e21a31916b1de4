//! End-to-end tests for the `colldir` binary.

#![allow(clippy::expect_used)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::tempdir;

/// Get a Command for the colldir binary
fn colldir_cmd() -> Command {
    let mut cmd = Command::cargo_bin("colldir").expect("Failed to find colldir binary");
    cmd.env_remove("RUST_LOG")
        .env_remove("COLLDIR_OUTPUT_DIR")
        .env_remove("COLLDIR_SUBSTITUTE_SLASHES")
        .env_remove("COLLDIR_FORCE_OVERWRITE");
    cmd
}

fn postman_collection() -> Value {
    json!({
        "info": {
            "name": "Shop",
            "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
        },
        "item": [
            {
                "name": "Orders",
                "description": "Order endpoints",
                "item": [
                    {
                        "name": "Create order",
                        "request": { "method": "POST", "url": "{{host}}/orders" },
                        "response": [],
                        "event": [
                            {
                                "listen": "prerequest",
                                "script": { "type": "text/javascript", "exec": ["pm.variables.set('n', 1);"] }
                            },
                            {
                                "listen": "test",
                                "script": { "type": "text/javascript", "exec": ["pm.test('created');", ""] }
                            }
                        ]
                    }
                ]
            },
            { "name": "Status", "request": { "method": "GET", "url": "{{host}}/status" } }
        ],
        "variable": [{ "key": "host", "value": "http://localhost:8080" }]
    })
}

fn write_collection(dir: &Path, value: &Value) -> std::path::PathBuf {
    let path = dir.join("shop.postman_collection.json");
    fs::write(&path, serde_json::to_string_pretty(value).expect("serializable")).expect("write");
    path
}

#[test]
fn test_help_lists_commands() {
    colldir_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("import"));
}

#[test]
fn test_export_then_import_to_stdout() {
    let temp = tempdir().expect("temp dir");
    let file = write_collection(temp.path(), &postman_collection());
    let out = temp.path().join("out");
    fs::create_dir(&out).expect("mkdir");

    colldir_cmd()
        .arg("export")
        .arg(&file)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 folders and 2 requests"));

    let root = out.join("Shop");
    assert!(root.join("Orders/Create order/request.json").is_file());
    assert_eq!(
        fs::read_to_string(root.join("Orders/Create order/event.test.js")).expect("script"),
        "pm.test('created');\n"
    );

    let output = colldir_cmd()
        .arg("import")
        .arg(&root)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let imported: Value = serde_json::from_slice(&output).expect("stdout is JSON");

    assert_eq!(imported, postman_collection());
}

#[test]
fn test_import_to_file() {
    let temp = tempdir().expect("temp dir");
    let file = write_collection(temp.path(), &postman_collection());

    colldir_cmd()
        .current_dir(temp.path())
        .arg("export")
        .arg(&file)
        .assert()
        .success();

    let target = temp.path().join("roundtrip.json");
    colldir_cmd()
        .args(["import", "Shop", "--output-file"])
        .arg(&target)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 folders and 2 requests"));

    let written: Value =
        serde_json::from_str(&fs::read_to_string(&target).expect("output file")).expect("JSON");
    assert_eq!(written, postman_collection());
}

#[test]
fn test_existing_export_needs_force() {
    let temp = tempdir().expect("temp dir");
    let file = write_collection(temp.path(), &postman_collection());
    let run = || {
        let mut cmd = colldir_cmd();
        cmd.arg("export").arg(&file).arg("-o").arg(temp.path());
        cmd
    };

    run().assert().success();
    run()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: destination already exists"));
    run().arg("--force-overwrite").assert().success();
    run()
        .env("COLLDIR_FORCE_OVERWRITE", "true")
        .assert()
        .success();
}

#[test]
fn test_slash_in_name_needs_substitution() {
    let temp = tempdir().expect("temp dir");
    let mut collection = postman_collection();
    collection["item"][1]["name"] = json!("GET /status");
    let file = write_collection(temp.path(), &collection);

    colldir_cmd()
        .arg("export")
        .arg(&file)
        .arg("-o")
        .arg(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unsupported name"));
    assert!(!temp.path().join("Shop").exists());

    colldir_cmd()
        .arg("export")
        .arg(&file)
        .arg("-o")
        .arg(temp.path())
        .env("COLLDIR_SUBSTITUTE_SLASHES", "true")
        .assert()
        .success();
    assert!(temp.path().join("Shop/GET _slash_status/request.json").is_file());
}

#[test]
fn test_import_rejects_plain_directory() {
    let temp = tempdir().expect("temp dir");

    colldir_cmd()
        .arg("import")
        .arg(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing metadata file"));
}

#[test]
fn test_export_rejects_non_collection_file() {
    let temp = tempdir().expect("temp dir");
    let file = write_collection(temp.path(), &json!({ "name": "Dev", "values": [] }));

    colldir_cmd()
        .arg("export")
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid Postman collection"));
}

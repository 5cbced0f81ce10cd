//! Integration tests for the codenamer CLI
//!
//! These tests drive the compiled binary end to end over Vue fixtures written
//! to temporary directories. C# analysis is exercised through a missing
//! parser executable so no .NET toolchain is required.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// Test helper to get the CLI binary
fn codenamer_cmd() -> Command {
    Command::cargo_bin("codenamer").unwrap()
}

const CLEAN_COMPONENT: &str = "<template><div/></template>
<script>
export default {
  methods: {
    saveCart() {
    }
  }
}
</script>
";

const BAD_COMPONENT: &str = "<template><div/></template>
<script>
export default {
  methods: {
    Save_Cart() {
    }
  }
}
</script>
";

/// Only produces VM002, which is informational
const TERSE_COMPONENT: &str = "<script>
export default {
  methods: {
    go() {
    }
  }
}
</script>
";

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help() {
    codenamer_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Check identifier names"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("list-rules"));
}

#[test]
fn test_cli_version() {
    codenamer_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_analyze_requires_input() {
    codenamer_cmd().arg("analyze").assert().failure();
}

#[test]
fn test_analyze_clean_file_succeeds() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "Cart.vue", CLEAN_COMPONENT);

    codenamer_cmd()
        .args(["analyze", "--file", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total issues: 0"))
        .stdout(predicate::str::contains("No naming issues"));
}

#[test]
fn test_analyze_reports_issues_and_fails() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "Cart.vue", BAD_COMPONENT);

    codenamer_cmd()
        .args(["analyze", "-f", &file])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("VM001"))
        .stdout(predicate::str::contains("saveCart"));
}

#[test]
fn test_analyze_json_output() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "Cart.vue", BAD_COMPONENT);

    let output = codenamer_cmd()
        .args(["analyze", "--file", &file, "--output", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["total_files"], 1);
    assert_eq!(report["summary"]["files_with_issues"], 1);
    let results = report["files"][0]["results"].as_array().unwrap();
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r["rule_id"] == "VM001" && r["line"] == 5));
}

#[test]
fn test_severity_filter_changes_exit_code() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "Terse.vue", TERSE_COMPONENT);

    codenamer_cmd()
        .args(["analyze", "--file", &file])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("VM002"));

    codenamer_cmd()
        .args(["analyze", "--file", &file, "--severity", "warning"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total issues: 0"));
}

#[test]
fn test_invalid_files_are_skipped() {
    let dir = tempdir().unwrap();
    let good = write(dir.path(), "Cart.vue", CLEAN_COMPONENT);
    let txt = write(dir.path(), "notes.txt", "hello");

    codenamer_cmd()
        .args(["analyze", "-f", &txt, "-f", "/no/such/File.vue", "-f", &good])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping invalid file"))
        .stdout(predicate::str::contains("Total files: 1"));
}

#[test]
fn test_no_valid_files_is_an_error() {
    let dir = tempdir().unwrap();
    let txt = write(dir.path(), "notes.txt", "hello");

    codenamer_cmd()
        .args(["analyze", "-f", &txt])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No .cs or .vue files"));
}

#[test]
fn test_analyze_directory_with_exclusions() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("components");
    fs::create_dir_all(&nested).unwrap();
    write(&nested, "Cart.vue", CLEAN_COMPONENT);
    write(&nested, "Legacy.generated.vue", BAD_COMPONENT);

    codenamer_cmd()
        .args(["analyze", "--directory"])
        .arg(dir.path())
        .args(["--exclude-pattern", "*.generated.vue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files: 1"));

    codenamer_cmd()
        .args(["analyze", "--directory"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Total files: 2"));
}

#[test]
fn test_missing_directory_fails() {
    codenamer_cmd()
        .args(["analyze", "--directory", "/no/such/dir"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot analyze directory"));
}

#[test]
fn test_csharp_without_parser_reports_file_error() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "Order.cs", "class order {}");

    codenamer_cmd()
        .args(["analyze", "-f", &file, "--parser", "/no/such/CSharpParserHelper"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C# parser executable not found"));
}

#[test]
fn test_mine_prints_facts() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "Cart.vue", CLEAN_COMPONENT);

    let output = codenamer_cmd().args(["mine", &file]).output().unwrap();
    assert!(output.status.success());

    let mined: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(mined["names"][0]["Name"], "saveCart");
    assert_eq!(mined["names"][0]["Type"], "method");
    assert_eq!(mined["names"][0]["Line"], 5);
    assert!(mined["errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_mine_reports_missing_script() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "Empty.vue", "<template><div/></template>");

    codenamer_cmd()
        .args(["mine", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("No <script> section found"));
}

#[test]
fn test_list_rules() {
    codenamer_cmd()
        .arg("list-rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("C001"))
        .stdout(predicate::str::contains("VM005"));

    codenamer_cmd()
        .args(["list-rules", "--dialect", "csharp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I001"))
        .stdout(predicate::str::contains("VM001").not());
}

#[test]
fn test_print_default_config() {
    codenamer_cmd()
        .arg("print-default-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("min_severity: info"))
        .stdout(predicate::str::contains("skip_underscore_names: true"));
}

#[test]
fn test_init_then_validate_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("codenamer.yml");

    codenamer_cmd()
        .args(["init-config", "--output"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved to"));
    assert!(config.exists());

    codenamer_cmd()
        .args(["init-config", "--output"])
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    codenamer_cmd()
        .args(["init-config", "--force", "--output"])
        .arg(&config)
        .assert()
        .success();

    codenamer_cmd()
        .arg("validate-config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is valid"));
}

#[test]
fn test_validate_rejects_bad_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("bad.yml");
    fs::write(&config, "analysis:\n  max_concurrent_files: 0\n").unwrap();

    codenamer_cmd()
        .arg("validate-config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration validation failed"));
}

#[test]
fn test_analyze_uses_config_min_severity() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "Terse.vue", TERSE_COMPONENT);
    let config = dir.path().join("codenamer.yml");
    fs::write(&config, "analysis:\n  min_severity: warning\n").unwrap();

    codenamer_cmd()
        .args(["analyze", "-f", &file, "--config"])
        .arg(&config)
        .assert()
        .success();
}

#[cfg(unix)]
#[test]
fn test_mine_csharp_through_parser_helper() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let helper = dir.path().join("fake-parser.sh");
    fs::write(
        &helper,
        "#!/bin/sh\necho '{\"names\":[{\"Type\":\"Class\",\"Name\":\"OrderService\",\"Line\":1}],\"errors\":[]}'\n",
    )
    .unwrap();
    fs::set_permissions(&helper, fs::Permissions::from_mode(0o755)).unwrap();
    let file = write(dir.path(), "Order.cs", "class OrderService {}");

    let output = codenamer_cmd()
        .args(["mine", &file, "--parser"])
        .arg(&helper)
        .output()
        .unwrap();
    assert!(output.status.success());

    let sheet: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(sheet["names"][0]["Name"], "OrderService");
    assert_eq!(sheet["names"][0]["Type"], "Class");
    assert!(sheet["errors"].as_array().unwrap().is_empty());
}

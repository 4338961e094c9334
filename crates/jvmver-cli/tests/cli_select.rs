use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn jvmver_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jvmver").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("JVMVER_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_sort_ascending() {
    let home = TempDir::new().unwrap();
    jvmver_cmd(&home)
        .args(["sort", "1.0", "1.0-SNAPSHOT", "1.0-alpha", "0.9", "1.0-sp"])
        .assert()
        .success()
        .stdout("0.9\n1.0-alpha\n1.0-SNAPSHOT\n1.0\n1.0-sp\n");
}

#[test]
fn test_sort_descending() {
    let home = TempDir::new().unwrap();
    jvmver_cmd(&home)
        .args(["sort", "--descending", "1.2", "1.10", "1.9"])
        .assert()
        .success()
        .stdout("1.10\n1.9\n1.2\n");
}

#[test]
fn test_sort_json() {
    let home = TempDir::new().unwrap();
    let output = jvmver_cmd(&home)
        .args(["sort", "--json", "2", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, vec!["1", "2"]);
}

#[test]
fn test_max() {
    let home = TempDir::new().unwrap();
    jvmver_cmd(&home)
        .args(["max", "2.0-rc1", "1.9", "2.0-SNAPSHOT", "1.max"])
        .assert()
        .success()
        .stdout("2.0-SNAPSHOT\n");
}

#[test]
fn test_max_without_versions_fails() {
    let home = TempDir::new().unwrap();
    jvmver_cmd(&home)
        .args(["max"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid usage"));
}

#[test]
fn test_conflict_reports_disagreement() {
    let home = TempDir::new().unwrap();
    jvmver_cmd(&home)
        .args(["conflict", "org.example:lib", "1.2", "2.0", "1.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("org.example:lib 2.0"))
        .stdout(predicate::str::contains("Version conflicts (1):"))
        .stdout(predicate::str::contains(
            "org.example:lib: requested 1.2, 2.0 -> selected 2.0",
        ))
        .stderr(predicate::str::contains("Conflict"));
}

#[test]
fn test_conflict_agreeing_requests() {
    let home = TempDir::new().unwrap();
    jvmver_cmd(&home)
        .args(["conflict", "org.example:lib", "1.0", "1.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No version conflicts."));
}

#[test]
fn test_conflict_json() {
    let home = TempDir::new().unwrap();
    let output = jvmver_cmd(&home)
        .args(["--json", "conflict", "org.example:lib", "1.0", "1.1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["selected"], "1.1");
    assert_eq!(json["conflict"]["requested"][0], "1.0");
}

#[test]
fn test_conflict_without_versions_fails() {
    let home = TempDir::new().unwrap();
    jvmver_cmd(&home)
        .args(["conflict", "org.example:lib"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no versions requested"));
}

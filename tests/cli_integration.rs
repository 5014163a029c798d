use assert_cmd::Command;
use predicates::prelude::*;

fn waymark(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("waymark").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}

fn write_audit_log(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("data.json");
    std::fs::write(
        &path,
        r#"[
            {"name": "Ann Lee", "contact": "a@x.com", "action": "login"},
            {"name": "Bob Osei", "contact": "bob@example.com", "action": "exported survey results"},
            {"name": "Carla Diaz", "contact": "carla@example.com", "action": "deleted a response"}
        ]"#,
    )
    .unwrap();
    path
}

#[test]
fn test_title_uses_builtin_routes() {
    let temp_dir = tempfile::tempdir().unwrap();

    waymark(temp_dir.path())
        .arg("title")
        .arg("/")
        .arg("/surveyform")
        .arg("/admin/logs")
        .assert()
        .success()
        .stdout(predicates::str::contains("Survey Form").count(2))
        .stdout(predicates::str::contains("Audit Logs"));
}

#[test]
fn test_title_derives_for_unmatched_paths() {
    let temp_dir = tempfile::tempdir().unwrap();

    waymark(temp_dir.path())
        .arg("title")
        .arg("/admin/unknown-page")
        .assert()
        .success()
        .stdout(predicates::str::contains("Unknown page"));
}

#[test]
fn test_title_page_flag_adds_prefix() {
    let temp_dir = tempfile::tempdir().unwrap();

    waymark(temp_dir.path())
        .arg("title")
        .arg("--page")
        .arg("/admin/logs")
        .assert()
        .success()
        .stdout(predicates::str::contains("Survey Admin - Audit Logs"));
}

#[test]
fn test_filter_matches_case_insensitively() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = write_audit_log(temp_dir.path());

    waymark(temp_dir.path())
        .arg("filter")
        .arg("ANN")
        .arg("--file")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicates::str::contains("Ann Lee"))
        .stdout(predicates::str::contains("1 of 3 records."))
        .stdout(predicates::str::contains("Bob Osei").not());
}

#[test]
fn test_filter_reports_searched_count_on_no_match() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = write_audit_log(temp_dir.path());

    waymark(temp_dir.path())
        .arg("filter")
        .arg("zzz-no-match")
        .arg("--file")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "No matches for \"zzz-no-match\" (3 records searched).",
        ));
}

#[test]
fn test_filter_field_override() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = write_audit_log(temp_dir.path());

    // a@x.com only appears in the contact field, which the override drops.
    waymark(temp_dir.path())
        .arg("filter")
        .arg("a@x.com")
        .arg("--fields")
        .arg("name,action")
        .arg("--file")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicates::str::contains("No matches"));
}

#[test]
fn test_filter_missing_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    waymark(temp_dir.path())
        .arg("filter")
        .arg("ann")
        .arg("--file")
        .arg(temp_dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicates::str::contains("Error"));
}

#[test]
fn test_routes_lists_builtin_table() {
    let temp_dir = tempfile::tempdir().unwrap();

    waymark(temp_dir.path())
        .arg("routes")
        .assert()
        .success()
        .stdout(predicates::str::contains("Survey Form"))
        .stdout(predicates::str::contains("/admin/logs*"));
}

#[test]
fn test_doctor_reports_healthy_builtin_table() {
    let temp_dir = tempfile::tempdir().unwrap();

    waymark(temp_dir.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicates::str::contains("healthy"));
}

#[test]
fn test_init_then_config_roundtrip() {
    let temp_dir = tempfile::tempdir().unwrap();

    waymark(temp_dir.path()).arg("init").assert().success();
    assert!(temp_dir.path().join(".waymark/config.json").exists());

    waymark(temp_dir.path())
        .arg("config")
        .arg("title-prefix")
        .assert()
        .success()
        .stdout(predicates::str::contains("Survey Admin"));

    waymark(temp_dir.path())
        .arg("config")
        .arg("title-prefix")
        .arg("Ops Console")
        .assert()
        .success()
        .stdout(predicates::str::contains("title-prefix set to Ops Console"));

    // The new prefix flows into page titles.
    waymark(temp_dir.path())
        .arg("title")
        .arg("--page")
        .arg("/admin/logs")
        .assert()
        .success()
        .stdout(predicates::str::contains("Ops Console - Audit Logs"));
}

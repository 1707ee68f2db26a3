//! Integration tests for the mutsite CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_html_results(root: &Path) {
    fs::create_dir_all(root.join("a")).unwrap();
    fs::write(root.join("index.html"), "<html>index</html>").unwrap();
    fs::write(root.join("a").join("b.html"), "<html>nested</html>").unwrap();
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("mutsite").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mutation"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("mutsite").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mutsite"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("mutsite").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Generate against a valid results tree writes the report
#[test]
fn test_generate_writes_the_report_tree() {
    let temp_dir = TempDir::new().unwrap();
    let results = temp_dir.path().join("mutation-reports");
    let site = temp_dir.path().join("site");
    write_html_results(&results);

    let mut cmd = Command::cargo_bin("mutsite").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("generate")
        .arg("--results-dir")
        .arg(&results)
        .arg("--site-root")
        .arg(&site)
        .assert()
        .success()
        .stdout(predicate::str::contains("HTML"));

    let report = site.join("mutation-report");
    assert_eq!(
        fs::read(report.join("index.html")).unwrap(),
        fs::read(results.join("index.html")).unwrap()
    );
    assert_eq!(
        fs::read(report.join("a").join("b.html")).unwrap(),
        fs::read(results.join("a").join("b.html")).unwrap()
    );
}

/// XML listed first without data still selects HTML
#[test]
fn test_generate_first_format_with_data_wins() {
    let temp_dir = TempDir::new().unwrap();
    let results = temp_dir.path().join("mutation-reports");
    let site = temp_dir.path().join("site");
    write_html_results(&results);

    let mut cmd = Command::cargo_bin("mutsite").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("generate")
        .arg("--results-dir")
        .arg(&results)
        .arg("--site-root")
        .arg(&site)
        .arg("--format")
        .arg("XML")
        .arg("--format")
        .arg("HTML")
        .assert()
        .success()
        .stdout(predicate::str::contains("HTML"));

    assert!(site.join("mutation-report").join("index.html").is_file());
}

/// A stale destination file is fully overwritten
#[test]
fn test_generate_overwrites_stale_report() {
    let temp_dir = TempDir::new().unwrap();
    let results = temp_dir.path().join("mutation-reports");
    let site = temp_dir.path().join("site");
    write_html_results(&results);

    let report = site.join("mutation-report");
    fs::create_dir_all(&report).unwrap();
    fs::write(report.join("index.html"), "stale content, much longer").unwrap();

    let mut cmd = Command::cargo_bin("mutsite").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("generate")
        .arg("--results-dir")
        .arg(&results)
        .arg("--site-root")
        .arg(&site)
        .assert()
        .success();

    assert_eq!(
        fs::read(report.join("index.html")).unwrap(),
        b"<html>index</html>"
    );
}

/// Skip exits cleanly and writes nothing
#[test]
fn test_generate_skip_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let results = temp_dir.path().join("mutation-reports");
    let site = temp_dir.path().join("site");
    write_html_results(&results);

    let mut cmd = Command::cargo_bin("mutsite").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("generate")
        .arg("--results-dir")
        .arg(&results)
        .arg("--site-root")
        .arg(&site)
        .arg("--skip")
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"));

    assert!(!site.exists());
}

/// A missing results directory is a fatal error naming the path
#[test]
fn test_generate_missing_results_directory_fails() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("mutsite").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("generate")
        .arg("--results-dir")
        .arg(temp_dir.path().join("nowhere"))
        .arg("--site-root")
        .arg(temp_dir.path().join("site"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find results directory"))
        .stderr(predicate::str::contains("nowhere"));
}

/// A results path that is a file is rejected with the type error
#[test]
fn test_generate_rejects_file_as_results_directory() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("results");
    fs::write(&file, "not a directory").unwrap();

    let mut cmd = Command::cargo_bin("mutsite").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("generate")
        .arg("--results-dir")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("it must be a directory"));
}

/// Check selects a format without writing anything
#[test]
fn test_check_is_a_dry_run() {
    let temp_dir = TempDir::new().unwrap();
    let results = temp_dir.path().join("mutation-reports");
    write_html_results(&results);

    let mut cmd = Command::cargo_bin("mutsite").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("check")
        .arg("--results-dir")
        .arg(&results)
        .assert()
        .success()
        .stdout(predicate::str::contains("HTML"));

    // Nothing was generated
    assert!(!temp_dir.path().join("target").exists());
}

/// Check fails when no accepted format has data
#[test]
fn test_check_without_data_fails() {
    let temp_dir = TempDir::new().unwrap();
    let results = temp_dir.path().join("mutation-reports");
    fs::create_dir_all(&results).unwrap();

    let mut cmd = Command::cargo_bin("mutsite").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("check")
        .arg("--results-dir")
        .arg(&results)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no accepted source format"));
}

/// Coverage summarises attribution records per class
#[test]
fn test_coverage_summary() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("attributions.json");
    fs::write(
        &file,
        r#"[
          {"name":"WidgetTest.rotates","execution_time_millis":25,
           "defining_classes":["WidgetTest"],"testees":["Widget","Gear"]},
          {"name":"GearTest.meshes","execution_time_millis":10,
           "defining_classes":["GearTest"],"testees":["Gear"]}
        ]"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("mutsite").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("coverage")
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Widget"))
        .stdout(predicate::str::contains("Gear"));
}

/// Coverage --class lists the hitting tests
#[test]
fn test_coverage_single_class() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("attributions.json");
    fs::write(
        &file,
        r#"[
          {"name":"WidgetTest.rotates","execution_time_millis":25,
           "defining_classes":["WidgetTest"],"testees":["Widget","Gear"]},
          {"name":"GearTest.meshes","execution_time_millis":10,
           "defining_classes":["GearTest"],"testees":["Gear"]}
        ]"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("mutsite").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("coverage")
        .arg("--file")
        .arg(&file)
        .arg("--class")
        .arg("Gear")
        .assert()
        .success()
        .stdout(predicate::str::contains("WidgetTest.rotates"))
        .stdout(predicate::str::contains("GearTest.meshes"))
        .stdout(predicate::str::contains("35 ms"));
}

/// Unknown encodings are surfaced, not swallowed
#[test]
fn test_unknown_encoding_is_surfaced() {
    let temp_dir = TempDir::new().unwrap();
    let results = temp_dir.path().join("mutation-reports");
    write_html_results(&results);

    let config = temp_dir.path().join("mutsite.toml");
    fs::write(&config, "[report]\nsource_encoding = \"martian\"\n").unwrap();

    let mut cmd = Command::cargo_bin("mutsite").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .arg("generate")
        .arg("--results-dir")
        .arg(&results)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown character encoding"))
        .stderr(predicate::str::contains("martian"));
}

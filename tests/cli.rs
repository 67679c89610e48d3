use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const POST: &str = "title: test\nauthor: MacRat\n\n-- first section\n\tthis is test of [[funyu]].\n";

fn write_post(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("post.funyu");
    fs::write(&path, content).expect("failed to write post");
    path
}

#[test]
fn renders_html_by_default() {
    let dir = TempDir::new().unwrap();
    let path = write_post(&dir, POST);

    cargo_bin_cmd!("funyu")
        .arg(&path)
        .assert()
        .success()
        .stdout(
            "<section>\n<h1>first section</h1>\n<p>\nthis is test of <strong>funyu</strong>.<br>\n</p>\n</section>\n",
        );
}

#[test]
fn reads_stdin() {
    cargo_bin_cmd!("funyu")
        .write_stdin("hello [[world]]\n")
        .assert()
        .success()
        .stdout("<p>\nhello <strong>world</strong><br>\n</p>\n");
}

#[test]
fn prints_metadata() {
    let dir = TempDir::new().unwrap();
    let path = write_post(&dir, POST);

    cargo_bin_cmd!("funyu")
        .arg("--meta")
        .arg(&path)
        .assert()
        .success()
        .stdout("title: test\nauthor: MacRat\n");

    cargo_bin_cmd!("funyu")
        .arg("--json")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"test\""));
}

#[test]
fn converts_to_other_formats() {
    let dir = TempDir::new().unwrap();
    let path = write_post(&dir, POST);

    cargo_bin_cmd!("funyu")
        .arg(&path)
        .arg("--format")
        .arg("funyu")
        .assert()
        .success()
        .stdout(POST);

    cargo_bin_cmd!("funyu")
        .arg(&path)
        .arg("--format")
        .arg("treeviz")
        .assert()
        .success()
        .stdout(predicate::str::contains("§ first section"));
}

#[test]
fn lists_formats() {
    cargo_bin_cmd!("funyu")
        .arg("--list-formats")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("html")
                .and(predicate::str::contains("funyu"))
                .and(predicate::str::contains("treeviz"))
                .and(predicate::str::contains("metadata-json")),
        );
}

#[test]
fn applies_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_post(&dir, POST);
    let config = dir.path().join("funyu.yaml");
    fs::write(&config, "html:\n  initial_heading_level: 3\n").unwrap();

    cargo_bin_cmd!("funyu")
        .arg("--config")
        .arg(&config)
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("<h3>first section</h3>"));
}

#[test]
fn reports_parse_errors_with_line() {
    cargo_bin_cmd!("funyu")
        .write_stdin("intro\n\n``` python\n\tprint(1)\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("line 3: unterminated code block"));
}

#[test]
fn rejects_unknown_format() {
    cargo_bin_cmd!("funyu")
        .arg("--format")
        .arg("nope")
        .write_stdin("text\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Format 'nope' not found"));
}

#[test]
fn fails_on_missing_file() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("funyu")
        .arg(dir.path().join("missing.funyu"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading input"));
}

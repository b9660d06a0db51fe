use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/test.xml");

#[test]
fn test_run_success() {
    let temp = tempdir().unwrap();
    let output = temp.path().join("out.xml");

    let mut cmd = Command::cargo_bin("life-game").unwrap();
    cmd.arg(SAMPLE)
        .arg("--output")
        .arg(&output)
        .arg("--seed")
        .arg("42")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "* The game has successfully finished.",
        ));

    let snapshot = std::fs::read_to_string(&output).unwrap();
    assert!(snapshot.contains("<iterations>0</iterations>"));
    assert!(snapshot.contains("<cells>5</cells>"));
}

#[test]
fn test_run_with_config_file() {
    let temp = tempdir().unwrap();
    let output = temp.path().join("configured.xml");
    let config = temp.path().join("config.json");
    std::fs::write(
        &config,
        format!(
            r#"{{"output_path": {:?}, "seed": 3, "log_format": "json"}}"#,
            output.to_string_lossy()
        ),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("life-game").unwrap();
    cmd.arg(SAMPLE).arg("--config").arg(&config).assert().success();

    assert!(output.exists());
}

#[test]
fn test_run_wrong_number_of_arguments() {
    let mut cmd = Command::cargo_bin("life-game").unwrap();
    cmd.arg(SAMPLE)
        .arg("extra_argument")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("! Execute:"));
}

#[test]
fn test_run_without_arguments() {
    let mut cmd = Command::cargo_bin("life-game").unwrap();
    cmd.assert().code(1).stdout(predicate::str::contains(
        "! Error: The input XML file must be specified.",
    ));
}

#[test]
fn test_run_file_does_not_exist() {
    let mut cmd = Command::cargo_bin("life-game").unwrap();
    cmd.arg("non_existing.xml")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("The input file must exist."));
}

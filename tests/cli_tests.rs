//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn voxfile_bin() -> Command {
    Command::cargo_bin("voxfile").expect("binary should build")
}

#[test]
fn help_output() {
    voxfile_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--voice")
                .and(predicate::str::contains("--rate"))
                .and(predicate::str::contains("--pitch"))
                .and(predicate::str::contains("--volume"))
                .and(predicate::str::contains("--format"))
                .and(predicate::str::contains("--play"))
                .and(predicate::str::contains("--notify"))
                .and(predicate::str::contains("voices")),
        );
}

#[test]
fn version_output() {
    voxfile_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("voxfile"));
}

#[test]
fn config_path_command() {
    voxfile_bin()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("voxfile").and(predicate::str::contains("config.toml")),
        );
}

#[test]
fn config_help() {
    voxfile_bin()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("set"))
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("list"))
                .and(predicate::str::contains("path")),
        );
}

#[test]
fn config_get_unknown_key() {
    voxfile_bin()
        .args(["config", "get", "api_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn invalid_format_value() {
    let output = voxfile_bin()
        .args(["hello", "--format", "flac"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("compressed"),
        "Expected the valid format values in the error, got: {}",
        stderr
    );
}

#[test]
fn empty_stdin_is_a_usage_error() {
    // no text argument and nothing piped in: rejected before any engine call
    voxfile_bin()
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("text"));
}

#[test]
fn blank_text_argument_is_a_usage_error() {
    voxfile_bin()
        .arg("   ")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("text"));
}

#[test]
#[ignore = "requires espeak-ng installed"]
fn converts_text_to_wav_file() {
    let dir = tempfile::tempdir().unwrap();

    voxfile_bin()
        .args(["Hello world test", "--format", "uncompressed"])
        .args(["--output", &dir.path().to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello_world_test_speech.wav"));

    let artifact = dir.path().join("Hello_world_test_speech.wav");
    let bytes = std::fs::read(&artifact).expect("artifact should exist");
    assert!(!bytes.is_empty());
    // wav container from the engine passthrough
    assert_eq!(&bytes[..4], b"RIFF");
}

#[test]
#[ignore = "requires espeak-ng installed"]
fn voices_lists_engine_voices() {
    voxfile_bin()
        .arg("voices")
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

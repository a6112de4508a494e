use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn config_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(format!("{name}.cfg"))
}

// never created, so every run uses the built-in defaults
fn rpncalc(input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("rpncalc")
        .unwrap()
        .arg("--config")
        .arg(config_path("absent"))
        .env_remove("RUST_LOG")
        .write_stdin(input)
        .assert()
}

#[test]
fn addition() {
    rpncalc("3 4 +\n").success().stdout("7\n").stderr("");
}

#[test]
fn subtraction() {
    rpncalc("10 3 -\n").success().stdout("7\n");
}

#[test]
fn multiplication() {
    rpncalc("6 7 *\n").success().stdout("42\n");
}

#[test]
fn carry_beyond_native_range() {
    rpncalc("999999999999999999999999999 1 +\n")
        .success()
        .stdout("1000000000000000000000000000\n");
}

#[test]
fn input_without_trailing_newline() {
    rpncalc("-2 3 *").success().stdout("-6\n");
}

#[test]
fn division_is_unsupported() {
    rpncalc("5 0 /\n")
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Unsupported operation"));
}

#[test]
fn missing_operator() {
    rpncalc("1 2 3 +\n")
        .code(1)
        .stderr(predicate::str::contains("Operation symbol is missed"));
}

#[test]
fn empty_line_has_no_result() {
    rpncalc("\n").code(1).stderr("No result\n");
}

#[test]
fn invalid_character_reports_position() {
    rpncalc("1 2 x\n")
        .code(1)
        .stderr("Invalid character 'x' at position 4\n");
}

#[test]
fn insufficient_operands() {
    rpncalc("1 *\n")
        .code(1)
        .stderr(predicate::str::contains("Insufficient operands"));
}

#[test]
fn closed_stdin_is_a_resource_failure() {
    rpncalc("").code(2).stderr("Failed to read input\n");
}

#[test]
fn oversized_input_is_rejected() {
    let path = config_path("tiny");
    std::fs::write(&path, "(max_input_len: 4)").unwrap();
    Command::cargo_bin("rpncalc")
        .unwrap()
        .arg("--config")
        .arg(&path)
        .env_remove("RUST_LOG")
        .write_stdin("1 2 +\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Input exceeds 4 bytes"));
}

#[test]
fn runs_leave_no_files_behind() {
    let home = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("rpncalc-home");
    let _ = std::fs::remove_dir_all(&home);
    std::fs::create_dir_all(&home).unwrap();
    Command::cargo_bin("rpncalc")
        .unwrap()
        .env("HOME", &home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("RUST_LOG")
        .write_stdin("3 4 +\n")
        .assert()
        .success()
        .stdout("7\n");
    assert_eq!(std::fs::read_dir(&home).unwrap().count(), 0);

    rpncalc("1 1 +\n").success();
    assert!(!config_path("absent").exists());
}

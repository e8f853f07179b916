use std::process::{Command, Output};

fn jfactorial(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jfactorial"))
        .args(args)
        .env_remove("JFACTORIAL_N")
        .env_remove("JFACTORIAL_MODE")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_owned()
}

#[test]
fn prints_ten_factorial_by_default() {
    let output = jfactorial(&[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3628800");
}

#[test]
fn prints_requested_factorial() {
    let output = jfactorial(&["5"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "120");
}

#[test]
fn modes_change_overflow_behaviour() {
    let output = jfactorial(&["13"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());

    let output = jfactorial(&["13", "--mode", "wrapping"]);
    assert_eq!(stdout(&output), "1932053504");

    let output = jfactorial(&["25", "-m", "big"]);
    assert_eq!(stdout(&output), "15511210043330985984000000");
}

#[test]
fn negative_input_fails_fast() {
    let output = jfactorial(&["-1"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("negative"), "{}", stderr);
}

#[test]
fn unparseable_argument_is_a_usage_error() {
    let output = jfactorial(&["ten"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn environment_supplies_defaults() {
    let output = Command::new(env!("CARGO_BIN_EXE_jfactorial"))
        .env("JFACTORIAL_N", "6")
        .env("JFACTORIAL_MODE", "big")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "720");

    let output = Command::new(env!("CARGO_BIN_EXE_jfactorial"))
        .env("JFACTORIAL_N", "six")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn str_len_measures_text() {
    let output = Command::new(env!("CARGO_BIN_EXE_str-len"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3");

    let output = Command::new(env!("CARGO_BIN_EXE_str-len"))
        .arg("hello")
        .output()
        .unwrap();
    assert_eq!(stdout(&output), "5");
}

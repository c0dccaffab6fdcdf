use std::process::{Command, Output};

fn run_greet(args: &[&str], envs: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_greet"))
        .args(args)
        .env_remove("GREET_LOG")
        .envs(envs.iter().copied())
        .output()
        .expect("failed to launch greet")
}

#[test]
fn prints_greeting_and_exits_zero() {
    let output = run_greet(&[], &[]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello, World!\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn stays_quiet_on_stderr_by_default() {
    let output = run_greet(&[], &[]);
    assert!(output.stderr.is_empty());
}

#[test]
fn repeated_runs_are_identical() {
    let first = run_greet(&[], &[]);
    let second = run_greet(&[], &[]);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[test]
fn ignores_arguments() {
    let output = run_greet(&["--verbose", "extra"], &[]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello, World!\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn verbose_logging_goes_to_stderr_only() {
    let output = run_greet(&[], &[("GREET_LOG", "debug"), ("NO_COLOR", "1")]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello, World!\n");
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("greeting produced"));
}

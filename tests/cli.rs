use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_args(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_newton-calc"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .unwrap_or_else(|e| panic!("Failed to run newton-calc: {e}"))
}

fn run_with_stdin(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_newton-calc"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to spawn newton-calc: {e}"));
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(input.as_bytes())
            .unwrap_or_else(|e| panic!("Failed to write stdin: {e}"));
    }
    child
        .wait_with_output()
        .unwrap_or_else(|e| panic!("Failed to wait for newton-calc: {e}"))
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn last_stderr_line(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    stderr.lines().last().unwrap_or_default().to_string()
}

fn root_of(output: &Output) -> f64 {
    let line = stdout_of(output);
    let value = line
        .strip_prefix("x=")
        .unwrap_or_else(|| panic!("Unexpected answer line: {line}"));
    value
        .parse()
        .unwrap_or_else(|e| panic!("Unexpected root '{value}': {e}"))
}

#[test]
fn evaluates_expression_argument() {
    let output = run_with_args(&["2+3*4"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "=14");
}

#[test]
fn evaluates_expression_from_stdin() {
    let output = run_with_stdin("(1+2)*3\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "=9");
}

#[test]
fn solves_equation_from_stdin() {
    let output = run_with_stdin("=x^2-4 1\n");
    assert!(output.status.success());
    assert!((root_of(&output) - 2.0).abs() < 1e-9);
}

#[test]
fn solves_equation_from_arguments() {
    let output = run_with_args(&["=x-5", "0"]);
    assert!(output.status.success());
    assert!((root_of(&output) - 5.0).abs() < 1e-9);
}

#[test]
fn leading_minus_from_stdin() {
    let output = run_with_stdin("-2^2");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "=-4");
}

#[test]
fn malformed_input_fails() {
    let output = run_with_args(&["(1+2"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        last_stderr_line(&output),
        "Error: Invalid expression: Unmatched parenthesis at position 0"
    );
}

#[test]
fn equation_without_guess_fails() {
    let output = run_with_stdin("=x-5");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("initial guess"), "stderr was: {stderr}");
}

#[test]
fn unbound_variable_fails() {
    let output = run_with_args(&["x+1"]);
    assert!(!output.status.success());
    assert_eq!(
        last_stderr_line(&output),
        "Error: Evaluation failed: Variable x has no binding in closed-form evaluation"
    );
}

#[test]
fn initial_guess_for_plain_expression_fails() {
    let output = run_with_args(&["x+1", "5"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        last_stderr_line(&output),
        "Error: Invalid expression: Initial guess given but the expression is not an equation"
    );
}

#[test]
fn signed_exponent_literal_from_arguments() {
    let output = run_with_args(&["1e-3*1e+3"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "=1");
}

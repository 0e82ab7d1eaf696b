use std::ffi::OsStr;
use std::process::{Command, Output};

fn run_hello(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hello"))
        .args(args)
        .env("SOLIDLAB_LOG", "error")
        .env_remove("RUST_LOG")
        .output()
        .expect("hello binary should start")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn walkthrough_without_arguments_uses_dash() {
    let output = run_hello(&[]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = stdout_of(&output);
    let expected = format!(
        "SolidLab v{}\nNotes count: 3\nFirst note: alpha\nJoined: alpha-beta-gamma\nCaught out_of_range\n",
        solidlab::version()
    );
    assert_eq!(stdout, expected);
}

#[test]
fn empty_argument_falls_back_to_dash() {
    let output = run_hello(&[OsStr::new("")]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Joined: alpha-beta-gamma\n"));
}

#[test]
fn first_character_of_argument_is_the_separator() {
    let output = run_hello(&[OsStr::new("; and more")]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Joined: alpha;beta;gamma\n"));
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_still_exits_cleanly() {
    use std::os::unix::ffi::OsStrExt;

    let output = run_hello(&[OsStr::from_bytes(b"\xff")]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Joined: alpha\u{FFFD}beta\u{FFFD}gamma\n"));
    assert!(stdout.contains("Caught out_of_range\n"));
}

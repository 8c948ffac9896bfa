use assert_cmd::cargo;
use predicates::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn test_fmt_with_no_color() {
    cargo::cargo_bin_cmd!("tilg")
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .args(["fmt", "Hello **{}**", "--arg", "world"])
        .assert()
        .success()
        .stdout(predicate::eq("Hello world\n"));
}

#[test]
#[serial]
fn test_fmt_with_clicolor_force() {
    cargo::cargo_bin_cmd!("tilg")
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .args(["fmt", "Hello **{}**", "--arg", "world"])
        .assert()
        .success()
        .stdout(predicate::eq("Hello \u{1b}[1mworld\u{1b}[22m\n"));
}

#[test]
#[serial]
fn test_fmt_escaped_percent_renders_once() {
    cargo::cargo_bin_cmd!("tilg")
        .env("NO_COLOR", "1")
        .args(["fmt", "100% `done`"])
        .assert()
        .success()
        .stdout(predicate::eq("100% done\n"));
}

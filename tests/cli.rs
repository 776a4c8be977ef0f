use assert_cmd::Command;
use predicates::str::contains;
use std::io::Write;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("subcommander").unwrap();
    cmd.env_remove("SUBCOMMANDER_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_command_runs_default() {
    cmd()
        .assert()
        .success()
        .stdout(contains("\"precision\": 2"));
}

#[test]
fn help_lists_commands_and_exits_zero() {
    for flag in ["-h", "--help"] {
        cmd()
            .arg(flag)
            .assert()
            .success()
            .stdout("")
            .stderr(contains("Usage:\n\tsubcommander <command> [arguments]"))
            .stderr(contains("        echo    print the arguments joined together"))
            .stderr(contains(" show-config    print the effective configuration as JSON"));
    }
}

#[test]
fn unknown_command_fails() {
    cmd()
        .arg("deploy")
        .assert()
        .code(1)
        .stderr(contains("\"deploy\" is not a valid command"));
}

#[test]
fn echo_joins_positional_args() {
    cmd()
        .args(["echo", "--upper", "--separator", ",", "a", "b"])
        .assert()
        .success()
        .stdout("A,B\n");
}

#[test]
fn echo_without_args_is_too_few() {
    cmd()
        .arg("echo")
        .assert()
        .code(1)
        .stderr(contains("the 'echo' command should have 1 or more arguments"));
}

#[test]
fn add_respects_precision_flag() {
    cmd()
        .args(["add", "--precision", "3", "1", "2", "0.5"])
        .assert()
        .success()
        .stdout("3.500\n");
}

#[test]
fn handler_error_is_reported() {
    cmd()
        .args(["add", "1", "x"])
        .assert()
        .code(1)
        .stderr(contains("not a number: \"x\""));
}

#[test]
fn bad_flag_exits_with_usage_code() {
    cmd()
        .args(["echo", "--bogus", "a"])
        .assert()
        .code(2)
        .stderr(contains("--bogus"))
        .stderr(contains("echo [arguments]"));
}

#[test]
fn subcommand_help_shows_flags() {
    cmd()
        .args(["add", "--help"])
        .assert()
        .success()
        .stderr(contains("[arguments]"))
        .stderr(contains("--precision <N>"));
}

#[test]
fn config_file_supplies_defaults() {
    let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(file, "upper: true\nseparator: \"-\"").unwrap();

    cmd()
        .env("SUBCOMMANDER_CONFIG", file.path())
        .args(["echo", "x", "y"])
        .assert()
        .success()
        .stdout("X-Y\n");
}

#[test]
fn unreadable_config_file_fails() {
    cmd()
        .env("SUBCOMMANDER_CONFIG", "/nonexistent/subcommander.json")
        .assert()
        .code(1)
        .stderr(contains("failed to read config file"));
}

#[test]
fn out_of_range_precision_is_a_usage_error() {
    cmd()
        .args(["add", "--precision", "70000", "1", "2"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(contains("70000"));
}

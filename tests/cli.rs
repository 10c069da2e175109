use assert_cmd::Command;
use predicates::prelude::*;

const SSHD: &str = r#"{"MESSAGE":"hi","PRIORITY":"6","_COMM":"sshd","__REALTIME_TIMESTAMP":"1700000000000000","FOO":"bar","_PID":"123"}"#;

fn journalfields() -> Command {
    let mut cmd = Command::cargo_bin("journalfields").unwrap();
    cmd.env("TZ", "UTC").env_remove("RUST_LOG");
    cmd
}

#[test]
fn default_fields() {
    journalfields()
        .args(["--utc", "--color", "never"])
        .write_stdin(format!("{SSHD}\n"))
        .assert()
        .success()
        .stdout("sshd time=\"2023-11-14T22:13:20Z\" level=info msg=hi FOO=bar\n");
}

#[test]
fn selected_fields() {
    journalfields()
        .args(["--utc", "--color", "never", "_pid", "foo", "unit"])
        .write_stdin(format!("{SSHD}\n"))
        .assert()
        .success()
        .stdout("sshd time=\"2023-11-14T22:13:20Z\" level=info msg=hi FOO=bar UNIT=null _PID=123\n");
}

#[test]
fn colored() {
    journalfields()
        .args(["--utc", "--color", "always", "--no-command"])
        .write_stdin(format!("{SSHD}\n"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "\u{1b}[36mINFO\u{1b}[39m[2023-11-14T22:13:20Z] hi",
        ));
}

#[test]
fn invalid_priority_stops_the_run() {
    let input = format!(
        "{}\n{SSHD}\n",
        r#"{"MESSAGE":"hi","PRIORITY":"x","__REALTIME_TIMESTAMP":"0"}"#
    );

    journalfields()
        .args(["--utc", "--color", "never"])
        .write_stdin(input)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to parse priority"));
}

#[test]
fn error_reported_with_logging_off() {
    journalfields()
        .env("RUST_LOG", "off")
        .args(["--utc", "--color", "never"])
        .write_stdin(format!("{SSHD}\n\n{SSHD}\n"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("msg=hi"))
        .stderr(predicate::str::contains("Error: line 2: failed to unmarshal JSON"));
}

#[test]
fn keep_going() {
    let input = format!("not json\n{SSHD}\n");

    journalfields()
        .args(["--utc", "--color", "never", "--keep-going"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("msg=hi"))
        .stderr(predicate::str::contains("skipping record"));
}

#[test]
fn critical_entries_do_not_stop_the_run() {
    let input = [
        r#"{"MESSAGE":"crit","PRIORITY":"2","__REALTIME_TIMESTAMP":"0"}"#,
        r#"{"MESSAGE":"emerg","PRIORITY":"0","__REALTIME_TIMESTAMP":"0"}"#,
        SSHD,
    ]
    .join("\n");

    journalfields()
        .args(["--utc", "--color", "never"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("level=fatal msg=crit"))
        .stdout(predicate::str::contains("level=panic msg=emerg"))
        .stdout(predicate::str::contains("msg=hi"));
}

#[test]
fn empty_input() {
    journalfields().write_stdin("").assert().success().stdout("");
}

#[test]
fn help() {
    journalfields()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("journalctl -o json | journalfields"));
}

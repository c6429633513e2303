use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn log_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn err1dec() -> Command {
    Command::cargo_bin("err1dec").unwrap()
}

#[test]
fn decodes_matching_lines_in_order() {
    let log = log_file(
        "GPS fix lost\nErr1:48 65 6c 6c 6f\nnoise Err1:41\nErr1:\nErr1:57 4F 52 4C 44\n",
    );
    err1dec()
        .arg(log.path())
        .assert()
        .success()
        .stdout("Hello\n\nWORLD\n");
}

#[test]
fn decodes_monitor_log() {
    // "%02x " per byte leaves a trailing space; Err3: has no newline of its own
    let log = log_file(
        "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n\
         Err1:24 47 50 47 47 41 2c \n\
         Err3:$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n\
         Err1:4f 4b \n",
    );
    err1dec()
        .arg(log.path())
        .assert()
        .success()
        .stdout("$GPGGA,\nOK\n");
}

#[test]
fn no_matches_is_success() {
    let log = log_file("nothing\nto see\n");
    err1dec().arg(log.path()).assert().success().stdout("");
}

#[test]
fn bad_token_fails_and_stops() {
    let log = log_file("Err1:41\nErr1:zz\nErr1:42\n");
    err1dec()
        .arg(log.path())
        .assert()
        .failure()
        .stdout("A\n")
        .stderr(predicate::str::contains("line 2").and(predicate::str::contains("\"zz\"")));
}

#[test]
fn invalid_code_point_fails() {
    let log = log_file("Err1:d800\n");
    err1dec()
        .arg(log.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("not a valid character"));
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.log");
    err1dec()
        .arg(&path)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("missing.log"));
}

#[test]
fn path_is_required() {
    err1dec()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<INPUT>"));
}

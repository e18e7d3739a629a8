use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

mod common;

#[test]
fn empty_history() {
    let temp = tempfile::tempdir().unwrap();
    let mygit = assert_cmd::cargo::cargo_bin("mygit");
    common::init_empty_repo(mygit.as_os_str(), temp.path());

    Command::cargo_bin("mygit")
        .unwrap()
        .current_dir(temp.path())
        .arg("log")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn newest_first() {
    common::compare_two_runs(|cmd, path| {
        common::init_empty_repo(cmd, path);

        fs::write(path.join("a.txt"), "alpha\n").unwrap();
        let first = common::run_for_id(cmd, path, &["commit", "-m", "first"]);
        fs::write(path.join("b.txt"), "beta\n").unwrap();
        let second = common::run_for_id(cmd, path, &["commit", "-m", "second"]);
        fs::remove_file(path.join("a.txt")).unwrap();
        let third = common::run_for_id(cmd, path, &["commit", "-m", "third\n\ndetails"]);

        let output = common::run(cmd, path, &["log"]);
        assert!(output.status.success());
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            format!(
                "* {} third\n* {} second\n* {} first\n",
                third, second, first
            )
        );
    });
}

#[test]
fn error_broken_chain() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path();
    let mygit = assert_cmd::cargo::cargo_bin("mygit");
    common::init_empty_repo(mygit.as_os_str(), path);

    let missing = "0123456789012345678901234567890123456789";
    fs::write(path.join(".mygit/LATEST_COMMIT"), missing).unwrap();

    Command::cargo_bin("mygit")
        .unwrap()
        .current_dir(path)
        .arg("log")
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "no object named {}",
            missing
        )));
}

#[test]
fn error_outside_repo() {
    let temp = tempfile::tempdir().unwrap();

    Command::cargo_bin("mygit")
        .unwrap()
        .current_dir(temp.path())
        .arg("log")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with(
            "ERROR: not a mygit repository",
        ));
}

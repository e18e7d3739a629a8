use std::{
    ffi::OsStr,
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

use assert_cmd::cargo;

type MygitOp = fn(&OsStr, &Path);

// Run `op` twice, each time in a fresh temporary directory, and check
// that both runs leave behind byte-identical directory trees.
//
// Object IDs and file layout depend only on content, so any
// sequence of commands should be reproducible.
#[allow(dead_code)]
pub fn compare_two_runs(op: MygitOp) {
    let mygit = cargo::cargo_bin("mygit");
    let mygit = mygit.as_os_str();

    let a_temp = tempfile::tempdir().unwrap();
    let a_dir = a_temp.path();
    op(mygit, a_dir);

    let b_temp = tempfile::tempdir().unwrap();
    let b_dir = b_temp.path();
    op(mygit, b_dir);

    assert!(!dir_diff::is_different(a_dir, b_dir).unwrap());
}

#[allow(dead_code)]
pub fn init_empty_repo(cmd: &OsStr, path: &Path) {
    let output = run(cmd, path, &["init", "-n", "A. U. Thor"]);
    assert!(output.status.success());
}

#[allow(dead_code)]
pub fn run(cmd: &OsStr, path: &Path, args: &[&str]) -> Output {
    Command::new(cmd)
        .current_dir(path)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .args(args)
        .output()
        .unwrap()
}

#[allow(dead_code)]
pub fn run_with_stdin(cmd: &OsStr, path: &Path, args: &[&str], stdin: &[u8]) -> Output {
    let mut proc = Command::new(cmd)
        .current_dir(path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .args(args)
        .spawn()
        .unwrap();

    {
        let proc_stdin = proc.stdin.as_mut().unwrap();
        proc_stdin.write_all(stdin).unwrap();
    }

    proc.wait_with_output().unwrap()
}

// Run a command that is expected to succeed and print a single ID.
#[allow(dead_code)]
pub fn run_for_id(cmd: &OsStr, path: &Path, args: &[&str]) -> String {
    let output = run(cmd, path, args);
    assert!(output.status.success(), "{:?} failed: {:?}", args, output);
    String::from_utf8(output.stdout).unwrap().trim_end().to_string()
}

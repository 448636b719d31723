//! End-to-end tests for the `cmod` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmod_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cmod").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_command_prints_usage_and_fails() {
    cmod_cmd()
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("init"))
        .stderr(predicate::str::contains("fmt"));
}

#[test]
fn fmt_prints_canonical_form() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lib.mod");
    fs::write(&path, "os linux -O2\nversion 0.1\nmodule  c.example.org/lib\nos linux -g\n").unwrap();

    cmod_cmd()
        .arg("fmt")
        .arg(&path)
        .assert()
        .success()
        .stdout("module c.example.org/lib\nversion 0.1\nos linux -O2 -g\n");
}

#[test]
fn fmt_defaults_to_c_mod_in_cwd() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("c.mod"), "module here\n").unwrap();

    cmod_cmd()
        .current_dir(dir.path())
        .arg("fmt")
        .assert()
        .success()
        .stdout("module here\n");
}

#[test]
fn fmt_without_manifest_in_cwd_fails() {
    let dir = tempfile::tempdir().unwrap();
    cmod_cmd()
        .current_dir(dir.path())
        .arg("fmt")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with(
            "error: no c.mod in the current directory",
        ));
}

#[test]
fn fmt_reports_syntax_error_line() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("c.mod"), "module a\n\nmodule b\n").unwrap();
    let resolved = fs::canonicalize(dir.path().join("c.mod")).unwrap();

    cmod_cmd()
        .current_dir(dir.path())
        .arg("fmt")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::diff(format!("{}:3: syntax error\n", resolved.display())));
}

#[test]
fn fmt_requires_module_directive() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("c.mod"), "version 1\n").unwrap();

    cmod_cmd()
        .current_dir(dir.path())
        .arg("fmt")
        .assert()
        .code(1)
        .stderr(predicate::str::diff("cmod: no 'module' directive specified\n"))
        .stdout("");
}

#[test]
fn fmt_json_export() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("c.mod"), "module m\nos linux -O2\n").unwrap();

    cmod_cmd()
        .current_dir(dir.path())
        .args(["fmt", "--export", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""module": "m""#))
        .stdout(predicate::str::contains(r#""os": "linux""#));
}

#[test]
fn init_then_fmt() {
    let dir = tempfile::tempdir().unwrap();
    cmod_cmd()
        .current_dir(dir.path())
        .args(["init", "c.example.org/new"])
        .assert()
        .success();

    cmod_cmd()
        .current_dir(dir.path())
        .arg("fmt")
        .assert()
        .success()
        .stdout("module c.example.org/new\n");

    cmod_cmd()
        .current_dir(dir.path())
        .args(["init", "again"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn flags_for_named_platform() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("c.mod"),
        "module m\nos linux -O2 -pthread\nos darwin -g\n",
    )
    .unwrap();

    cmod_cmd()
        .current_dir(dir.path())
        .args(["flags", "--os", "linux"])
        .assert()
        .success()
        .stdout("-O2 -pthread\n");

    cmod_cmd()
        .current_dir(dir.path())
        .args(["flags", "--os", "windows"])
        .assert()
        .success()
        .stdout("");
}

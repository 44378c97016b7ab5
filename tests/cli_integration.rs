//! Integration tests for the PassVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`. The
//! master password comes from `PASSVAULT_PASSWORD` and entry passwords
//! are piped on stdin, so nothing waits on an interactive prompt.

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

const MASTER: &str = "correct-horse-battery";

/// Helper: get a Command pointing at the passvault binary.
fn passvault() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("passvault").expect("binary should exist");
    cmd.env_remove("PASSVAULT_USER").env_remove("RUST_LOG");
    cmd
}

/// Helper: a temp working directory with cheap Argon2 settings.
fn workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(".passvault.toml"),
        "argon2_memory_kib = 8192\nargon2_iterations = 1\nargon2_parallelism = 1\n",
    )
    .unwrap();
    tmp
}

/// Helper: a passvault command running inside `dir` with the master password set.
fn in_vault(dir: &TempDir) -> Command {
    let mut cmd = passvault();
    cmd.current_dir(dir.path()).env("PASSVAULT_PASSWORD", MASTER);
    cmd
}

/// Pull the entry id out of `add` output.
fn entry_id(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .lines()
        .find_map(|l| l.split("Id: ").nth(1))
        .map(|id| id.trim().to_string())
        .expect("add should print the entry id")
}

#[test]
fn help_flag_shows_usage() {
    passvault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local-first credential vault"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("strength"));
}

#[test]
fn version_flag_shows_version() {
    passvault()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passvault"));
}

#[test]
fn no_args_shows_help() {
    passvault()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn generate_respects_length_and_classes() {
    let tmp = TempDir::new().unwrap();
    let out = passvault()
        .current_dir(tmp.path())
        .args([
            "generate",
            "--length",
            "24",
            "--no-uppercase",
            "--no-lowercase",
            "--no-symbols",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(out).unwrap();
    let password = stdout.lines().next().unwrap();
    assert_eq!(password.len(), 24);
    assert!(password.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn generate_with_every_class_disabled_fails() {
    let tmp = TempDir::new().unwrap();
    passvault()
        .current_dir(tmp.path())
        .args([
            "generate",
            "--no-uppercase",
            "--no-lowercase",
            "--no-numbers",
            "--no-symbols",
        ])
        .assert()
        .failure();
}

#[test]
fn strength_scores_argument() {
    passvault()
        .args(["strength", "password"])
        .assert()
        .success()
        .stdout(predicate::str::contains("weak"));

    passvault()
        .args(["strength", "Tr0ub4dor&3-correct-horse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("very-strong"));
}

#[test]
fn list_on_missing_vault_fails() {
    let tmp = workspace();
    in_vault(&tmp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No vault exists"));
}

#[test]
fn init_creates_store_and_refuses_second_init() {
    let tmp = workspace();

    in_vault(&tmp).arg("init").assert().success();
    assert!(tmp
        .path()
        .join(".passvault/users/local/meta/kdf.json")
        .exists());

    in_vault(&tmp)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_rejects_short_master_password() {
    let tmp = workspace();
    passvault()
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "short")
        .arg("init")
        .assert()
        .failure();
}

#[test]
fn wrong_master_password_fails() {
    let tmp = workspace();
    in_vault(&tmp).arg("init").assert().success();

    passvault()
        .current_dir(tmp.path())
        .env("PASSVAULT_PASSWORD", "not-the-master")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid master password"));
}

#[test]
fn add_list_show_edit_delete_flow() {
    let tmp = workspace();
    in_vault(&tmp).arg("init").assert().success();

    let out = in_vault(&tmp)
        .args([
            "add",
            "GitHub",
            "--username",
            "alice@x.com",
            "--category",
            "work",
        ])
        .write_stdin("hunter2\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = entry_id(&out);

    in_vault(&tmp)
        .args(["add", "BankOfX", "--category", "banking"])
        .write_stdin("s3cret\n")
        .assert()
        .success();

    in_vault(&tmp)
        .args(["list", "--category", "banking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BankOfX"))
        .stdout(predicate::str::contains("GitHub").not());

    in_vault(&tmp)
        .args(["list", "--search", "git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub"))
        .stdout(predicate::str::contains("hunter2").not());

    in_vault(&tmp)
        .args(["show", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice@x.com"))
        .stdout(predicate::str::contains("hunter2").not());

    in_vault(&tmp)
        .args(["show", id.as_str(), "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2"));

    in_vault(&tmp)
        .args(["edit", id.as_str(), "--username", "alice@y.com"])
        .assert()
        .success();

    in_vault(&tmp)
        .args(["show", id.as_str(), "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice@y.com"))
        .stdout(predicate::str::contains("hunter2"));

    in_vault(&tmp)
        .args(["delete", id.as_str(), "--force"])
        .assert()
        .success();

    in_vault(&tmp)
        .args(["show", id.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn add_rejects_unknown_category() {
    let tmp = workspace();
    in_vault(&tmp).arg("init").assert().success();

    in_vault(&tmp)
        .args(["add", "GitHub", "--category", "shopping"])
        .write_stdin("pw\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn users_have_separate_vaults() {
    let tmp = workspace();
    in_vault(&tmp).arg("init").assert().success();
    in_vault(&tmp)
        .args(["--user", "bob", "init"])
        .assert()
        .success();

    in_vault(&tmp)
        .args(["add", "GitHub"])
        .write_stdin("pw\n")
        .assert()
        .success();

    in_vault(&tmp)
        .args(["--user", "bob", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub").not());
}

#[test]
fn piped_password_keeps_trailing_whitespace() {
    let tmp = workspace();
    in_vault(&tmp).arg("init").assert().success();

    let out = in_vault(&tmp)
        .args(["add", "Site"])
        .write_stdin("pw with space  \n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = entry_id(&out);

    in_vault(&tmp)
        .args(["show", id.as_str(), "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pw with space  \n"));
}

#[test]
fn piped_password_strips_only_crlf_terminator() {
    let tmp = workspace();
    in_vault(&tmp).arg("init").assert().success();

    let out = in_vault(&tmp)
        .args(["add", "Site"])
        .write_stdin("\ttabbed\t\r\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = entry_id(&out);

    in_vault(&tmp)
        .args(["show", id.as_str(), "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\ttabbed\t\n"));
}

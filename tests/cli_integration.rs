//! Integration tests for the Passkeep CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Passphrases are supplied through the `PASSKEEP_PASSPHRASE`
//! environment variable so no test needs an interactive prompt; secret
//! values go in through piped stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PASSPHRASE: &str = "test-passphrase-123";

/// Helper: get a Command pointing at the passkeep binary, rooted in
/// `dir` with the passphrase env var set.
fn passkeep(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("passkeep").expect("binary should exist");
    cmd.current_dir(dir.path())
        .env("PASSKEEP_PASSPHRASE", PASSPHRASE);
    cmd
}

/// Helper: initialize a vault in `dir`.
fn init_vault(dir: &TempDir) {
    passkeep(dir).arg("init").assert().success();
}

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    passkeep(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Password-protected credential store"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("change-master"));
}

#[test]
fn version_flag_shows_version() {
    let tmp = TempDir::new().unwrap();
    passkeep(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passkeep"));
}

#[test]
fn no_args_shows_help() {
    let tmp = TempDir::new().unwrap();
    passkeep(&tmp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn init_creates_vault() {
    let tmp = TempDir::new().unwrap();
    passkeep(&tmp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vault created"));

    assert!(tmp.path().join(".passkeep/credentials.vault").is_file());
}

#[test]
fn init_twice_fails() {
    let tmp = TempDir::new().unwrap();
    init_vault(&tmp);

    passkeep(&tmp)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_rejects_short_passphrase() {
    let tmp = TempDir::new().unwrap();
    passkeep(&tmp)
        .arg("init")
        .env("PASSKEEP_PASSPHRASE", "short")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8 characters"));
}

#[test]
fn add_get_list_flow() {
    let tmp = TempDir::new().unwrap();
    init_vault(&tmp);

    // Secret arrives via piped stdin, passphrase via the env var.
    passkeep(&tmp)
        .args(["add", "email"])
        .write_stdin("s3cr3t!\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("added"));

    // Fresh entry lists with a zero count.
    passkeep(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("email"))
        .stdout(predicate::str::contains("0"));

    // Retrieval prints exactly the stored secret.
    passkeep(&tmp)
        .args(["get", "email"])
        .assert()
        .success()
        .stdout(predicate::str::contains("s3cr3t!"));

    // The retrieval bumped the usage count.
    passkeep(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1"));
}

#[test]
fn replace_reports_kept_usage_count() {
    let tmp = TempDir::new().unwrap();
    init_vault(&tmp);

    passkeep(&tmp)
        .args(["add", "site"])
        .write_stdin("first\n")
        .assert()
        .success();

    passkeep(&tmp)
        .args(["add", "site"])
        .write_stdin("second\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("replaced"));

    passkeep(&tmp)
        .args(["get", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("second"));
}

#[test]
fn delete_removes_credential() {
    let tmp = TempDir::new().unwrap();
    init_vault(&tmp);

    passkeep(&tmp)
        .args(["add", "gone"])
        .write_stdin("bye\n")
        .assert()
        .success();

    passkeep(&tmp)
        .args(["delete", "gone", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    passkeep(&tmp)
        .args(["get", "gone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn wrong_passphrase_is_rejected() {
    let tmp = TempDir::new().unwrap();
    init_vault(&tmp);

    passkeep(&tmp)
        .args(["add", "email"])
        .write_stdin("s3cr3t!\n")
        .assert()
        .success();

    passkeep(&tmp)
        .args(["get", "email"])
        .env("PASSKEEP_PASSPHRASE", "not-the-passphrase")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"));
}

#[test]
fn change_master_requires_correct_old_passphrase() {
    let tmp = TempDir::new().unwrap();
    init_vault(&tmp);

    // The env var supplies the (wrong) old passphrase.
    passkeep(&tmp)
        .arg("change-master")
        .env("PASSKEEP_PASSPHRASE", "different-passphrase")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"));
}

#[test]
fn get_on_missing_vault_fails() {
    let tmp = TempDir::new().unwrap();

    passkeep(&tmp)
        .args(["get", "anything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vault not found"));
}

#[test]
fn vault_dir_flag_overrides_location() {
    let tmp = TempDir::new().unwrap();

    passkeep(&tmp)
        .args(["init", "--vault-dir", "custom"])
        .assert()
        .success();

    assert!(tmp.path().join("custom/credentials.vault").is_file());
}

#[test]
fn completions_bash_prints_script() {
    let tmp = TempDir::new().unwrap();
    passkeep(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passkeep"));
}

#[test]
fn completions_unknown_shell_fails() {
    let tmp = TempDir::new().unwrap();
    passkeep(&tmp)
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shell"));
}

//! Integration tests for the macsep CLI
//!
//! These tests run the binary against real files: write a target list and a
//! manifest, run a command, check what it prints.


use assert_cmd::cargo;
use macsep::core::services::sample::{EXAMPLE_INVENTORY_EXPORT, EXAMPLE_MANIFEST_WITH_ERRORS, EXAMPLE_TARGETS};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a macsep command with an isolated config dir
fn macsep(config_dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("macsep"));
    cmd.env("MACSEP_CONFIG_DIR", config_dir).env_remove("RUST_LOG");
    cmd
}

/// Write a file into the temp dir and return its path
fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write input file");
    path
}

// =============================================================================
// RECONCILE
// =============================================================================

#[test]
fn test_reconcile_human_summary() {
    let temp = TempDir::new().unwrap();
    let targets = write(&temp, "targets.txt", EXAMPLE_TARGETS);
    let manifest = write(&temp, "manifest.txt", EXAMPLE_INVENTORY_EXPORT);

    macsep(temp.path())
        .args(["reconcile", "--targets"])
        .arg(&targets)
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("MACs checked:    5"))
        .stdout(predicate::str::contains("CD - 02 ALLREDE - ÁGUAS LINDAS - GO"))
        .stdout(predicate::str::contains("746F88061D24"))
        .stdout(predicate::str::contains("200889BDFC12"));
}

#[test]
fn test_reconcile_json() {
    let temp = TempDir::new().unwrap();
    let targets = write(&temp, "targets.txt", "001122334455\nAABBCCDDEEFF\nZZZZZZZZZZZZ");
    let manifest = write(&temp, "manifest.txt", "MAC: 00:11:22:33:44:55\nLOCAL ESTOQUE: A1");

    let output = macsep(temp.path())
        .args(["--json", "reconcile", "-t"])
        .arg(&targets)
        .arg("-m")
        .arg(&manifest)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["result"]["matched"][0]["record"]["location"], "A1");
    assert_eq!(json["result"]["unmatched"][0], "AABBCCDDEEFF");
    assert_eq!(json["targets"]["rejected"][0], "ZZZZZZZZZZZZ");
    assert_eq!(json["groups"][0]["macs"][0], "001122334455");
}

#[test]
fn test_reconcile_with_report() {
    let temp = TempDir::new().unwrap();
    let targets = write(&temp, "targets.txt", "001122334455");
    let manifest = write(&temp, "manifest.txt", "MAC: 001122334455\nLOCAL ESTOQUE: A1");

    macsep(temp.path())
        .args(["reconcile", "--report", "--style", "bullets", "-t"])
        .arg(&targets)
        .arg("-m")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("EQUIPMENT RECONCILIATION REPORT"))
        .stdout(predicate::str::contains("• 001122334455"))
        .stdout(predicate::str::contains("--- End of report ---"));
}

#[test]
fn test_reconcile_targets_from_stdin() {
    let temp = TempDir::new().unwrap();
    let manifest = write(&temp, "manifest.txt", "MAC: 001122334455\nLOCAL ESTOQUE: A1");

    macsep(temp.path())
        .args(["reconcile", "-t", "-", "-m"])
        .arg(&manifest)
        .write_stdin("00:11:22:33:44:55\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All MACs found."));
}

#[test]
fn test_reconcile_rejects_two_stdin_inputs() {
    let temp = TempDir::new().unwrap();
    macsep(temp.path())
        .args(["reconcile", "-t", "-", "-m", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Only one input can be read from stdin"));
}

#[test]
fn test_reconcile_blank_targets_fail() {
    let temp = TempDir::new().unwrap();
    let targets = write(&temp, "targets.txt", "\n  \n");
    let manifest = write(&temp, "manifest.txt", "MAC: 001122334455");

    macsep(temp.path())
        .args(["reconcile", "-t"])
        .arg(&targets)
        .arg("-m")
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("MAC list is empty"));
}

#[test]
fn test_reconcile_missing_file() {
    let temp = TempDir::new().unwrap();
    macsep(temp.path())
        .args(["reconcile", "-t", "does-not-exist.txt", "-m", "also-missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read does-not-exist.txt"));
}

#[test]
fn test_reconcile_bad_style() {
    let temp = TempDir::new().unwrap();
    macsep(temp.path())
        .args(["reconcile", "-t", "a", "-m", "b", "--style", "fancy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown list style"));
}

#[test]
fn test_reconcile_sort_dedup_and_separators() {
    let temp = TempDir::new().unwrap();
    let targets = write(&temp, "targets.txt", "000000000003\n000000000001\n000000000003\nFFFFFFFFFFFF");
    let manifest = write(
        &temp,
        "manifest.txt",
        "MAC: 000000000001\nLOCAL ESTOQUE: A1\n\nMAC: 000000000003\nLOCAL ESTOQUE: A1",
    );

    macsep(temp.path())
        .args(["reconcile", "--sort", "numeric", "--dedup", "--separator", ";", "--last-separator", "."])
        .arg("-t")
        .arg(&targets)
        .arg("-m")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("000000000001; 000000000003."))
        .stdout(predicate::str::contains("FFFFFFFFFFFF."));
}

#[test]
fn test_last_separator_requires_separator() {
    let temp = TempDir::new().unwrap();
    macsep(temp.path())
        .args(["organize", "-m", "x", "--last-separator", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--separator"));
}

// =============================================================================
// ORGANIZE / NORMALIZE
// =============================================================================

#[test]
fn test_organize_reports_issues() {
    let temp = TempDir::new().unwrap();
    let manifest = write(&temp, "manifest.txt", EXAMPLE_MANIFEST_WITH_ERRORS);

    macsep(temp.path())
        .args(["organize", "-m"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Organized 3 MAC(s) from 6 block(s)"))
        .stdout(predicate::str::contains("Block 3: location not found"))
        .stdout(predicate::str::contains("Block 5: duplicate MAC (001122334455)"));
}

#[test]
fn test_normalize_from_stdin() {
    let temp = TempDir::new().unwrap();
    macsep(temp.path())
        .args(["normalize", "--targets", "-"])
        .write_stdin("aa:bb:cc:dd:ee:ff\nnot a mac\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 line(s): AABBCCDDEEFF,NOT A MAC"))
        .stdout(predicate::str::contains("  not a mac"));
}

// =============================================================================
// SAMPLE / VERSION
// =============================================================================

#[test]
fn test_sample_random_count() {
    let temp = TempDir::new().unwrap();
    let output = macsep(temp.path())
        .args(["sample", "--count", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(text.matches("MAC: ").count(), 3);
    assert_eq!(text.matches("LOCAL ESTOQUE: ").count(), 3);
}

#[test]
fn test_sample_export_round_trips_through_reconcile() {
    let temp = TempDir::new().unwrap();
    let output = macsep(temp.path())
        .args(["sample", "--kind", "export"])
        .output()
        .unwrap();
    let manifest = temp.path().join("export.txt");
    fs::write(&manifest, &output.stdout).unwrap();

    macsep(temp.path())
        .args(["reconcile", "-t", "-", "-m"])
        .arg(&manifest)
        .write_stdin("200889BDFC8E")
        .assert()
        .success()
        .stdout(predicate::str::contains("C.A ALLREDE - SANTA MARIA-DF"));
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    macsep(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("macsep v{}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_bare_invocation_json() {
    let temp = TempDir::new().unwrap();
    macsep(temp.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hint\""));
}

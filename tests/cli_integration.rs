//! CLI Integration Tests
//!
//! These tests drive the built `bcroot` binary end-to-end.
//!
//! Run with:
//! ```bash
//! cargo test --test cli_integration
//! ```

use bc_merkle::{Block, Hash, TransactionStatus, Tx};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

/// Get the path to the built binary
fn bcroot_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_bcroot"))
}

/// Run bcroot with an isolated config file and return (stdout, stderr, success)
fn run_bcroot(args: &[&str], config: &Path) -> (String, String, bool) {
    let output = Command::new(bcroot_binary())
        .args(["-f", "json", "-c"])
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute bcroot");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn parse(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("stdout should be one JSON object")
}

fn sample_block(n: usize) -> Block {
    let txs = (0..n)
        .map(|i| Tx::new(Hash::digest(format!("tx-{i}").as_bytes())))
        .collect();
    let status: TransactionStatus = (0..n).map(|i| i == 1).collect();
    Block::new(txs, status).unwrap()
}

fn write_block(dir: &Path, block: &Block) -> PathBuf {
    let path = dir.join("block.json");
    std::fs::write(&path, serde_json::to_string_pretty(block).unwrap()).unwrap();
    path
}

// ============================================================================
// Root Commands
// ============================================================================

#[test]
fn test_cli_tx_root_matches_library() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    let ids: Vec<Hash> = (0..5u8).map(|i| Hash::digest(&[i])).collect();
    let hex: Vec<String> = ids.iter().map(Hash::to_hex).collect();
    let args: Vec<&str> = std::iter::once("tx")
        .chain(hex.iter().map(String::as_str))
        .collect();

    let (stdout, stderr, success) = run_bcroot(&args, &config);

    assert!(success, "tx should succeed: {}", stderr);
    let json = parse(&stdout);
    let txs: Vec<Tx> = ids.into_iter().map(Tx::new).collect();
    assert_eq!(json["count"], 5);
    assert_eq!(
        json["root"],
        bc_merkle::tx_merkle_root(&txs).unwrap().to_hex()
    );
}

#[test]
fn test_cli_tx_rejects_bad_id() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");

    let (_stdout, stderr, success) = run_bcroot(&["tx", "not-hex"], &config);

    assert!(!success, "invalid id should fail");
    assert!(stderr.contains("Invalid hash"), "got: {}", stderr);
}

#[test]
fn test_cli_status_root() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");

    let (stdout, _stderr, success) = run_bcroot(&["status", "ok", "fail", "ok"], &config);

    assert!(success, "status should succeed");
    let expected: TransactionStatus = [false, true, false].into_iter().collect();
    assert_eq!(
        parse(&stdout)["root"],
        expected.merkle_root().unwrap().to_hex()
    );
}

#[test]
fn test_cli_status_rejects_unknown_word() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");

    let (_stdout, _stderr, success) = run_bcroot(&["status", "maybe"], &config);

    assert!(!success, "unknown status should fail");
}

#[test]
fn test_cli_empty_and_no_ids_agree() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");

    let (empty, _, ok1) = run_bcroot(&["empty"], &config);
    let (no_ids, _, ok2) = run_bcroot(&["tx"], &config);

    assert!(ok1 && ok2);
    assert_eq!(parse(&empty)["root"], Hash::EMPTY_STRING.to_hex());
    assert_eq!(parse(&no_ids)["root"], Hash::EMPTY_STRING.to_hex());
}

// ============================================================================
// Block Commands
// ============================================================================

#[test]
fn test_cli_commit_computes_commitment() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    let block = sample_block(3);
    let path = write_block(dir.path(), &block);

    let (stdout, _stderr, success) = run_bcroot(&["commit", path.to_str().unwrap()], &config);

    assert!(success, "commit should succeed");
    let json = parse(&stdout);
    assert_eq!(json["transactions"], 3);
    assert_eq!(
        json["commitment"]["transactions_merkle_root"],
        block.commitment.transactions_merkle_root.to_hex()
    );
    assert_eq!(
        json["commitment"]["transaction_status_hash"],
        block.commitment.transaction_status_hash.to_hex()
    );
}

#[test]
fn test_cli_verify_accepts_valid_block() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    let path = write_block(dir.path(), &sample_block(4));

    let (stdout, _stderr, success) = run_bcroot(&["verify", path.to_str().unwrap()], &config);

    assert!(success, "verify should succeed");
    assert!(stdout.contains("\"status\":\"ok\""));
}

#[test]
fn test_cli_verify_rejects_tampered_block() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    let mut block = sample_block(4);
    block.transactions.swap(1, 2);
    let path = write_block(dir.path(), &block);

    let (stdout, _stderr, success) = run_bcroot(&["verify", path.to_str().unwrap()], &config);

    assert!(!success, "tampered block should fail verification");
    let json = parse(&stdout);
    assert_eq!(json["status"], "error");
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("transactions merkle root"));
}

#[test]
fn test_cli_verify_missing_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    let missing = dir.path().join("missing.json");

    let (_stdout, stderr, success) = run_bcroot(&["verify", missing.to_str().unwrap()], &config);

    assert!(!success);
    assert!(stderr.contains("Failed to read block file"), "got: {}", stderr);
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_cli_text_format_from_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"format":"text"}"#).unwrap();

    // No -f flag, so the config file decides.
    let output = Command::new(bcroot_binary())
        .args(["-c", config.to_str().unwrap(), "empty"])
        .output()
        .expect("Failed to execute bcroot");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("\n  \"root\""), "expected pretty JSON, got: {}", stdout);
}

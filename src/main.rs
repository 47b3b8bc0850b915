//! bcroot CLI - Merkle commitments from the command line
//!
//! Computes transaction and status roots, and checks the commitment a
//! block file declares against its body.

use anyhow::Context;
use bc_merkle::{
    tx_merkle_root, tx_status_merkle_root, Block, Config, Hash, OutputFormat, Tx, TxVerifyResult,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bcroot")]
#[command(about = "Merkle commitments over block transactions and verification results")]
#[command(version)]
struct Cli {
    /// Output format (json or text); overrides the config file
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merkle root of transaction ids, in order
    Tx {
        /// Hex-encoded 32-byte transaction ids
        ids: Vec<String>,
    },

    /// Merkle root of transaction verification results, in order
    Status {
        /// One of ok, fail, true, false, 0, 1 per transaction
        results: Vec<String>,
    },

    /// Compute the commitment for a block file's body
    Commit {
        /// Block JSON file
        file: PathBuf,
    },

    /// Check a block file's declared commitment against its body
    Verify {
        /// Block JSON file
        file: PathBuf,
    },

    /// Print the root of an empty list
    Empty,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_logging(cli.verbose, &config);
    let format = cli.format.unwrap_or(config.format);

    match cli.command {
        Commands::Tx { ids } => {
            let txs = ids
                .iter()
                .map(|id| id.parse::<Hash>().map(Tx::new))
                .collect::<bc_merkle::Result<Vec<_>>>()?;
            let root = tx_merkle_root(&txs)?;
            output(
                format,
                &serde_json::json!({
                    "count": txs.len(),
                    "root": root.to_hex()
                }),
            )?;
        }

        Commands::Status { results } => {
            let results = results
                .iter()
                .map(|r| parse_status(r).map(TxVerifyResult::new))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let root = tx_status_merkle_root(&results)?;
            output(
                format,
                &serde_json::json!({
                    "count": results.len(),
                    "root": root.to_hex()
                }),
            )?;
        }

        Commands::Commit { file } => {
            let block = read_block(&file)?;
            let commitment = block.compute_commitment()?;
            output(
                format,
                &serde_json::json!({
                    "transactions": block.transactions.len(),
                    "commitment": commitment
                }),
            )?;
        }

        Commands::Verify { file } => {
            let block = read_block(&file)?;
            match block.validate_commitment() {
                Ok(()) => {
                    output(
                        format,
                        &serde_json::json!({
                            "status": "ok",
                            "transactions": block.transactions.len(),
                            "commitment": block.commitment
                        }),
                    )?;
                }
                Err(e) => {
                    tracing::debug!(file = %file.display(), error = %e, "commitment rejected");
                    output(
                        format,
                        &serde_json::json!({
                            "status": "error",
                            "message": e.to_string()
                        }),
                    )?;
                    std::process::exit(1);
                }
            }
        }

        Commands::Empty => {
            output(
                format,
                &serde_json::json!({
                    "count": 0,
                    "root": Hash::EMPTY_STRING.to_hex()
                }),
            )?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, config: &Config) {
    let filter = if verbose {
        EnvFilter::new("bc_merkle=debug,bcroot=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_block(path: &Path) -> anyhow::Result<Block> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read block file {}", path.display()))?;
    let block = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse block file {}", path.display()))?;
    Ok(block)
}

fn parse_status(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "ok" | "false" | "0" => Ok(false),
        "fail" | "true" | "1" => Ok(true),
        _ => anyhow::bail!("Invalid status {:?}: expected ok or fail", s),
    }
}

fn output(format: OutputFormat, value: &serde_json::Value) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
        OutputFormat::Text => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// Command line options for a benchmark suite binary.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
pub struct SuiteCli {
    /// A JSON-RPC endpoint for the network to benchmark
    #[clap(short, long)]
    pub rpc_url: String,

    /// Network name used to select deployed contract addresses
    #[clap(short, long)]
    pub network: String,

    /// Path to the deployed contract addresses file
    #[clap(long, default_value = "deployed_addresses.json")]
    pub addresses: PathBuf,

    /// Hex-encoded private key of the benchmark signer.
    ///
    /// When omitted, the DYNO_PRIVATE_KEY environment variable is used.
    #[clap(long)]
    pub private_key: Option<String>,

    /// The number of times to run the full scenario sequence
    #[clap(long, default_value = "3")]
    pub runs: u32,

    /// File that run records are appended to
    #[clap(long, default_value = "benchmark_results.jsonl")]
    pub log_file: PathBuf,

    /// Do not show a progress bar on the CLI.
    ///
    /// This is recommended for CI/CD environments where the progress bar
    /// isn't being looked at by anyone and is just adding noise to the logs.
    #[clap(long, default_value = "false")]
    pub no_progress: bool,
}

impl SuiteCli {
    /// Resolve the signer key from the flag or the environment.
    pub fn resolve_private_key(&self) -> anyhow::Result<String> {
        if let Some(key) = &self.private_key {
            return Ok(key.clone());
        }

        std::env::var("DYNO_PRIVATE_KEY")
            .context("No signer key: pass --private-key or set DYNO_PRIVATE_KEY")
    }
}

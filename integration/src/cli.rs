//! Definition of the CLI arguments for integration tests

use std::path::PathBuf;

use clap::Parser;

use crate::constants::{DEFAULT_DEVNET_HOSTPORT, DEFAULT_DEVNET_PKEY};

/// CLI tool for running deployment tests against a running devnet node.
///
/// Assumes the contract has already been compiled to the given artifact.
#[derive(Parser)]
pub(crate) struct Cli {
    /// Test to run, all tests are run if omitted
    #[arg(short, long)]
    pub(crate) test: Option<String>,

    /// Path to the compiled `FlashLoanArbitrage` artifact
    #[arg(short, long)]
    pub(crate) artifact: PathBuf,

    /// Devnet private key, defaults to the first default Anvil account
    #[arg(short, long, default_value = DEFAULT_DEVNET_PKEY)]
    pub(crate) priv_key: String,

    /// Devnet RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_DEVNET_HOSTPORT)]
    pub(crate) rpc_url: String,
}

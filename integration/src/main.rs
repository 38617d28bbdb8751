//! Deployment tests against a running devnet node.
//!
//! Every registered test is run in turn; the process fails if any test fails.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

mod cli;
mod constants;
mod test_inventory;
mod tests;
mod util;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use eyre::{eyre, Result};
use test_inventory::{IntegrationTest, TestArgs};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        test,
        artifact,
        priv_key,
        rpc_url,
    } = Cli::parse();

    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = TestArgs::new(&rpc_url, &priv_key, &artifact)?;

    let mut ran = 0;
    let mut failed = 0;
    for integration_test in inventory::iter::<IntegrationTest> {
        if test.as_deref().is_some_and(|name| name != integration_test.name) {
            continue;
        }

        ran += 1;
        match (integration_test.test_fn)(args.clone()).await {
            Ok(()) => println!("{} {}", "PASS".green().bold(), integration_test.name),
            Err(e) => {
                failed += 1;
                println!("{} {}: {e:?}", "FAIL".red().bold(), integration_test.name);
            }
        }
    }

    if ran == 0 {
        return Err(eyre!("no test matched {}", test.unwrap_or_default()));
    }
    if failed > 0 {
        return Err(eyre!("{failed} of {ran} tests failed"));
    }

    Ok(())
}

//! Definitions of CLI arguments for the deploy script

use std::path::PathBuf;

use clap::{error::ErrorKind, Parser};

use crate::{
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_CONFIRMATION_TIMEOUT_SECS, DEFAULT_NUM_DEPLOY_CONFIRMATIONS,
    },
    types::Network,
};

/// Deploy the `FlashLoanArbitrage` contract.
///
/// Constructor arguments are read from the `AAVE_POOL_ADDRESSES_PROVIDER`,
/// `DEX_AGGREGATOR` and `PROTOCOL_FEE` environment variables.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The network profile to deploy to
    #[arg(short, long, env = "NETWORK", value_enum, default_value_t = Network::Sepolia)]
    pub network: Network,

    /// Network RPC URL, overrides the profile's endpoint
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    /// Root of the compiled contract artifacts
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// Path to the contract's artifact file, overrides the lookup under `--artifacts`
    #[arg(long)]
    pub artifact: Option<PathBuf>,

    /// Number of confirmations to wait for
    #[arg(
        long,
        default_value_t = DEFAULT_NUM_DEPLOY_CONFIRMATIONS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub confirmations: u64,

    /// Seconds to wait for the deployment to be confirmed
    #[arg(
        long,
        default_value_t = DEFAULT_CONFIRMATION_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Path to a `deployments.json` file in which to record the deployed address
    #[arg(short, long)]
    pub deployments_path: Option<PathBuf>,
}

/// Whether a parse error is a request for help or version output rather than
/// a rejected command line
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{is_informational, Cli};
    use crate::types::Network;

    #[test]
    fn test_bare_invocation() {
        let cli = Cli::try_parse_from(["deploy"]).unwrap();
        assert_eq!(cli.confirmations, 1);
        assert_eq!(cli.timeout_secs, 300);
        assert!(cli.artifact.is_none());
        assert!(cli.deployments_path.is_none());
    }

    #[test]
    fn test_network_flag() {
        let cli = Cli::try_parse_from(["deploy", "--network", "hardhat"]).unwrap();
        assert_eq!(cli.network, Network::Hardhat);

        assert!(Cli::try_parse_from(["deploy", "--network", "goerli"]).is_err());
    }

    #[test]
    fn test_zero_confirmations_rejected() {
        assert!(Cli::try_parse_from(["deploy", "--confirmations", "0"]).is_err());
        assert!(Cli::try_parse_from(["deploy", "--timeout-secs", "0"]).is_err());
    }

    #[test]
    fn test_informational_errors() {
        for args in [["deploy", "--help"], ["deploy", "--version"]] {
            let err = Cli::try_parse_from(args).unwrap_err();
            assert!(is_informational(&err), "{args:?}");
        }

        for args in [
            ["deploy", "--network", "goerli"],
            ["deploy", "--confirmations", "0"],
            ["deploy", "--timeout-secs", "soon"],
        ] {
            let err = Cli::try_parse_from(args).unwrap_err();
            assert!(!is_informational(&err), "{args:?}");
        }
    }
}

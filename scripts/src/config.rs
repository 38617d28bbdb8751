//! Configuration of a deployment run.
//!
//! The configuration is assembled once, before anything touches the network,
//! from the parsed CLI and an environment lookup. Every required value is
//! validated here so that a misconfigured run fails without sending a request.

use std::{env, path::PathBuf, str::FromStr, time::Duration};

use alloy::{signers::local::PrivateKeySigner, transports::http::reqwest::Url};
use alloy_primitives::{Address, U256};
use tracing::{debug, warn};

use crate::{
    artifacts::default_artifact_path,
    cli::Cli,
    constants::{
        ADDRESSES_PROVIDER_ENV_VAR, ALCHEMY_KEY_ENV_VAR, CONTRACT_NAME, DEX_AGGREGATOR_ENV_VAR,
        PRIVATE_KEY_ENV_VAR, PROTOCOL_FEE_ENV_VAR,
    },
    errors::DeployError,
    types::{DeploymentRequest, Network},
};

/// The identity that signs the deployment transaction
#[derive(Clone, Debug)]
pub enum SignerSource {
    /// A private key held by this process
    LocalKey(PrivateKeySigner),
    /// The first account unlocked on the node, only available on local networks
    NodeAccounts,
}

/// Everything a deployment run needs, fixed for the lifetime of the run
#[derive(Clone, Debug)]
pub struct DeployConfig {
    /// The network profile being deployed to
    pub network: Network,
    /// The RPC endpoint of the network
    pub rpc_url: Url,
    /// The identity that signs the deployment
    pub signer: SignerSource,
    /// The constructor arguments of the contract
    pub request: DeploymentRequest,
    /// The compiled artifact of the contract
    pub artifact_path: PathBuf,
    /// The number of confirmations to wait for
    pub confirmations: u64,
    /// How long to wait for the confirmations
    pub confirmation_timeout: Duration,
    /// Where to record the deployed address, if anywhere
    pub deployments_path: Option<PathBuf>,
}

impl DeployConfig {
    /// Build the configuration from the CLI and the process environment
    pub fn from_env(cli: Cli) -> Result<Self, DeployError> {
        Self::from_lookup(cli, |key| env::var(key).ok())
    }

    /// Build the configuration from the CLI and the given environment lookup
    pub fn from_lookup<F>(cli: Cli, lookup: F) -> Result<Self, DeployError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let request = DeploymentRequest {
            addresses_provider: parse_address(
                ADDRESSES_PROVIDER_ENV_VAR,
                &require_var(&lookup, ADDRESSES_PROVIDER_ENV_VAR)?,
            )?,
            dex_aggregator: parse_address(
                DEX_AGGREGATOR_ENV_VAR,
                &require_var(&lookup, DEX_AGGREGATOR_ENV_VAR)?,
            )?,
            protocol_fee: parse_protocol_fee(&require_var(&lookup, PROTOCOL_FEE_ENV_VAR)?)?,
        };

        let rpc_url = match cli.rpc_url {
            Some(url) => url,
            None => {
                let alchemy_key = read_var(&lookup, ALCHEMY_KEY_ENV_VAR);
                cli.network.default_rpc_url(alchemy_key.as_deref()).ok_or_else(|| {
                    DeployError::Configuration(format!(
                        "{ALCHEMY_KEY_ENV_VAR} must be set to reach {}",
                        cli.network
                    ))
                })?
            }
        };
        let rpc_url =
            Url::parse(&rpc_url).map_err(|e| DeployError::ClientInitialization(e.to_string()))?;

        let signer = match read_var(&lookup, PRIVATE_KEY_ENV_VAR) {
            Some(key) => SignerSource::LocalKey(PrivateKeySigner::from_str(&key).map_err(|e| {
                DeployError::Configuration(format!("invalid {PRIVATE_KEY_ENV_VAR}: {e}"))
            })?),
            None if cli.network.is_local() => SignerSource::NodeAccounts,
            None => {
                return Err(DeployError::Configuration(format!(
                    "no signer configured for network {}, set {PRIVATE_KEY_ENV_VAR}",
                    cli.network
                )))
            }
        };

        let artifact_path = cli
            .artifact
            .unwrap_or_else(|| default_artifact_path(&cli.artifacts, CONTRACT_NAME));

        debug!(network = %cli.network, artifact = %artifact_path.display(), "configuration loaded");

        Ok(DeployConfig {
            network: cli.network,
            rpc_url,
            signer,
            request,
            artifact_path,
            confirmations: cli.confirmations,
            confirmation_timeout: Duration::from_secs(cli.timeout_secs),
            deployments_path: cli.deployments_path,
        })
    }
}

/// Read an environment value, treating blank values as absent
fn read_var<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read an environment value that must be present
fn require_var<F>(lookup: &F, name: &str) -> Result<String, DeployError>
where
    F: Fn(&str) -> Option<String>,
{
    read_var(lookup, name)
        .ok_or_else(|| DeployError::Configuration(format!("{name} is not set")))
}

/// Parse a chain address.
///
/// Single-case hex is accepted as is; mixed-case hex must be a valid EIP-55 checksum.
pub fn parse_address(name: &str, value: &str) -> Result<Address, DeployError> {
    let value = value.trim();
    let digits = value.strip_prefix("0x").unwrap_or(value);
    let mixed_case = digits.chars().any(|c| c.is_ascii_lowercase())
        && digits.chars().any(|c| c.is_ascii_uppercase());

    let address = if mixed_case {
        Address::parse_checksummed(format!("0x{digits}"), None /* chain_id */)
            .map_err(|e| DeployError::Configuration(format!("{name} is not a valid address: {e}")))?
    } else {
        Address::from_str(digits)
            .map_err(|e| DeployError::Configuration(format!("{name} is not a valid address: {e}")))?
    };

    if address.is_zero() {
        warn!("{name} is the zero address");
    }

    Ok(address)
}

/// Parse the protocol fee from a decimal string into a `uint256`
pub fn parse_protocol_fee(value: &str) -> Result<U256, DeployError> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DeployError::Configuration(format!(
            "{PROTOCOL_FEE_ENV_VAR} must be a decimal unsigned integer, got {value:?}"
        )));
    }

    U256::from_str_radix(value, 10).map_err(|e| {
        DeployError::Configuration(format!("{PROTOCOL_FEE_ENV_VAR} does not fit in a uint256: {e}"))
    })
}

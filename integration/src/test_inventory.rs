//! Defines types and utilities for managing the inventory of integration tests

use std::{
    future::Future,
    path::{Path, PathBuf},
    pin::Pin,
    str::FromStr,
    time::Duration,
};

use alloy::{
    providers::{DynProvider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_primitives::{Address, U256};
use eyre::Result;
use scripts::{
    artifacts::ContractArtifact,
    config::{DeployConfig, SignerSource},
    types::{DeploymentRequest, Network},
};

use crate::constants::{
    DEVNET_CONFIRMATION_TIMEOUT_SECS, TEST_ADDRESSES_PROVIDER, TEST_DEX_AGGREGATOR,
    TEST_PROTOCOL_FEE,
};

/// The arguments provided to each integration test
#[derive(Clone)]
pub struct TestArgs {
    /// The devnet RPC URL
    pub rpc_url: Url,
    /// The funded devnet key
    pub signer: PrivateKeySigner,
    /// The contract artifact to deploy
    pub artifact: ContractArtifact,
    /// A provider for inspecting the devnet
    pub provider: DynProvider,
}

impl TestArgs {
    /// Set up the test arguments from the CLI values
    pub fn new(rpc_url: &str, priv_key: &str, artifact: &Path) -> Result<Self> {
        let rpc_url = Url::parse(rpc_url)?;
        let signer = PrivateKeySigner::from_str(priv_key)?;
        let artifact = scripts::commands::load_artifact(artifact)?;
        let provider = DynProvider::new(ProviderBuilder::new().connect_http(rpc_url.clone()));

        Ok(TestArgs {
            rpc_url,
            signer,
            artifact,
            provider,
        })
    }

    /// A devnet deployment configuration signed by the given source
    pub fn config(&self, signer: SignerSource) -> Result<DeployConfig> {
        Ok(DeployConfig {
            network: Network::Hardhat,
            rpc_url: self.rpc_url.clone(),
            signer,
            request: DeploymentRequest {
                addresses_provider: Address::from_str(TEST_ADDRESSES_PROVIDER)?,
                dex_aggregator: Address::from_str(TEST_DEX_AGGREGATOR)?,
                protocol_fee: U256::from(TEST_PROTOCOL_FEE),
            },
            artifact_path: PathBuf::new(),
            confirmations: 1,
            confirmation_timeout: Duration::from_secs(DEVNET_CONFIRMATION_TIMEOUT_SECS),
            deployments_path: None,
        })
    }

    /// A devnet deployment configuration signed by the funded key
    pub fn local_key_config(&self) -> Result<DeployConfig> {
        self.config(SignerSource::LocalKey(self.signer.clone()))
    }
}

/// The signature of an integration test
type TestFn = fn(TestArgs) -> Pin<Box<dyn Future<Output = Result<()>>>>;

/// A struct representing an integration test
pub struct IntegrationTest {
    /// The name of the test
    pub name: &'static str,
    /// The test function
    pub test_fn: TestFn,
}

// Collect the integration tests into an iterable
inventory::collect!(IntegrationTest);

/// Macro to register an integration test
#[macro_export]
macro_rules! integration_test {
    ($test_fn:ident) => {
        inventory::submit!($crate::test_inventory::IntegrationTest {
            name: stringify!($test_fn),
            test_fn: move |args| std::boxed::Box::pin($test_fn(args)),
        });
    };
}

//! Submission of the contract-creation transaction.
//!
//! [`ContractDeployer`] is the boundary between the runner and the chain. The
//! runner only needs a signing identity and a way to turn init code into a
//! confirmed contract; [`RpcDeployer`] provides both over a JSON-RPC endpoint.

use std::{future::Future, time::Duration};

use alloy::{
    network::{ReceiptResponse, TransactionBuilder},
    providers::{DynProvider, PendingTransactionError, Provider, ProviderBuilder, WatchTxError},
    rpc::types::TransactionRequest,
    transports::{RpcError, TransportError},
};
use alloy_primitives::{Address, Bytes, B256};
use tracing::info;

use crate::{
    config::{DeployConfig, SignerSource},
    errors::DeployError,
    types::DeployedContract,
};

/// A backend able to deploy contracts
pub trait ContractDeployer {
    /// Resolve the account that signs the deployment
    fn signer_address(&self) -> impl Future<Output = Result<Address, DeployError>>;

    /// Submit a contract-creation transaction carrying `init_code` from
    /// `from`, and wait until it is confirmed
    fn deploy(
        &self,
        from: Address,
        init_code: Bytes,
    ) -> impl Future<Output = Result<DeployedContract, DeployError>>;
}

/// Deploys contracts through a JSON-RPC provider
pub struct RpcDeployer {
    /// The provider, with a wallet attached when signing locally
    provider: DynProvider,
    /// The address of the local signing key, if any
    local_signer: Option<Address>,
    /// The chain ID the node must report, if fixed
    expected_chain_id: Option<u64>,
    /// The number of confirmations to wait for
    confirmations: u64,
    /// How long to wait for the confirmations
    timeout: Duration,
}

impl RpcDeployer {
    /// Set up the provider described by the configuration.
    ///
    /// No request is made until the deployer is used.
    pub fn new(config: &DeployConfig) -> Self {
        let url = config.rpc_url.clone();
        let (provider, local_signer) = match &config.signer {
            SignerSource::LocalKey(key) => {
                let provider = ProviderBuilder::new().wallet(key.clone()).connect_http(url);
                (DynProvider::new(provider), Some(key.address()))
            }
            SignerSource::NodeAccounts => {
                let provider = ProviderBuilder::new().connect_http(url);
                (DynProvider::new(provider), None)
            }
        };

        RpcDeployer {
            provider,
            local_signer,
            expected_chain_id: config.network.expected_chain_id(),
            confirmations: config.confirmations,
            timeout: config.confirmation_timeout,
        }
    }

    /// Map an error raised while waiting on the deployment transaction
    fn pending_tx_error(&self, tx_hash: B256, err: PendingTransactionError) -> DeployError {
        match err {
            PendingTransactionError::TxWatcher(WatchTxError::Timeout) => {
                DeployError::ConfirmationTimeout(format!(
                    "{tx_hash:#x} not confirmed within {}s",
                    self.timeout.as_secs()
                ))
            }
            PendingTransactionError::TransportError(e) => DeployError::Network(e.to_string()),
            other => DeployError::ConfirmationFailure(format!("{tx_hash:#x}: {other}")),
        }
    }
}

impl ContractDeployer for RpcDeployer {
    async fn signer_address(&self) -> Result<Address, DeployError> {
        let chain_id = self.provider.get_chain_id().await.map_err(rpc_error)?;
        if let Some(expected) = self.expected_chain_id {
            if chain_id != expected {
                return Err(DeployError::ClientInitialization(format!(
                    "node reports chain id {chain_id}, expected {expected}"
                )));
            }
        }
        info!(chain_id, "connected to node");

        if let Some(address) = self.local_signer {
            return Ok(address);
        }

        let accounts = self.provider.get_accounts().await.map_err(rpc_error)?;
        accounts.first().copied().ok_or_else(|| {
            DeployError::Configuration("node has no unlocked accounts to sign with".to_string())
        })
    }

    async fn deploy(
        &self,
        from: Address,
        init_code: Bytes,
    ) -> Result<DeployedContract, DeployError> {
        let tx = TransactionRequest::default()
            .with_from(from)
            .with_deploy_code(init_code);

        let pending = self.provider.send_transaction(tx).await.map_err(rpc_error)?;
        let tx_hash = *pending.tx_hash();
        info!(%tx_hash, confirmations = self.confirmations, "deployment transaction submitted");

        let receipt = pending
            .with_required_confirmations(self.confirmations)
            .with_timeout(Some(self.timeout))
            .get_receipt()
            .await
            .map_err(|e| self.pending_tx_error(tx_hash, e))?;

        if !receipt.status() {
            return Err(DeployError::ContractConstruction(format!(
                "deployment transaction {tx_hash:#x} reverted"
            )));
        }

        let address = receipt.contract_address().ok_or_else(|| {
            DeployError::ConfirmationFailure(format!(
                "receipt of {tx_hash:#x} carries no contract address"
            ))
        })?;

        Ok(DeployedContract {
            address,
            transaction_hash: tx_hash,
            deployer: from,
            block_number: receipt.block_number(),
            gas_used: receipt.gas_used(),
        })
    }
}

/// Map an RPC error.
///
/// A node answering with an execution revert (typically while estimating gas
/// for the creation) means the constructor rejected its arguments; anything
/// else is a failure to reach the node or a rejected request.
fn rpc_error(err: TransportError) -> DeployError {
    match err {
        RpcError::ErrorResp(payload) if payload.message.to_lowercase().contains("revert") => {
            DeployError::ContractConstruction(payload.to_string())
        }
        other => DeployError::Network(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use alloy::{
        rpc::json_rpc::ErrorPayload,
        transports::{RpcError, TransportErrorKind},
    };
    use alloy_primitives::{address, U256};

    use super::{rpc_error, ContractDeployer, RpcDeployer};
    use crate::{
        config::{DeployConfig, SignerSource},
        errors::DeployError,
        types::{DeploymentRequest, Network},
    };

    /// A configuration pointing at a port nothing listens on
    fn unreachable_config() -> DeployConfig {
        DeployConfig {
            network: Network::Hardhat,
            rpc_url: "http://127.0.0.1:1".parse().unwrap(),
            signer: SignerSource::NodeAccounts,
            request: DeploymentRequest {
                addresses_provider: address!("0x012bac54348c0e635dcac9d5fb99f06f24136c9a"),
                dex_aggregator: address!("0x1111111254eeb25477b68fb85ed929f73a960582"),
                protocol_fee: U256::from(30u64),
            },
            artifact_path: "FlashLoanArbitrage.json".into(),
            confirmations: 1,
            confirmation_timeout: Duration::from_secs(5),
            deployments_path: None,
        }
    }

    #[tokio::test]
    async fn test_unreachable_rpc() {
        let deployer = RpcDeployer::new(&unreachable_config());
        let err = deployer.signer_address().await.unwrap_err();
        assert!(matches!(err, DeployError::Network(_)));
    }

    #[test]
    fn test_rpc_error_classification() {
        let revert = ErrorPayload {
            code: 3,
            message: "execution reverted: invalid fee".into(),
            data: None,
        };
        let err = rpc_error(RpcError::ErrorResp(revert));
        assert!(matches!(err, DeployError::ContractConstruction(_)));

        let rejected = ErrorPayload {
            code: -32000,
            message: "insufficient funds for gas * price + value".into(),
            data: None,
        };
        let err = rpc_error(RpcError::ErrorResp(rejected));
        assert!(matches!(err, DeployError::Network(_)));

        let err = rpc_error(TransportErrorKind::backend_gone());
        assert!(matches!(err, DeployError::Network(_)));
    }
}

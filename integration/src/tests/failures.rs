//! Deployments that must fail without producing a contract

use eyre::{eyre, Result};
use scripts::{
    commands::deploy_contract, deployer::RpcDeployer, errors::DeployError, types::Network,
};

use crate::{constants::UNREACHABLE_RPC_URL, integration_test, test_inventory::TestArgs};

/// An unreachable endpoint fails with a network error
async fn test_unreachable_rpc(args: TestArgs) -> Result<()> {
    let mut config = args.local_key_config()?;
    config.rpc_url = UNREACHABLE_RPC_URL.parse()?;

    let deployer = RpcDeployer::new(&config);
    match deploy_contract(&config, &args.artifact, &deployer).await {
        Err(DeployError::Network(_)) => Ok(()),
        Err(e) => Err(eyre!("expected a network error, got {e}")),
        Ok(deployed) => Err(eyre!("unexpectedly deployed at {}", deployed.address)),
    }
}
integration_test!(test_unreachable_rpc);

/// A node on another chain than the profile's is refused before submission
async fn test_chain_id_mismatch(args: TestArgs) -> Result<()> {
    let mut config = args.local_key_config()?;
    config.network = Network::Sepolia;

    let deployer = RpcDeployer::new(&config);
    match deploy_contract(&config, &args.artifact, &deployer).await {
        Err(DeployError::ClientInitialization(_)) => Ok(()),
        Err(e) => Err(eyre!("expected a chain id mismatch, got {e}")),
        Ok(deployed) => Err(eyre!("unexpectedly deployed at {}", deployed.address)),
    }
}
integration_test!(test_chain_id_mismatch);

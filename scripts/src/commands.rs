//! Implementation of the deployment run

use std::path::Path;

use tracing::{debug, info};

use crate::{
    artifacts::ContractArtifact,
    config::DeployConfig,
    constants::{CONSTRUCTOR_PARAM_TYPES, CONTRACT_NAME},
    deployer::{ContractDeployer, RpcDeployer},
    errors::DeployError,
    types::DeployedContract,
    utils::write_deployed_address,
};

/// Deploy the contract described by the configuration over JSON-RPC.
///
/// The artifact is loaded and checked before the node is contacted.
pub async fn run(config: &DeployConfig) -> Result<DeployedContract, DeployError> {
    let artifact = load_artifact(&config.artifact_path)?;
    let deployer = RpcDeployer::new(config);

    deploy_contract(config, &artifact, &deployer).await
}

/// Load the contract's artifact and check its constructor signature
pub fn load_artifact(path: &Path) -> Result<ContractArtifact, DeployError> {
    let artifact = ContractArtifact::read(path)?;
    artifact.check_constructor(&CONSTRUCTOR_PARAM_TYPES)?;

    info!(artifact = %path.display(), bytecode_len = artifact.bytecode.len(), "artifact loaded");
    Ok(artifact)
}

/// Deploy the contract with the given deployer.
///
/// Makes exactly one deployment attempt and does not retry.
pub async fn deploy_contract<D: ContractDeployer>(
    config: &DeployConfig,
    artifact: &ContractArtifact,
    deployer: &D,
) -> Result<DeployedContract, DeployError> {
    let signer = deployer.signer_address().await?;

    let request = &config.request;
    info!(network = %config.network, %signer, "deploying {CONTRACT_NAME}");
    info!(
        addresses_provider = %request.addresses_provider,
        dex_aggregator = %request.dex_aggregator,
        protocol_fee = %request.protocol_fee,
        "constructor arguments"
    );

    let init_code = request.init_code(&artifact.bytecode);
    debug!(init_code_len = init_code.len(), "init code assembled");

    let deployed = deployer.deploy(signer, init_code).await?;
    info!(
        tx_hash = %deployed.transaction_hash,
        block = ?deployed.block_number,
        gas_used = deployed.gas_used,
        "deployment confirmed"
    );

    println!("{CONTRACT_NAME} contract successfully deployed on {}", deployed.address);

    if let Some(path) = &config.deployments_path {
        write_deployed_address(path, CONTRACT_NAME, deployed.address)?;
        info!(path = %path.display(), "deployment recorded");
    }

    Ok(deployed)
}

/// The console line reporting a failed run
pub fn failure_message(err: &DeployError) -> String {
    format!("{CONTRACT_NAME} deployment failed: {err}")
}

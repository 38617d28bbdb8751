//! Definitions of errors that can occur while deploying the arbitrage contract

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during a deployment run
#[derive(Debug)]
pub enum DeployError {
    /// A required configuration value is absent or malformed
    Configuration(String),
    /// Error reading or validating the compiled contract artifact
    ArtifactParsing(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// The RPC endpoint was unreachable or rejected a request
    Network(String),
    /// The contract rejected its constructor arguments
    ContractConstruction(String),
    /// The deployment was not confirmed before the deadline
    ConfirmationTimeout(String),
    /// The deployment transaction was dropped or its receipt is unusable
    ConfirmationFailure(String),
    /// Error reading or writing the deployments file
    WriteDeployments(String),
}

impl Display for DeployError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DeployError::Configuration(s) => write!(f, "configuration error: {}", s),
            DeployError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            DeployError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            DeployError::Network(s) => write!(f, "network error: {}", s),
            DeployError::ContractConstruction(s) => {
                write!(f, "contract construction failed: {}", s)
            }
            DeployError::ConfirmationTimeout(s) => {
                write!(f, "timed out waiting for confirmation: {}", s)
            }
            DeployError::ConfirmationFailure(s) => write!(f, "confirmation failed: {}", s),
            DeployError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
        }
    }
}

impl Error for DeployError {}

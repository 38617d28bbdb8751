//! Loading of compiled contract artifacts.
//!
//! Both Hardhat artifacts (`"bytecode": "0x…"`) and Foundry artifacts
//! (`"bytecode": { "object": "0x…" }`) are understood.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy::json_abi::JsonAbi;
use alloy_primitives::Bytes;
use serde::Deserialize;

use crate::{
    constants::{
        ARTIFACTS_SOURCES_SEGMENT, ARTIFACT_EXTENSION, LIBRARY_PLACEHOLDER_MARKER,
        SOLIDITY_EXTENSION,
    },
    errors::DeployError,
};

/// The creation bytecode as laid out by the different toolchains
#[derive(Deserialize)]
#[serde(untagged)]
enum ArtifactBytecode {
    /// A bare hex string
    Hex(String),
    /// An object wrapping the hex string
    Object {
        /// The hex-encoded bytecode
        object: String,
    },
}

impl ArtifactBytecode {
    /// The hex-encoded bytecode
    fn hex(&self) -> &str {
        match self {
            ArtifactBytecode::Hex(s) | ArtifactBytecode::Object { object: s } => s.as_str(),
        }
    }
}

/// The fields of an artifact file the deployment needs
#[derive(Deserialize)]
struct RawArtifact {
    /// The contract ABI
    abi: JsonAbi,
    /// The contract's creation bytecode
    bytecode: ArtifactBytecode,
}

/// A compiled contract, ready to be deployed
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    /// The contract ABI
    pub abi: JsonAbi,
    /// The contract's creation bytecode, without constructor arguments
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON contents
    pub fn from_json(json: &str) -> Result<Self, DeployError> {
        let raw: RawArtifact =
            serde_json::from_str(json).map_err(|e| DeployError::ArtifactParsing(e.to_string()))?;

        let hex = raw.bytecode.hex();
        if hex.contains(LIBRARY_PLACEHOLDER_MARKER) {
            return Err(DeployError::ArtifactParsing(
                "bytecode references unlinked libraries".to_string(),
            ));
        }

        let bytecode =
            Bytes::from_str(hex).map_err(|e| DeployError::ArtifactParsing(e.to_string()))?;
        if bytecode.is_empty() {
            return Err(DeployError::ArtifactParsing(
                "bytecode is empty, the contract may be abstract".to_string(),
            ));
        }

        Ok(ContractArtifact {
            abi: raw.abi,
            bytecode,
        })
    }

    /// Read and parse the artifact at the given path
    pub fn read(path: &Path) -> Result<Self, DeployError> {
        let json = fs::read_to_string(path).map_err(|e| {
            DeployError::ArtifactParsing(format!("could not read {}: {e}", path.display()))
        })?;

        Self::from_json(&json)
    }

    /// Check that the ABI's constructor takes exactly the given parameter types
    pub fn check_constructor(&self, expected: &[&str]) -> Result<(), DeployError> {
        let actual: Vec<&str> = self
            .abi
            .constructor
            .as_ref()
            .map(|c| c.inputs.iter().map(|p| p.ty.as_str()).collect())
            .unwrap_or_default();

        if actual != expected {
            return Err(DeployError::ArtifactParsing(format!(
                "constructor takes ({}), expected ({})",
                actual.join(","),
                expected.join(",")
            )));
        }

        Ok(())
    }
}

/// The path of a contract's artifact in a Hardhat artifacts tree, i.e.
/// `<root>/contracts/<Name>.sol/<Name>.json`
pub fn default_artifact_path(artifacts_root: &Path, contract_name: &str) -> PathBuf {
    artifacts_root
        .join(ARTIFACTS_SOURCES_SEGMENT)
        .join(format!("{contract_name}.{SOLIDITY_EXTENSION}"))
        .join(format!("{contract_name}.{ARTIFACT_EXTENSION}"))
}

//! Utilities for the deploy scripts.

use std::{fs, path::Path, str::FromStr};

use alloy_primitives::Address;
use serde_json::{Map, Value};

use crate::{constants::DEPLOYMENTS_KEY, errors::DeployError};

/// Read a JSON file
pub fn get_json_from_file(file_path: &Path) -> Result<Value, DeployError> {
    let file_contents = fs::read_to_string(file_path)
        .map_err(|e| DeployError::WriteDeployments(format!("{}: {e}", file_path.display())))?;

    serde_json::from_str(&file_contents)
        .map_err(|e| DeployError::WriteDeployments(format!("{}: {e}", file_path.display())))
}

/// Read a contract's address from a `deployments.json` file
pub fn parse_addr_from_deployments_file(
    file_path: &Path,
    contract_key: &str,
) -> Result<Address, DeployError> {
    let parsed_json = get_json_from_file(file_path)?;

    let addr = parsed_json[DEPLOYMENTS_KEY][contract_key].as_str().ok_or_else(|| {
        DeployError::WriteDeployments(format!("no address recorded for {contract_key}"))
    })?;

    Address::from_str(addr).map_err(|e| DeployError::WriteDeployments(e.to_string()))
}

/// Record a contract's address in a `deployments.json` file.
///
/// The file is created if it does not exist; addresses recorded for other
/// contracts are preserved.
pub fn write_deployed_address(
    file_path: &Path,
    contract_key: &str,
    address: Address,
) -> Result<(), DeployError> {
    let mut parsed_json = if file_path.exists() {
        get_json_from_file(file_path)?
    } else {
        Value::Object(Map::new())
    };

    let root = parsed_json.as_object_mut().ok_or_else(|| {
        DeployError::WriteDeployments(format!("{} is not a JSON object", file_path.display()))
    })?;
    let deployments = root
        .entry(DEPLOYMENTS_KEY)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| {
            DeployError::WriteDeployments(format!("`{DEPLOYMENTS_KEY}` is not a JSON object"))
        })?;
    deployments.insert(contract_key.to_string(), Value::String(format!("{address:#x}")));

    let contents = serde_json::to_string_pretty(&parsed_json)
        .map_err(|e| DeployError::WriteDeployments(e.to_string()))?;
    fs::write(file_path, contents).map_err(|e| DeployError::WriteDeployments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::{env, fs, path::PathBuf};

    use alloy_primitives::address;
    use serde_json::Value;

    use super::{get_json_from_file, parse_addr_from_deployments_file, write_deployed_address};
    use crate::errors::DeployError;

    /// A scratch path unique to this process and test
    fn scratch_path(name: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("deployments-{}-{name}.json", std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_write_creates_file() {
        let path = scratch_path("create");
        let addr = address!("0x5fbdb2315678afecb367f032d93f642f64180aa3");

        write_deployed_address(&path, "FlashLoanArbitrage", addr).unwrap();
        assert_eq!(parse_addr_from_deployments_file(&path, "FlashLoanArbitrage").unwrap(), addr);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_preserves_other_keys() {
        let path = scratch_path("merge");
        fs::write(
            &path,
            r#"{ "deployments": { "Other": "0x0000000000000000000000000000000000000001" }, "chain": "sepolia" }"#,
        )
        .unwrap();

        let first = address!("0x5fbdb2315678afecb367f032d93f642f64180aa3");
        let second = address!("0xe7f1725e7734ce288f8367e1bb143e90bb3f0512");
        write_deployed_address(&path, "FlashLoanArbitrage", first).unwrap();
        write_deployed_address(&path, "FlashLoanArbitrage", second).unwrap();

        let json = get_json_from_file(&path).unwrap();
        assert_eq!(json["chain"], Value::String("sepolia".into()));
        assert_eq!(
            json["deployments"]["Other"],
            Value::String("0x0000000000000000000000000000000000000001".into())
        );
        assert_eq!(parse_addr_from_deployments_file(&path, "FlashLoanArbitrage").unwrap(), second);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_malformed_file() {
        let path = scratch_path("malformed");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let addr = address!("0x5fbdb2315678afecb367f032d93f642f64180aa3");
        let err = write_deployed_address(&path, "FlashLoanArbitrage", addr).unwrap_err();
        assert!(matches!(err, DeployError::WriteDeployments(_)));

        let err = parse_addr_from_deployments_file(&path, "FlashLoanArbitrage").unwrap_err();
        assert!(matches!(err, DeployError::WriteDeployments(_)));

        fs::remove_file(&path).unwrap();
    }
}

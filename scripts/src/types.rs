//! Type definitions used throughout the scripts

use std::fmt::{self, Display};

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::SolConstructor;
use clap::ValueEnum;

use crate::{
    constants::{
        LOCAL_RPC_URL, MAINNET_ALCHEMY_URL, MAINNET_CHAIN_ID, SEPOLIA_ALCHEMY_URL,
        SEPOLIA_CHAIN_ID,
    },
    solidity::FlashLoanArbitrage,
};

/// The network profiles the contract can be deployed to
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Network {
    /// A local development node (Hardhat or Anvil)
    Hardhat,
    /// Ethereum mainnet, through Alchemy
    Mainnet,
    /// The Sepolia testnet, through Alchemy
    Sepolia,
}

impl Network {
    /// Whether the profile points at a local development node
    pub fn is_local(&self) -> bool {
        matches!(self, Network::Hardhat)
    }

    /// The default RPC URL of the profile.
    ///
    /// Remote profiles need an Alchemy API key, `None` is returned without one.
    pub fn default_rpc_url(&self, alchemy_key: Option<&str>) -> Option<String> {
        match self {
            Network::Hardhat => Some(LOCAL_RPC_URL.to_string()),
            Network::Mainnet => alchemy_key.map(|key| format!("{MAINNET_ALCHEMY_URL}{key}")),
            Network::Sepolia => alchemy_key.map(|key| format!("{SEPOLIA_ALCHEMY_URL}{key}")),
        }
    }

    /// The chain ID the profile's node must report, if fixed
    pub fn expected_chain_id(&self) -> Option<u64> {
        match self {
            Network::Hardhat => None,
            Network::Mainnet => Some(MAINNET_CHAIN_ID),
            Network::Sepolia => Some(SEPOLIA_CHAIN_ID),
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Hardhat => write!(f, "hardhat"),
            Network::Mainnet => write!(f, "mainnet"),
            Network::Sepolia => write!(f, "sepolia"),
        }
    }
}

/// The constructor arguments of a `FlashLoanArbitrage` deployment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentRequest {
    /// The Aave pool addresses provider
    pub addresses_provider: Address,
    /// The DEX aggregator the contract routes swaps through
    pub dex_aggregator: Address,
    /// The protocol fee, in basis points
    pub protocol_fee: U256,
}

impl DeploymentRequest {
    /// ABI-encode the constructor arguments as `(address, address, uint256)`
    pub fn constructor_args(&self) -> Vec<u8> {
        FlashLoanArbitrage::constructorCall {
            addressesProvider: self.addresses_provider,
            dexAggregator: self.dex_aggregator,
            protocolFee: self.protocol_fee,
        }
        .abi_encode()
    }

    /// The data of the contract-creation transaction: the creation bytecode
    /// followed by the encoded constructor arguments
    pub fn init_code(&self, bytecode: &Bytes) -> Bytes {
        let mut code = bytecode.to_vec();
        code.extend(self.constructor_args());
        code.into()
    }
}

/// A confirmed contract deployment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployedContract {
    /// The address of the deployed contract
    pub address: Address,
    /// The hash of the contract-creation transaction
    pub transaction_hash: B256,
    /// The account that signed the deployment
    pub deployer: Address,
    /// The block in which the deployment was included
    pub block_number: Option<u64>,
    /// The gas consumed by the deployment
    pub gas_used: u64,
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, bytes, Address, U256};

    use super::{DeploymentRequest, Network};

    /// A request with distinguishable arguments
    fn request() -> DeploymentRequest {
        DeploymentRequest {
            addresses_provider: address!("0x2f39d218133AFaB8F2B819B1066c7E434Ad94E9e"),
            dex_aggregator: address!("0x1111111254EEB25477B68fb85Ed929f73A960582"),
            protocol_fee: U256::from(30u64),
        }
    }

    #[test]
    fn test_constructor_args_layout() {
        let req = request();
        let args = req.constructor_args();
        assert_eq!(args.len(), 96);

        // Addresses are left-padded to a full word
        assert!(args[..12].iter().all(|b| *b == 0));
        assert_eq!(Address::from_slice(&args[12..32]), req.addresses_provider);
        assert!(args[32..44].iter().all(|b| *b == 0));
        assert_eq!(Address::from_slice(&args[44..64]), req.dex_aggregator);
        assert_eq!(U256::from_be_slice(&args[64..96]), req.protocol_fee);
    }

    #[test]
    fn test_init_code_appends_args() {
        let req = request();
        let bytecode = bytes!("6080604052");
        let init_code = req.init_code(&bytecode);

        assert_eq!(&init_code[..5], bytecode.as_ref());
        assert_eq!(&init_code[5..], req.constructor_args().as_slice());
    }

    #[test]
    fn test_max_fee_encodes() {
        let req = DeploymentRequest {
            protocol_fee: U256::MAX,
            ..request()
        };
        let args = req.constructor_args();
        assert!(args[64..].iter().all(|b| *b == 0xff));
    }

    #[test]
    fn test_network_profiles() {
        assert_eq!(Network::Hardhat.default_rpc_url(None).unwrap(), "http://127.0.0.1:8545");
        assert!(Network::Sepolia.default_rpc_url(None).is_none());
        assert_eq!(
            Network::Mainnet.default_rpc_url(Some("abc")).unwrap(),
            "https://eth-mainnet.g.alchemy.com/v2/abc"
        );
        assert_eq!(Network::Sepolia.expected_chain_id(), Some(11155111));
        assert_eq!(Network::Hardhat.expected_chain_id(), None);
        assert_eq!(Network::Sepolia.to_string(), "sepolia");
    }
}

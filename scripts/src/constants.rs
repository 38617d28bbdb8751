//! Constants used in the deploy scripts

/// The name of the contract deployed by the runner
pub const CONTRACT_NAME: &str = "FlashLoanArbitrage";

/// The Solidity types of the contract's constructor parameters, in order
pub const CONSTRUCTOR_PARAM_TYPES: [&str; 3] = ["address", "address", "uint256"];

// -------------------------
// | Environment Variables |
// -------------------------

/// The environment variable holding the Aave pool addresses provider
pub const ADDRESSES_PROVIDER_ENV_VAR: &str = "AAVE_POOL_ADDRESSES_PROVIDER";

/// The environment variable holding the DEX aggregator address
pub const DEX_AGGREGATOR_ENV_VAR: &str = "DEX_AGGREGATOR";

/// The environment variable holding the protocol fee, in decimal
pub const PROTOCOL_FEE_ENV_VAR: &str = "PROTOCOL_FEE";

/// The environment variable holding the Alchemy API key
pub const ALCHEMY_KEY_ENV_VAR: &str = "ALCHEMY_KEY";

/// The environment variable holding the deployer's private key
pub const PRIVATE_KEY_ENV_VAR: &str = "P_KEY";

// ------------
// | Networks |
// ------------

/// The RPC URL of a local development node
pub const LOCAL_RPC_URL: &str = "http://127.0.0.1:8545";

/// The Alchemy RPC URL prefix for Ethereum mainnet
pub const MAINNET_ALCHEMY_URL: &str = "https://eth-mainnet.g.alchemy.com/v2/";

/// The Alchemy RPC URL prefix for Sepolia
pub const SEPOLIA_ALCHEMY_URL: &str = "https://eth-sepolia.g.alchemy.com/v2/";

/// The chain ID of Ethereum mainnet
pub const MAINNET_CHAIN_ID: u64 = 1;

/// The chain ID of Sepolia
pub const SEPOLIA_CHAIN_ID: u64 = 11155111;

// ---------------
// | Deployments |
// ---------------

/// The default root of the compiled artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The directory under the artifacts root mirroring the contract sources
pub const ARTIFACTS_SOURCES_SEGMENT: &str = "contracts";

/// The extension of a Solidity source file
pub const SOLIDITY_EXTENSION: &str = "sol";

/// The extension of an artifact file
pub const ARTIFACT_EXTENSION: &str = "json";

/// The marker the compiler leaves in bytecode for unlinked libraries
pub const LIBRARY_PLACEHOLDER_MARKER: &str = "__";

/// The number of confirmations to wait for the contract deployment transaction
pub const DEFAULT_NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The number of seconds to wait for the deployment to be confirmed
pub const DEFAULT_CONFIRMATION_TIMEOUT_SECS: u64 = 300;

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

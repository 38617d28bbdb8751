//! Constants used in the integration tests

/// The default hostport that the devnet node runs on
pub(crate) const DEFAULT_DEVNET_HOSTPORT: &str = "http://127.0.0.1:8545";

/// The default private key that the devnet is seeded with
pub(crate) const DEFAULT_DEVNET_PKEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// An RPC URL nothing listens on
pub(crate) const UNREACHABLE_RPC_URL: &str = "http://127.0.0.1:1";

/// The seconds to wait for a devnet deployment to be confirmed
pub(crate) const DEVNET_CONFIRMATION_TIMEOUT_SECS: u64 = 30;

/// The protocol fee passed to test deployments
pub(crate) const TEST_PROTOCOL_FEE: u64 = 30;

/// The addresses provider passed to test deployments
pub(crate) const TEST_ADDRESSES_PROVIDER: &str = "0x012bac54348c0e635dcac9d5fb99f06f24136c9a";

/// The DEX aggregator passed to test deployments
pub(crate) const TEST_DEX_AGGREGATOR: &str = "0x1111111254eeb25477b68fb85ed929f73a960582";

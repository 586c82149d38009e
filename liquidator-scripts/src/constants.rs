//! Constants used in the deploy script

/// The name of the contract deployed by default
pub const DEFAULT_CONTRACT_NAME: &str = "AnchorFlashLiquidator";

/// The network name the deployment is expected to target.
///
/// Only used for a diagnostic log line, never to gate the deployment
pub const DEFAULT_EXPECTED_NETWORK: &str = "kovan";

/// The default RPC URL, a local Hardhat / Anvil node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The default directory in which compiled artifacts are found
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// Numerator of the multiplier applied to the network gas price (1.05)
pub const GAS_PRICE_MULTIPLIER_NUM: u128 = 105;

/// Denominator of the multiplier applied to the network gas price
pub const GAS_PRICE_MULTIPLIER_DENOM: u128 = 100;

/// The name of the network reported for chain IDs outside the known table
pub const UNKNOWN_NETWORK_NAME: &str = "unknown";

/// Well-known chain IDs and their network names
pub const KNOWN_NETWORKS: [(u64, &str); 12] = [
    (1, "homestead"),
    (3, "ropsten"),
    (4, "rinkeby"),
    (5, "goerli"),
    (10, "optimism"),
    (42, "kovan"),
    (56, "bnb"),
    (100, "xdai"),
    (137, "matic"),
    (42161, "arbitrum"),
    (80001, "maticmum"),
    (11155111, "sepolia"),
];

/// The extension of a compiled contract artifact
pub const ARTIFACT_EXTENSION: &str = "json";

/// The directory in which Hardhat keeps full compiler inputs & outputs,
/// skipped when searching for artifacts
pub const BUILD_INFO_DIR: &str = "build-info";

/// The marker opening an unresolved library placeholder in unlinked bytecode
pub const LINK_PLACEHOLDER_MARKER: &str = "__$";

/// The log filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "info";

//! Type definitions used throughout the deploy script

use std::fmt::{self, Display};

use alloy::primitives::{Address, TxHash};

use crate::constants::{
    GAS_PRICE_MULTIPLIER_DENOM, GAS_PRICE_MULTIPLIER_NUM, KNOWN_NETWORKS, UNKNOWN_NETWORK_NAME,
};

/// The account deploying the contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signer {
    /// The address of the deployer
    pub address: Address,
}

/// A snapshot of the network the client is connected to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    /// The chain ID reported by the node
    pub chain_id: u64,
    /// The well-known name of the network, or `"unknown"`
    pub name: String,
}

impl NetworkInfo {
    /// Build the network info for the given chain ID, naming it from the
    /// table of well-known networks
    pub fn from_chain_id(chain_id: u64) -> Self {
        let name = KNOWN_NETWORKS
            .iter()
            .find_map(|(id, name)| (*id == chain_id).then_some(*name))
            .unwrap_or(UNKNOWN_NETWORK_NAME)
            .to_string();

        Self { chain_id, name }
    }

    /// Whether this is the named network. Exact, case-sensitive match
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

/// The gas price offered for the deployment transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasQuote {
    /// The gas price reported by the network, in wei
    pub network_price: u128,
    /// The price offered for the deployment, in wei
    pub offer_price: u128,
}

impl GasQuote {
    /// Scale the network gas price by 1.05, truncating to a whole number of wei.
    ///
    /// The quotient and remainder are scaled separately so that the result is
    /// exact for every input; it saturates at `u128::MAX` instead of overflowing
    pub fn from_network_price(network_price: u128) -> Self {
        let whole =
            (network_price / GAS_PRICE_MULTIPLIER_DENOM).saturating_mul(GAS_PRICE_MULTIPLIER_NUM);
        let frac = (network_price % GAS_PRICE_MULTIPLIER_DENOM) * GAS_PRICE_MULTIPLIER_NUM
            / GAS_PRICE_MULTIPLIER_DENOM;

        Self {
            network_price,
            offer_price: whole.saturating_add(frac),
        }
    }
}

/// A contract whose deployment transaction has been confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployedContract {
    /// The address of the deployed contract
    pub address: Address,
    /// The hash of the deployment transaction
    pub tx_hash: TxHash,
}

/// The stages of a deployment run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStage {
    /// Nothing has been queried yet
    Start,
    /// The deployer and its balance are known
    SignerResolved,
    /// The network has been identified
    NetworkResolved,
    /// The offer gas price has been computed
    GasPriced,
    /// The deployment transaction has been submitted
    Deploying,
    /// The deployment transaction has been confirmed
    Deployed,
    /// A step failed, the run is over
    Failed,
}

impl Display for DeployStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployStage::Start => write!(f, "start"),
            DeployStage::SignerResolved => write!(f, "signer-resolved"),
            DeployStage::NetworkResolved => write!(f, "network-resolved"),
            DeployStage::GasPriced => write!(f, "gas-priced"),
            DeployStage::Deploying => write!(f, "deploying"),
            DeployStage::Deployed => write!(f, "deployed"),
            DeployStage::Failed => write!(f, "failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GasQuote, NetworkInfo};

    #[test]
    fn test_offer_price_one_gwei() {
        let quote = GasQuote::from_network_price(1_000_000_000);
        assert_eq!(quote.network_price, 1_000_000_000);
        assert_eq!(quote.offer_price, 1_050_000_000);
    }

    #[test]
    fn test_offer_price_truncates() {
        // 19 * 1.05 = 19.95
        assert_eq!(GasQuote::from_network_price(19).offer_price, 19);
        // 101 * 1.05 = 106.05
        assert_eq!(GasQuote::from_network_price(101).offer_price, 106);
        // 1_234_567_891 * 1.05 = 1_296_296_285.55
        assert_eq!(
            GasQuote::from_network_price(1_234_567_891).offer_price,
            1_296_296_285
        );
        assert_eq!(GasQuote::from_network_price(0).offer_price, 0);
    }

    #[test]
    fn test_offer_price_never_below_network_price() {
        let samples = [0, 1, 7, 99, 100, 12_345, 30_000_000_000, u64::MAX as u128];
        for price in samples {
            let quote = GasQuote::from_network_price(price);
            assert!(quote.offer_price >= price);
            assert_eq!(quote.offer_price, price * 105 / 100);
        }
    }

    #[test]
    fn test_offer_price_saturates() {
        let quote = GasQuote::from_network_price(u128::MAX);
        assert_eq!(quote.offer_price, u128::MAX);
    }

    #[test]
    fn test_network_names() {
        assert_eq!(NetworkInfo::from_chain_id(42).name, "kovan");
        assert_eq!(NetworkInfo::from_chain_id(1).name, "homestead");
        assert_eq!(NetworkInfo::from_chain_id(31337).name, "unknown");
    }

    #[test]
    fn test_network_name_match_is_exact() {
        let kovan = NetworkInfo::from_chain_id(42);
        assert!(kovan.is_named("kovan"));
        assert!(!kovan.is_named("Kovan"));
        assert!(!kovan.is_named("kovan-test"));
        assert!(!kovan.is_named(""));
    }
}

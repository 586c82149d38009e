//! The ledger client consumed by the deploy script, and its JSON-RPC implementation

use std::str::FromStr;

use alloy::{
    network::{Ethereum, ReceiptResponse, TransactionBuilder},
    primitives::{Address, Bytes, TxHash, U256},
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
    rpc::types::{TransactionReceipt, TransactionRequest},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use tracing::debug;

use crate::{
    errors::DeployError,
    types::{DeployedContract, NetworkInfo, Signer},
};

/// The operations the deploy script needs from a ledger network.
///
/// Implementations own both the signing identity and the read-only provider
#[allow(async_fn_in_trait)]
pub trait LedgerClient {
    /// A deployment transaction that has been submitted but not yet confirmed
    type Pending;

    /// The identity that signs the deployment
    async fn signer(&self) -> Result<Signer, DeployError>;

    /// The balance of the given address, in wei
    async fn balance(&self, address: Address) -> Result<U256, DeployError>;

    /// The network the client is connected to
    async fn network(&self) -> Result<NetworkInfo, DeployError>;

    /// The current gas price, in wei
    async fn gas_price(&self) -> Result<u128, DeployError>;

    /// Submit a contract creation transaction with the given bytecode & gas price
    async fn submit_deployment(
        &self,
        bytecode: Bytes,
        gas_price: u128,
    ) -> Result<Self::Pending, DeployError>;

    /// Wait for a submitted deployment to be mined, returning the deployed contract
    async fn await_deployment(&self, pending: Self::Pending)
        -> Result<DeployedContract, DeployError>;
}

/// A ledger client speaking JSON-RPC over HTTP, signing with a local private key
#[derive(Clone)]
pub struct RpcClient {
    /// The provider, with the deployer's wallet attached
    provider: DynProvider,
    /// The deployer's address
    signer: Address,
    /// The number of confirmations to wait for on deployment
    confirmations: u64,
}

/// Sets up the client with which to deploy the contract, from the deployer's
/// private key and the RPC url of the network
pub fn setup_client(
    priv_key: &str,
    rpc_url: &str,
    confirmations: u64,
) -> Result<RpcClient, DeployError> {
    let wallet = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| DeployError::configuration("invalid private key").with_source(e))?;
    let signer = wallet.address();

    let url = Url::parse(rpc_url).map_err(|e| {
        DeployError::configuration(format!("invalid RPC url `{}`", rpc_url)).with_source(e)
    })?;
    let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);

    Ok(RpcClient {
        provider: DynProvider::new(provider),
        signer,
        confirmations,
    })
}

impl LedgerClient for RpcClient {
    type Pending = PendingTransactionBuilder<Ethereum>;

    async fn signer(&self) -> Result<Signer, DeployError> {
        Ok(Signer {
            address: self.signer,
        })
    }

    async fn balance(&self, address: Address) -> Result<U256, DeployError> {
        self.provider
            .get_balance(address)
            .await
            .map_err(|e| {
                DeployError::network(format!("failed to query the balance of {}", address))
                    .with_source(e)
            })
    }

    async fn network(&self) -> Result<NetworkInfo, DeployError> {
        let chain_id = self
            .provider
            .get_chain_id()
            .await
            .map_err(|e| DeployError::network("failed to query the chain ID").with_source(e))?;

        Ok(NetworkInfo::from_chain_id(chain_id))
    }

    async fn gas_price(&self) -> Result<u128, DeployError> {
        self.provider
            .get_gas_price()
            .await
            .map_err(|e| DeployError::network("failed to query the gas price").with_source(e))
    }

    async fn submit_deployment(
        &self,
        bytecode: Bytes,
        gas_price: u128,
    ) -> Result<Self::Pending, DeployError> {
        let tx = TransactionRequest::default()
            .with_from(self.signer)
            .with_deploy_code(bytecode)
            .with_gas_price(gas_price);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| {
                DeployError::transaction("failed to submit the deployment").with_source(e)
            })?;
        debug!("Deployment transaction sent: {:#x}", pending.tx_hash());

        Ok(pending)
    }

    async fn await_deployment(
        &self,
        pending: Self::Pending,
    ) -> Result<DeployedContract, DeployError> {
        let tx_hash: TxHash = *pending.tx_hash();
        let receipt = pending
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await
            .map_err(|e| {
                DeployError::transaction(format!("failed to confirm deployment {:#x}", tx_hash))
                    .with_source(e)
            })?;

        deployed_contract(&receipt)
    }
}

/// Extract the deployed contract from the receipt of its deployment transaction.
///
/// A reverted transaction, or one that created no contract, is an error
pub fn deployed_contract(receipt: &TransactionReceipt) -> Result<DeployedContract, DeployError> {
    let tx_hash = ReceiptResponse::transaction_hash(receipt);
    if !ReceiptResponse::status(receipt) {
        return Err(DeployError::transaction(format!(
            "deployment transaction {:#x} reverted",
            tx_hash
        )));
    }

    let address = ReceiptResponse::contract_address(receipt).ok_or_else(|| {
        DeployError::transaction(format!(
            "receipt for {:#x} has no contract address",
            tx_hash
        ))
    })?;

    Ok(DeployedContract { address, tx_hash })
}

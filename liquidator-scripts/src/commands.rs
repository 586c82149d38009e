//! Implementation of the deploy script

use tracing::{debug, info};

use crate::{
    artifact::ArtifactSource,
    client::LedgerClient,
    errors::DeployError,
    types::{DeployStage, DeployedContract, GasQuote},
};

/// Everything a deployment run needs, built by the caller
pub struct DeployContext<C, A> {
    /// The ledger client, holding the deployer's signer and the network provider
    pub client: C,
    /// Where the contract's compiled artifact is found
    pub artifacts: A,
    /// The name of the contract to deploy
    pub contract_name: String,
    /// The network the deployment is expected to target, for diagnostics only
    pub expected_network: String,
}

/// Deploy the contract named in the context, with no constructor arguments,
/// at 1.05x the network gas price.
///
/// Every step runs strictly after the previous one completes. The first
/// failure aborts the run; in particular, the artifact is only resolved and
/// the deployment only submitted once all network reads have succeeded.
pub async fn deploy_contract<C, A>(
    ctx: &DeployContext<C, A>,
) -> Result<DeployedContract, DeployError>
where
    C: LedgerClient,
    A: ArtifactSource,
{
    let mut stage = DeployStage::Start;
    let res = run_deployment(ctx, &mut stage).await;
    if res.is_err() {
        advance(&mut stage, DeployStage::Failed);
    }

    res
}

/// Run the deployment steps in order, recording the last stage reached
async fn run_deployment<C, A>(
    ctx: &DeployContext<C, A>,
    stage: &mut DeployStage,
) -> Result<DeployedContract, DeployError>
where
    C: LedgerClient,
    A: ArtifactSource,
{
    let client = &ctx.client;

    let deployer = client.signer().await?;
    info!("Deployer address: {}", deployer.address);
    let balance = client.balance(deployer.address).await?;
    info!("Deployer balance: {}", balance);
    advance(stage, DeployStage::SignerResolved);

    let network = client.network().await?;
    info!(
        "Network: {} is {}",
        network.name,
        network.is_named(&ctx.expected_network)
    );
    advance(stage, DeployStage::NetworkResolved);

    let quote = GasQuote::from_network_price(client.gas_price().await?);
    info!("Gas Price balance: {}", quote.offer_price);
    advance(stage, DeployStage::GasPriced);

    let factory = ctx.artifacts.contract_factory(&ctx.contract_name)?;
    let pending = client
        .submit_deployment(factory.bytecode, quote.offer_price)
        .await?;
    advance(stage, DeployStage::Deploying);

    let deployed = client.await_deployment(pending).await?;
    advance(stage, DeployStage::Deployed);
    info!("{} address: {}", factory.name, deployed.address);

    Ok(deployed)
}

/// Move the run to the next stage
fn advance(stage: &mut DeployStage, next: DeployStage) {
    debug!("Deployment stage: {} -> {}", stage, next);
    *stage = next;
}

use std::io::{self, IsTerminal};

use eyre::Result;
use liquidator_scripts::{
    artifact::HardhatArtifacts,
    cli::{parse_cli_from, Cli},
    client::setup_client,
    commands::{deploy_contract, DeployContext},
    logging::{env_filter, log_subscriber},
};
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        priv_key,
        rpc_url,
        artifacts,
        contract,
        expected_network,
        confirmations,
    } = parse_cli_from(std::env::args_os())?;

    log_subscriber(env_filter(), io::stdout, io::stdout().is_terminal()).try_init()?;

    let ctx = DeployContext {
        client: setup_client(&priv_key, &rpc_url, confirmations)?,
        artifacts: HardhatArtifacts::new(artifacts),
        contract_name: contract,
        expected_network,
    };

    deploy_contract(&ctx).await?;
    Ok(())
}

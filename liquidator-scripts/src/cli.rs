//! Definitions of CLI arguments for the deploy script

use std::{ffi::OsString, path::PathBuf};

use clap::{error::ErrorKind, Parser};

use crate::{
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_CONTRACT_NAME, DEFAULT_EXPECTED_NETWORK, DEFAULT_RPC_URL,
        NUM_DEPLOY_CONFIRMATIONS,
    },
    errors::DeployError,
};

/// Deploy the `AnchorFlashLiquidator` contract to an EVM chain
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(long = "pkey", env = "PKEY", hide_env_values = true)]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// Name of the contract to deploy
    #[arg(short, long, env = "CONTRACT_NAME", default_value = DEFAULT_CONTRACT_NAME)]
    pub contract: String,

    /// Network the deployment is expected to target, only reported in the logs
    #[arg(long, env = "EXPECTED_NETWORK", default_value = DEFAULT_EXPECTED_NETWORK)]
    pub expected_network: String,

    /// Number of confirmations to wait for on the deployment transaction
    #[arg(long, env = "CONFIRMATIONS", default_value_t = NUM_DEPLOY_CONFIRMATIONS)]
    pub confirmations: u64,
}

/// Parse the CLI from the given arguments.
///
/// Help and version requests are printed and exit successfully. Any other
/// parse failure is returned as a configuration error.
pub fn parse_cli_from<I, T>(args: I) -> Result<Cli, DeployError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
        _ => DeployError::configuration("invalid command-line arguments").with_source(e),
    })
}

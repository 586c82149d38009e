//! Log output configuration for the deploy script

use tracing::Subscriber;
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};

use crate::constants::DEFAULT_LOG_FILTER;

/// The log filter taken from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Build the subscriber the script logs through.
///
/// ANSI colours are only emitted when `ansi` is set, so that redirected
/// output stays plain text
pub fn log_subscriber<W>(
    filter: EnvFilter,
    writer: W,
    ansi: bool,
) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .finish()
}

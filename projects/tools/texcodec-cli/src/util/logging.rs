use crate::error::CliError;
use tracing_subscriber::EnvFilter;

/// Sends library `log` records and CLI `tracing` events to stderr.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or
/// everything down to debug with `--verbose`.
pub fn init_logging(verbose: bool) -> Result<(), CliError> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

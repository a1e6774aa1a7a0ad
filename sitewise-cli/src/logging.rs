//! Subscriber setup rendering the library crates' `log` records.

use tracing_subscriber::EnvFilter;

use crate::CliError;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install the global fmt subscriber on stderr.
///
/// `RUST_LOG` wins over `level`, which wins over `DEFAULT_LOG_LEVEL`.
/// A subscriber that is already installed is left in place.
pub(crate) fn init(level: Option<&str>) -> Result<(), CliError> {
    let filter = build_filter(level)?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        log::debug!("tracing subscriber already installed");
    }
    Ok(())
}

fn build_filter(level: Option<&str>) -> Result<EnvFilter, CliError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = level.unwrap_or(DEFAULT_LOG_LEVEL);
    EnvFilter::try_new(directive).map_err(|err| CliError::LogFilter {
        directive: directive.to_owned(),
        message: err.to_string(),
    })
}

//! Logging bootstrap for binaries.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::PlatformError;

/// Build the filter: `RUST_LOG` when set, otherwise the configured level.
///
/// # Errors
///
/// Returns [`PlatformError::Logging`] if neither source is a valid directive.
pub fn filter(config: &LoggingConfig) -> Result<EnvFilter, PlatformError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| PlatformError::Logging(e.to_string()))
}

/// Install the global subscriber. Records go to stderr so stdout stays
/// reserved for command output.
///
/// # Errors
///
/// Returns [`PlatformError::Logging`] if the filter is invalid or a global
/// subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), PlatformError> {
    let registry = tracing_subscriber::registry().with(filter(config)?);

    let installed = match config.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    installed.map_err(|e| PlatformError::Logging(e.to_string()))
}

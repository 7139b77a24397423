use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while bootstrapping the platform.
///
/// Missing build metadata is not among them: it degrades to "unknown".
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

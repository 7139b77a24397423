//! Error types for credential encoding.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// No encoder is registered under the requested name.
    #[error("Algorithm must be one of {known}")]
    UnknownAlgorithm { name: String, known: String },
}

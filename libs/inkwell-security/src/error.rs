//! Error types for building authentications.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthenticationError {
    /// An authentication must name who is calling.
    #[error("principal must not be empty")]
    EmptyPrincipal,
}

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Credential encoders
//!
//! Offline tooling for precomputing the stored form of a credential:
//!
//! - [`CredentialEncoder`] - one-way transform, raw credential plus salt to stored form
//! - [`EncoderRegistry`] - encoders indexed by name
//! - [`Algorithm`] - the built-in encoders
//!
//! `md5` and `sha` reproduce digests written by older releases and exist only so
//! those stores stay readable. New stores should use `sha256`.
//!
//! ```
//! use inkwell_credentials::EncoderRegistry;
//!
//! let registry = EncoderRegistry::with_builtin();
//! assert_eq!(registry.encode("plaintext", "alice", "secret").unwrap(), "secret");
//! ```

pub mod encoder;
pub mod error;
pub mod registry;

pub use encoder::{CredentialEncoder, DigestEncoder, PlaintextEncoder};
pub use error::CredentialError;
pub use registry::{Algorithm, EncoderRegistry};

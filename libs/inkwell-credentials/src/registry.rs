//! Name-indexed encoder registry.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::encoder::{CredentialEncoder, DigestEncoder, PlaintextEncoder};
use crate::error::CredentialError;

/// Built-in encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Plaintext,
    /// Legacy, for existing stores only.
    Md5,
    /// Legacy SHA-1, for existing stores only.
    Sha,
    Sha256,
}

impl Algorithm {
    pub const ALL: [Self; 4] = [Self::Md5, Self::Plaintext, Self::Sha, Self::Sha256];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plaintext => "plaintext",
            Self::Md5 => "md5",
            Self::Sha => "sha",
            Self::Sha256 => "sha256",
        }
    }

    #[must_use]
    pub fn encoder(self) -> Arc<dyn CredentialEncoder> {
        match self {
            Self::Plaintext => Arc::new(PlaintextEncoder),
            Self::Md5 => Arc::new(DigestEncoder::md5()),
            Self::Sha => Arc::new(DigestEncoder::sha1()),
            Self::Sha256 => Arc::new(DigestEncoder::sha256()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| CredentialError::UnknownAlgorithm {
                name: s.to_owned(),
                known: Self::ALL.map(Self::as_str).join(", "),
            })
    }
}

/// Registry of encoders keyed by name.
///
/// Call sites look encoders up by name, so additional formats can be
/// registered without touching them.
#[derive(Clone, Default)]
pub struct EncoderRegistry {
    encoders: BTreeMap<&'static str, Arc<dyn CredentialEncoder>>,
}

impl fmt::Debug for EncoderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncoderRegistry")
            .field("encoders", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl EncoderRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every [`Algorithm`].
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for algorithm in Algorithm::ALL {
            registry.register(algorithm.encoder());
        }
        registry
    }

    /// Register `encoder` under its own name, replacing any previous one.
    pub fn register(&mut self, encoder: Arc<dyn CredentialEncoder>) {
        let name = encoder.name();
        if self.encoders.insert(name, encoder).is_some() {
            tracing::debug!(encoder = name, "replaced registered credential encoder");
        }
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.encoders.keys().copied()
    }

    /// Look up an encoder by name.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::UnknownAlgorithm`] if nothing is registered under `name`.
    pub fn get(&self, name: &str) -> Result<&dyn CredentialEncoder, CredentialError> {
        self.encoders
            .get(name)
            .map(|encoder| &**encoder)
            .ok_or_else(|| CredentialError::UnknownAlgorithm {
                name: name.to_owned(),
                known: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    /// Encode `password` with the named algorithm, using `username` as salt.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::UnknownAlgorithm`] for an unregistered name.
    pub fn encode(
        &self,
        algorithm: &str,
        username: &str,
        password: &str,
    ) -> Result<String, CredentialError> {
        let encoder = self.get(algorithm)?;
        tracing::debug!(encoder = encoder.name(), username, "encoding credential");
        Ok(encoder.encode(password, Some(username)))
    }
}

//! Built-in credential encoders.

use std::borrow::Cow;

use sha1::Digest as _;

/// One-way transform from a raw credential (plus optional salt) to its stored form.
pub trait CredentialEncoder: Send + Sync {
    /// Registry key of this encoder.
    fn name(&self) -> &'static str;

    /// Encode `raw`, mixing in `salt` where the algorithm uses one.
    fn encode(&self, raw: &str, salt: Option<&str>) -> String;

    /// Whether `raw` encodes to `encoded` under the same salt.
    fn matches(&self, encoded: &str, raw: &str, salt: Option<&str>) -> bool {
        self.encode(raw, salt) == encoded
    }
}

/// Stores the credential as given. The salt is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextEncoder;

impl CredentialEncoder for PlaintextEncoder {
    fn name(&self) -> &'static str {
        "plaintext"
    }

    fn encode(&self, raw: &str, _salt: Option<&str>) -> String {
        raw.to_owned()
    }
}

/// Hex-encoded digest of `raw{salt}` (or of `raw` alone when there is no salt).
///
/// This is the historical stored format; the hash function is pluggable.
/// The salt is merged verbatim, so a salt containing braces still hashes
/// exactly as older releases stored it.
#[derive(Clone, Copy)]
pub struct DigestEncoder {
    name: &'static str,
    digest: fn(&[u8]) -> Vec<u8>,
}

impl std::fmt::Debug for DigestEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigestEncoder")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl DigestEncoder {
    #[must_use]
    pub const fn new(name: &'static str, digest: fn(&[u8]) -> Vec<u8>) -> Self {
        Self { name, digest }
    }

    /// Legacy MD5 digest. Kept for stores written by older releases.
    #[must_use]
    pub const fn md5() -> Self {
        Self::new("md5", md5_digest)
    }

    /// Legacy SHA-1 digest. Kept for stores written by older releases.
    #[must_use]
    pub const fn sha1() -> Self {
        Self::new("sha", sha1_digest)
    }

    #[must_use]
    pub const fn sha256() -> Self {
        Self::new("sha256", sha256_digest)
    }
}

impl CredentialEncoder for DigestEncoder {
    fn name(&self) -> &'static str {
        self.name
    }

    fn encode(&self, raw: &str, salt: Option<&str>) -> String {
        hex::encode((self.digest)(merge_with_salt(raw, salt).as_bytes()))
    }
}

fn md5_digest(data: &[u8]) -> Vec<u8> {
    md5::compute(data).0.to_vec()
}

fn sha1_digest(data: &[u8]) -> Vec<u8> {
    sha1::Sha1::digest(data).to_vec()
}

fn sha256_digest(data: &[u8]) -> Vec<u8> {
    sha2::Sha256::digest(data).to_vec()
}

fn merge_with_salt<'a>(raw: &'a str, salt: Option<&str>) -> Cow<'a, str> {
    match salt {
        None | Some("") => Cow::Borrowed(raw),
        Some(salt) => Cow::Owned(format!("{raw}{{{salt}}}")),
    }
}

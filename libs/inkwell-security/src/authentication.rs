use std::collections::BTreeSet;

use secrecy::SecretString;

use crate::error::AuthenticationError;

/// `Authentication` describes who is making a call and which roles were granted.
///
/// Produced by the login mechanism (or synthesized by test fixtures) and installed
/// into an [`AuthenticationContext`](crate::AuthenticationContext). It is replaced
/// wholesale when the identity changes, never mutated in place.
///
/// The principal is never empty, whether built or deserialized.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "AuthenticationRepr")]
pub struct Authentication {
    /// Principal identifier, typically the username.
    principal: String,
    /// Granted role labels. Order carries no meaning.
    #[serde(default)]
    roles: BTreeSet<String>,
    /// Credentials presented at login, if the producer kept them.
    /// Never serialized; `SecretString` redacts them in `Debug`.
    #[serde(skip)]
    credentials: Option<SecretString>,
}

impl Authentication {
    /// Create a new `Authentication` builder for the given principal
    #[must_use]
    pub fn builder(principal: impl Into<String>) -> AuthenticationBuilder {
        AuthenticationBuilder {
            principal: principal.into(),
            roles: BTreeSet::new(),
            credentials: None,
        }
    }

    /// Shorthand for an authentication with the given roles and no credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError::EmptyPrincipal`] if `principal` is empty.
    pub fn new<R, I>(principal: impl Into<String>, roles: I) -> Result<Self, AuthenticationError>
    where
        R: Into<String>,
        I: IntoIterator<Item = R>,
    {
        Self::builder(principal).roles(roles).build()
    }

    /// Get the principal identifier
    #[must_use]
    pub fn principal(&self) -> &str {
        &self.principal
    }

    /// Get the granted role labels
    #[must_use]
    pub fn roles(&self) -> &BTreeSet<String> {
        &self.roles
    }

    /// Whether `role` was granted. Exact match, no hierarchy.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Get the credentials presented at login, if retained.
    #[must_use]
    pub fn credentials(&self) -> Option<&SecretString> {
        self.credentials.as_ref()
    }
}

pub struct AuthenticationBuilder {
    principal: String,
    roles: BTreeSet<String>,
    credentials: Option<SecretString>,
}

impl AuthenticationBuilder {
    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    #[must_use]
    pub fn roles<R, I>(mut self, roles: I) -> Self
    where
        R: Into<String>,
        I: IntoIterator<Item = R>,
    {
        self.roles.extend(roles.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn credentials(mut self, credentials: impl Into<SecretString>) -> Self {
        self.credentials = Some(credentials.into());
        self
    }

    /// # Errors
    ///
    /// Returns [`AuthenticationError::EmptyPrincipal`] if the principal is empty.
    pub fn build(self) -> Result<Authentication, AuthenticationError> {
        if self.principal.is_empty() {
            return Err(AuthenticationError::EmptyPrincipal);
        }
        Ok(self.assemble())
    }

    /// Finish without checking the principal. Only for fixed, known-good principals.
    pub(crate) fn assemble(self) -> Authentication {
        Authentication {
            principal: self.principal,
            roles: self.roles,
            credentials: self.credentials,
        }
    }
}

/// Wire shape accepted on deserialize, validated into [`Authentication`].
#[derive(serde::Deserialize)]
struct AuthenticationRepr {
    principal: String,
    #[serde(default)]
    roles: BTreeSet<String>,
}

impl TryFrom<AuthenticationRepr> for Authentication {
    type Error = AuthenticationError;

    fn try_from(repr: AuthenticationRepr) -> Result<Self, Self::Error> {
        Self::new(repr.principal, repr.roles)
    }
}

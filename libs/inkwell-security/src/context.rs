use std::sync::Arc;

use crate::authentication::Authentication;
use crate::oracle::AuthorizationOracle;

/// `AuthenticationContext` holds the current [`Authentication`] of one caller.
///
/// Each request or task owns its own context and hands it (or a borrow of it)
/// to whatever needs to make authorization decisions. There is no process-wide
/// slot: two callers can only observe each other's identity if they share the
/// same value.
///
/// An empty context is the normal anonymous state, not an error.
#[derive(Debug, Clone, Default)]
pub struct AuthenticationContext {
    current: Option<Arc<Authentication>>,
}

impl AuthenticationContext {
    /// Create an empty (unauthenticated) context
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context already bound to `authentication`
    #[must_use]
    pub fn authenticated(authentication: Authentication) -> Self {
        Self {
            current: Some(Arc::new(authentication)),
        }
    }

    /// The authentication bound to this context, if any
    #[must_use]
    pub fn current(&self) -> Option<&Authentication> {
        self.current.as_deref()
    }

    /// Replace the bound authentication.
    ///
    /// The previous value is dropped, never merged with the new one.
    pub fn set(&mut self, authentication: Authentication) {
        tracing::trace!(
            principal = authentication.principal(),
            roles = authentication.roles().len(),
            "authentication bound to context"
        );
        self.current = Some(Arc::new(authentication));
    }

    /// Drop the bound authentication, returning the context to anonymous.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Borrow this context for authorization decisions.
    #[must_use]
    pub fn oracle(&self) -> AuthorizationOracle<'_> {
        AuthorizationOracle::new(self)
    }
}

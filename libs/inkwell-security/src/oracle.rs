//! Role-based authorization decisions.
//!
//! Every check re-reads the live [`AuthenticationContext`]; nothing is cached,
//! so a replaced authentication takes effect on the very next call.

use std::sync::Arc;

use crate::authentication::Authentication;
use crate::context::AuthenticationContext;
use crate::roles;

/// Capability a domain object exposes so checks can be scoped to it.
///
/// A blog, for instance, answers whether a given user is listed as one of its
/// owners or contributors. Nothing else about the object is needed here.
pub trait AuthorizableContent {
    /// Whether `principal` holds `role` for this particular object.
    fn is_user_in_role(&self, role: &str, principal: &str) -> bool;
}

impl<T: AuthorizableContent + ?Sized> AuthorizableContent for &T {
    fn is_user_in_role(&self, role: &str, principal: &str) -> bool {
        (**self).is_user_in_role(role, principal)
    }
}

impl<T: AuthorizableContent + ?Sized> AuthorizableContent for Arc<T> {
    fn is_user_in_role(&self, role: &str, principal: &str) -> bool {
        (**self).is_user_in_role(role, principal)
    }
}

/// Answers yes/no authorization questions for one [`AuthenticationContext`].
///
/// Obtained through [`AuthenticationContext::oracle`]. A missing
/// authentication or a missing role is a plain `false`/`None`.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationOracle<'a> {
    ctx: &'a AuthenticationContext,
}

impl<'a> AuthorizationOracle<'a> {
    #[must_use]
    pub fn new(ctx: &'a AuthenticationContext) -> Self {
        Self { ctx }
    }

    fn current(&self) -> Option<&'a Authentication> {
        self.ctx.current()
    }

    /// Principal of the current authentication, `None` when unauthenticated.
    #[must_use]
    pub fn current_principal(&self) -> Option<&'a str> {
        self.current().map(Authentication::principal)
    }

    /// Whether the caller is authenticated at all, regardless of roles.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Whether the caller was granted `role`. Exact match, no hierarchy.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.current().is_some_and(|auth| auth.has_role(role))
    }

    #[must_use]
    pub fn is_administrator(&self) -> bool {
        self.has_role(roles::PLATFORM_ADMIN)
    }

    #[must_use]
    pub fn is_blog_owner(&self) -> bool {
        self.has_role(roles::BLOG_OWNER)
    }

    #[must_use]
    pub fn is_blog_contributor(&self) -> bool {
        self.has_role(roles::BLOG_CONTRIBUTOR)
    }

    /// Whether the caller may act as an owner of `content`.
    ///
    /// Both must hold: the caller carries the global owner role, and `content`
    /// lists the caller's principal as one of its owners.
    #[must_use]
    pub fn is_authorized_as_owner<C>(&self, content: &C) -> bool
    where
        C: AuthorizableContent + ?Sized,
    {
        self.is_authorized_in_role(roles::BLOG_OWNER, content)
    }

    /// Whether the caller may act as a contributor to `content`.
    ///
    /// Same shape as [`Self::is_authorized_as_owner`] with the contributor role.
    #[must_use]
    pub fn is_authorized_as_contributor<C>(&self, content: &C) -> bool
    where
        C: AuthorizableContent + ?Sized,
    {
        self.is_authorized_in_role(roles::BLOG_CONTRIBUTOR, content)
    }

    fn is_authorized_in_role<C>(&self, role: &str, content: &C) -> bool
    where
        C: AuthorizableContent + ?Sized,
    {
        let Some(auth) = self.current() else {
            tracing::trace!(role, "scoped check denied: unauthenticated");
            return false;
        };

        let global = auth.has_role(role);
        let scoped = global && content.is_user_in_role(role, auth.principal());

        tracing::trace!(
            principal = auth.principal(),
            role,
            global,
            scoped,
            "scoped authorization check"
        );
        scoped
    }
}

//! Deterministic identities for test fixtures.
//!
//! Compiled only for this crate's tests or with the `test-util` feature, so
//! production builds have no way to reach it. No password is ever checked:
//! the fixed credentials are placeholders.

use crate::authentication::Authentication;
use crate::context::AuthenticationContext;
use crate::roles;

/// Principal used by every impersonated identity.
pub const TEST_PRINCIPAL: &str = "username";

/// Placeholder credentials attached to impersonated identities.
pub const TEST_CREDENTIALS: &str = "password";

/// Forces an [`AuthenticationContext`] into a known role state.
///
/// Each call replaces whatever was bound before; roles never accumulate.
pub trait TestIdentitySwitcher {
    /// Bind an identity holding only the blog-owner role.
    fn run_as_blog_owner(&mut self);

    /// Bind an identity holding only the blog-contributor role.
    fn run_as_blog_contributor(&mut self);

    /// Bind an identity with no roles.
    ///
    /// Unlike an empty context, the caller is still authenticated.
    fn run_as_anonymous(&mut self);
}

impl TestIdentitySwitcher for AuthenticationContext {
    fn run_as_blog_owner(&mut self) {
        self.set(test_identity(Some(roles::BLOG_OWNER)));
    }

    fn run_as_blog_contributor(&mut self) {
        self.set(test_identity(Some(roles::BLOG_CONTRIBUTOR)));
    }

    fn run_as_anonymous(&mut self) {
        self.set(test_identity(None));
    }
}

fn test_identity(role: Option<&str>) -> Authentication {
    Authentication::builder(TEST_PRINCIPAL)
        .roles(role)
        .credentials(TEST_CREDENTIALS.to_owned())
        .assemble()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::BlogMembership;

    #[test]
    fn test_run_as_blog_owner() {
        let mut ctx = AuthenticationContext::new();
        ctx.run_as_blog_owner();

        let oracle = ctx.oracle();
        assert_eq!(oracle.current_principal(), Some(TEST_PRINCIPAL));
        assert!(oracle.is_blog_owner());
        assert!(!oracle.is_blog_contributor());
        assert!(!oracle.is_administrator());
    }

    #[test]
    fn test_owner_then_contributor_leaves_only_contributor() {
        let mut ctx = AuthenticationContext::new();
        ctx.run_as_blog_owner();
        ctx.run_as_blog_contributor();

        let current = ctx.current().unwrap();
        assert_eq!(current.roles().len(), 1);
        assert!(current.has_role(roles::BLOG_CONTRIBUTOR));
        assert!(!current.has_role(roles::BLOG_OWNER));
    }

    #[test]
    fn test_impersonation_is_idempotent() {
        let mut ctx = AuthenticationContext::new();
        ctx.run_as_blog_owner();
        ctx.run_as_blog_owner();

        assert_eq!(ctx.current().unwrap().roles().len(), 1);
        assert!(ctx.oracle().is_blog_owner());
    }

    #[test]
    fn test_anonymous_is_authenticated_without_roles() {
        let mut ctx = AuthenticationContext::new();
        ctx.run_as_blog_owner();
        ctx.run_as_anonymous();

        let oracle = ctx.oracle();
        assert!(oracle.is_authenticated());
        assert_eq!(oracle.current_principal(), Some(TEST_PRINCIPAL));
        for role in roles::BUILTIN {
            assert!(!oracle.has_role(role));
        }
    }

    #[test]
    fn test_impersonated_owner_still_needs_listing() {
        let listed = BlogMembership::from_lists(TEST_PRINCIPAL, "");
        let unlisted = BlogMembership::from_lists("someone-else", "");

        let mut ctx = AuthenticationContext::new();
        ctx.run_as_blog_owner();

        assert!(ctx.oracle().is_authorized_as_owner(&listed));
        assert!(!ctx.oracle().is_authorized_as_owner(&unlisted));
    }
}

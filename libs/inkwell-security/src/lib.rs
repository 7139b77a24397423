#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Inkwell security
//!
//! Request-scoped authentication state and the role-based authorization
//! decisions made over it:
//!
//! - [`Authentication`] - who is calling, with which granted roles
//! - [`AuthenticationContext`] - holder of at most one current authentication
//! - [`AuthorizationOracle`] - role membership and content-scoped checks
//! - [`AuthorizableContent`] - capability a domain object exposes for scoped checks
//! - [`BlogMembership`] - owner/contributor lists of a single blog
//!
//! ## Usage
//!
//! ```
//! use inkwell_security::{Authentication, AuthenticationContext, BlogMembership, roles};
//!
//! let blog = BlogMembership::from_lists("alice", "bob, carol");
//!
//! let ctx = AuthenticationContext::authenticated(
//!     Authentication::builder("alice")
//!         .role(roles::BLOG_OWNER)
//!         .build()?,
//! );
//!
//! let oracle = ctx.oracle();
//! assert!(oracle.is_authorized_as_owner(&blog));
//! assert!(!oracle.is_authorized_as_contributor(&blog));
//! # Ok::<(), inkwell_security::AuthenticationError>(())
//! ```

pub mod authentication;
pub mod context;
pub mod error;
pub mod membership;
pub mod oracle;
pub mod roles;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use authentication::{Authentication, AuthenticationBuilder};
pub use context::AuthenticationContext;
pub use error::AuthenticationError;
pub use membership::BlogMembership;
pub use oracle::{AuthorizableContent, AuthorizationOracle};

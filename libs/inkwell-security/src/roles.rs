//! Well-known role labels.
//!
//! Labels are compared by exact string match. Deployments may grant any
//! other label as an extension role; the oracle treats those the same way.

/// Platform-wide administrator.
pub const PLATFORM_ADMIN: &str = "ROLE_PLATFORM_ADMIN";

/// Owner of one or more blogs.
pub const BLOG_OWNER: &str = "ROLE_BLOG_OWNER";

/// Contributor to one or more blogs.
pub const BLOG_CONTRIBUTOR: &str = "ROLE_BLOG_CONTRIBUTOR";

/// All built-in labels, in privilege order.
pub const BUILTIN: [&str; 3] = [PLATFORM_ADMIN, BLOG_OWNER, BLOG_CONTRIBUTOR];

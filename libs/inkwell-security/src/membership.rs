use std::collections::BTreeSet;

use crate::oracle::AuthorizableContent;
use crate::roles;

/// Owner and contributor usernames of a single blog.
///
/// Blog settings keep both lists as comma-separated strings
/// (`"alice, bob"`); [`BlogMembership::from_lists`] accepts that form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogMembership {
    owners: BTreeSet<String>,
    contributors: BTreeSet<String>,
}

impl BlogMembership {
    #[must_use]
    pub fn new<O, C>(owners: O, contributors: C) -> Self
    where
        O: IntoIterator,
        O::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            owners: owners.into_iter().map(Into::into).collect(),
            contributors: contributors.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse comma-separated owner and contributor lists.
    ///
    /// Whitespace around names is trimmed and empty entries are dropped.
    #[must_use]
    pub fn from_lists(owners: &str, contributors: &str) -> Self {
        Self::new(split_usernames(owners), split_usernames(contributors))
    }

    #[must_use]
    pub fn owners(&self) -> &BTreeSet<String> {
        &self.owners
    }

    #[must_use]
    pub fn contributors(&self) -> &BTreeSet<String> {
        &self.contributors
    }

    /// Usernames holding `role` on this blog. Unknown roles have no members.
    #[must_use]
    pub fn users_in_role(&self, role: &str) -> Option<&BTreeSet<String>> {
        match role {
            roles::BLOG_OWNER => Some(&self.owners),
            roles::BLOG_CONTRIBUTOR => Some(&self.contributors),
            _ => None,
        }
    }
}

impl AuthorizableContent for BlogMembership {
    fn is_user_in_role(&self, role: &str, principal: &str) -> bool {
        self.users_in_role(role)
            .is_some_and(|users| users.contains(principal))
    }
}

fn split_usernames(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}

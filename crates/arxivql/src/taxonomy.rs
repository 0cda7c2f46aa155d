//! Category and archive value types.
//!
//! arXiv classifies articles into leaf [`Category`] tokens (`cs.AI`,
//! `hep-th`) grouped into archives ([`CategoryGroup`]). Both render to the
//! token the search API expects in a `cat:` filter:
//!
//! | Group | Rule | Rendered |
//! |-------|------|----------|
//! | `cs` | [`WildcardRule::DotWildcard`] | `cs.*` |
//! | `astro-ph` | [`WildcardRule::StarWildcard`] | `astro-ph*` |
//! | `hep-th` | [`WildcardRule::SingleToken`] | `hep-th` |
//!
//! The data itself lives in the `arxivql-taxonomy` crate; the types are
//! defined here so the query builder can accept them as field terms.

use std::fmt;

/// A leaf arXiv category such as `cs.AI`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category {
    /// Category token used in queries (e.g. `cs.AI`).
    pub id: &'static str,
    /// Human readable name.
    pub name: &'static str,
    /// Top level group (e.g. `Computer Science`, `Physics`).
    pub group_name: &'static str,
    /// Token of the archive the category belongs to.
    pub archive_id: &'static str,
    /// Human readable archive name.
    pub archive_name: &'static str,
}

impl Category {
    /// Creates a category.
    pub const fn new(
        id: &'static str,
        name: &'static str,
        group_name: &'static str,
        archive_id: &'static str,
        archive_name: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            group_name,
            archive_id,
            archive_name,
        }
    }

    /// Returns the category token.
    pub fn to_token(&self) -> &'static str {
        self.id
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

/// How an archive renders as a single `cat:` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WildcardRule {
    /// `archive.*`: matches every dotted category of the archive.
    DotWildcard,
    /// `archive*`: also matches the bare legacy category of the archive.
    StarWildcard,
    /// `archive`: the archive is itself a single category.
    SingleToken,
}

/// An archive: a named, ordered group of categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryGroup {
    /// Archive token (e.g. `cs`, `astro-ph`, `hep-th`).
    pub id: &'static str,
    /// Human readable archive name.
    pub name: &'static str,
    members: &'static [Category],
    wildcard: WildcardRule,
}

impl CategoryGroup {
    /// Creates an archive from its members and rendering rule.
    pub const fn new(
        id: &'static str,
        name: &'static str,
        members: &'static [Category],
        wildcard: WildcardRule,
    ) -> Self {
        Self {
            id,
            name,
            members,
            wildcard,
        }
    }

    /// Member categories in catalog order.
    pub fn members(&self) -> &'static [Category] {
        self.members
    }

    /// Iterates over the member categories.
    pub fn iter(&self) -> std::slice::Iter<'static, Category> {
        self.members.iter()
    }

    /// Number of member categories.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if the archive has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Looks up a member by its token.
    pub fn get(&self, id: &str) -> Option<&'static Category> {
        self.members.iter().find(|c| c.id == id)
    }

    /// True if a member with the given token exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The rendering rule of this archive.
    pub fn wildcard(&self) -> WildcardRule {
        self.wildcard
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.wildcard {
            WildcardRule::DotWildcard => write!(f, "{}.*", self.id),
            WildcardRule::StarWildcard => write!(f, "{}*", self.id),
            WildcardRule::SingleToken => f.write_str(self.id),
        }
    }
}

impl IntoIterator for &CategoryGroup {
    type Item = &'static Category;
    type IntoIter = std::slice::Iter<'static, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

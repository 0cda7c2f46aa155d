//! Searchable fields of the arXiv API.

use std::fmt;

/// A searchable field and its query prefix.
///
/// | Field | Prefix | Phrase quoting |
/// |-------|--------|----------------|
/// | Title | `ti` | yes |
/// | Author | `au` | yes |
/// | Abstract | `abs` | yes |
/// | Comment | `co` | yes |
/// | Journal reference | `jr` | yes |
/// | Category | `cat` | no |
/// | Report number | `rn` | yes |
/// | Identifier (deprecated) | `id` | yes |
/// | All of the above | `all` | yes |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Title: `ti`
    Title,
    /// Author: `au`
    Author,
    /// Abstract: `abs`
    Abstract,
    /// Comment: `co`
    Comment,
    /// Journal reference: `jr`
    Journal,
    /// Subject category: `cat`
    Category,
    /// Report number: `rn`
    Report,
    /// Identifier: `id` (the API recommends `id_list` instead)
    Id,
    /// All fields: `all`
    All,
}

impl Field {
    /// The query prefix of the field.
    pub fn prefix(&self) -> &'static str {
        match self {
            Field::Title => "ti",
            Field::Author => "au",
            Field::Abstract => "abs",
            Field::Comment => "co",
            Field::Journal => "jr",
            Field::Category => "cat",
            Field::Report => "rn",
            Field::Id => "id",
            Field::All => "all",
        }
    }

    /// Whether multi-word terms may be quoted into a phrase.
    ///
    /// Categories are atomic tokens or wildcards, so a phrase is never valid.
    pub fn is_quotable(&self) -> bool {
        !matches!(self, Field::Category)
    }

    /// Whether the API discourages filtering on this field.
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Field::Id)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(Field::Title.prefix(), "ti");
        assert_eq!(Field::Abstract.prefix(), "abs");
        assert_eq!(Field::Journal.to_string(), "jr");
        assert_eq!(Field::All.to_string(), "all");
    }

    #[test]
    fn test_only_category_is_unquotable() {
        assert!(!Field::Category.is_quotable());
        assert!(Field::Author.is_quotable());
        assert!(Field::Id.is_quotable());
    }

    #[test]
    fn test_id_is_deprecated() {
        assert!(Field::Id.is_deprecated());
        assert!(!Field::All.is_deprecated());
    }
}

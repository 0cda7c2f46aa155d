//! arXiv article identifiers.
//!
//! ```rust
//! use arxivql::{ArticleId, IdentifierFormat};
//!
//! let id: ArticleId = "quant-ph/0201082v1".parse().unwrap();
//! assert_eq!(id.format(), IdentifierFormat::Legacy);
//! assert_eq!((id.year, id.month, id.number), (2002, 1, 82));
//! assert_eq!(id.reconstruct(), "quant-ph/0201082v1");
//! ```

mod formatter;
mod parser;

pub use formatter::FIVE_DIGIT_SEQUENCE_YEAR;

use std::fmt;
use std::str::FromStr;

use crate::error::{IdentifierError, IdentifierResult};

/// A parsed arXiv identifier.
///
/// Modern identifiers (`1805.12345`) have no `archive`; legacy identifiers
/// (`math.GT/0309136`) always have one. `subject` only appears together with
/// `archive`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArticleId {
    /// Identifier without prefix and version (e.g. `1805.12345`).
    pub base_id: String,
    /// Version number from a `vN` suffix.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub version: Option<u32>,
    /// Four-digit submission year.
    pub year: u16,
    /// Submission month (1-12).
    pub month: u8,
    /// Sequence number within the month.
    pub number: u32,
    /// Namespace label before the first colon (e.g. `arXiv`).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub prefix: Option<String>,
    /// Archive of a legacy identifier (e.g. `quant-ph`, `math`).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub archive: Option<String>,
    /// Subject class of a legacy identifier (e.g. `GT` in `math.GT/0309136`).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub subject: Option<String>,
}

/// Numbering scheme of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IdentifierFormat {
    /// `YYMM.NNNN[N]`, used since April 2007.
    Modern,
    /// `archive[.subject]/YYMMNNN`, used before April 2007.
    Legacy,
}

impl ArticleId {
    /// Parses an identifier with optional `prefix:` and `vN` suffix.
    pub fn parse(raw: &str) -> IdentifierResult<Self> {
        parser::parse(raw)
    }

    /// The identifier as `prefix:` + `base_id` + `vN`.
    pub fn id(&self) -> String {
        formatter::with_affixes(self, &self.base_id)
    }

    /// Rebuilds the identifier from the numeric fields.
    ///
    /// For any identifier in canonical form, `ArticleId::parse(s)?.reconstruct() == s`.
    pub fn reconstruct(&self) -> String {
        formatter::reconstruct(self)
    }

    /// The numbering scheme of this identifier.
    pub fn format(&self) -> IdentifierFormat {
        if self.archive.is_some() {
            IdentifierFormat::Legacy
        } else {
            IdentifierFormat::Modern
        }
    }

    /// The legacy category (`archive` or `archive.subject`), if any.
    pub fn legacy_category(&self) -> Option<String> {
        let archive = self.archive.as_deref()?;
        Some(match self.subject {
            Some(ref subject) => format!("{}.{}", archive, subject),
            None => archive.to_string(),
        })
    }

    /// A copy without version, e.g. to address the latest version.
    pub fn without_version(&self) -> Self {
        Self {
            version: None,
            ..self.clone()
        }
    }
}

impl FromStr for ArticleId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> IdentifierResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_fields_modern_with_prefix() {
        let id = ArticleId::parse("   arXiv:1805.12345v2 ").unwrap();
        assert_eq!(id.base_id, "1805.12345");
        assert_eq!(id.version, Some(2));
        assert_eq!(id.year, 2018);
        assert_eq!(id.month, 5);
        assert_eq!(id.number, 12345);
        assert_eq!(id.prefix.as_deref(), Some("arXiv"));
        assert!(id.archive.is_none());
        assert!(id.subject.is_none());
        assert_eq!(id.format(), IdentifierFormat::Modern);
        assert_eq!(id.id(), "arXiv:1805.12345v2");
    }

    #[test]
    fn test_full_fields_legacy_with_prefix() {
        let id = ArticleId::parse("arXiv:quant-ph/0201082v1").unwrap();
        assert_eq!(id.base_id, "quant-ph/0201082");
        assert_eq!(id.version, Some(1));
        assert_eq!((id.year, id.month, id.number), (2002, 1, 82));
        assert_eq!(id.prefix.as_deref(), Some("arXiv"));
        assert_eq!(id.archive.as_deref(), Some("quant-ph"));
        assert!(id.subject.is_none());
        assert_eq!(id.format(), IdentifierFormat::Legacy);
        assert_eq!(id.legacy_category().as_deref(), Some("quant-ph"));
    }

    #[test]
    fn test_prefix_body_is_trimmed() {
        let id = ArticleId::parse("arXiv: 1805.12345").unwrap();
        assert_eq!(id.base_id, "1805.12345");
        assert_eq!(id.prefix.as_deref(), Some("arXiv"));
    }

    #[test]
    fn test_error_carries_raw_input() {
        let err = ArticleId::parse("  not-an-id ").unwrap_err();
        assert_eq!(
            err,
            IdentifierError::InvalidFormat {
                input: "  not-an-id ".to_string()
            }
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert!(ArticleId::parse("").is_err());
        assert!(ArticleId::parse("arXiv:").is_err());
        assert!(ArticleId::parse("v2").is_err());
    }

    #[test]
    fn test_from_str_and_display() {
        let id: ArticleId = "math.GT/0309136v1".parse().unwrap();
        assert_eq!(id.to_string(), "math.GT/0309136v1");
        assert_eq!(id.without_version().to_string(), "math.GT/0309136");
        assert_eq!(id.legacy_category().as_deref(), Some("math.GT"));
    }

    #[test]
    fn test_modern_has_no_legacy_category() {
        let id = ArticleId::parse("2303.08774").unwrap();
        assert!(id.legacy_category().is_none());
        assert_eq!(id.year, 2023);
    }
}

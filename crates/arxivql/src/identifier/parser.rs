//! arXiv identifier parser implementation using nom.
//!
//! Covers both numbering schemes documented at
//! <https://info.arxiv.org/help/arxiv_identifier.html>:
//!
//! - modern: `YYMM.NNNN` (until 2014-12) or `YYMM.NNNNN` (from 2015-01)
//! - legacy: `archive[.subject]/YYMMNNN` (until 2007-03)
//!
//! Either may carry a `prefix:` and a `vN` version suffix.

use nom::{
    bytes::complete::{take_while1, take_while_m_n},
    character::complete::{char, digit1},
    combinator::all_consuming,
    sequence::{preceded, separated_pair},
    IResult,
};
use tracing::debug;

use super::ArticleId;
use crate::error::{IdentifierError, IdentifierResult};

/// Parse an arXiv identifier string.
///
/// # Examples
///
/// ```rust
/// use arxivql::ArticleId;
///
/// let id = ArticleId::parse("arXiv:1805.12345v2").unwrap();
/// assert_eq!(id.base_id, "1805.12345");
/// assert_eq!(id.version, Some(2));
/// assert_eq!(id.prefix.as_deref(), Some("arXiv"));
///
/// let legacy = ArticleId::parse("math.GT/0309136").unwrap();
/// assert_eq!(legacy.archive.as_deref(), Some("math"));
/// assert_eq!(legacy.subject.as_deref(), Some("GT"));
/// ```
pub fn parse(raw: &str) -> IdentifierResult<ArticleId> {
    let s = raw.trim();

    let (prefix, body) = match s.split_once(':') {
        Some((prefix, rest)) => (Some(prefix.to_string()), rest.trim()),
        None => (None, s),
    };

    let (base_id, version) = split_version(body).ok_or_else(|| invalid(raw))?;

    let id = if base_id.contains('/') {
        let (archive, subject, year, month, number) = legacy_base(raw, base_id)?;
        ArticleId {
            base_id: base_id.to_string(),
            version,
            year,
            month,
            number,
            prefix,
            archive: Some(archive),
            subject,
        }
    } else {
        let (year, month, number) = modern_base(raw, base_id)?;
        ArticleId {
            base_id: base_id.to_string(),
            version,
            year,
            month,
            number,
            prefix,
            archive: None,
            subject: None,
        }
    };

    Ok(id)
}

fn invalid(raw: &str) -> IdentifierError {
    debug!(input = raw, "rejected arXiv identifier");
    IdentifierError::InvalidFormat {
        input: raw.to_string(),
    }
}

fn check_month(raw: &str, month: u8) -> IdentifierResult<u8> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        debug!(input = raw, month, "rejected arXiv identifier month");
        Err(IdentifierError::InvalidMonth {
            input: raw.to_string(),
            month,
        })
    }
}

// ============================================================================
// Version suffix
// ============================================================================

/// Splits `body` into the shortest non-empty base and an optional version.
///
/// Only a `v` followed by digits up to the end of the body can start a
/// version, and digits never contain `v`, so the candidate is the last `v`.
fn split_version(body: &str) -> Option<(&str, Option<u32>)> {
    if body.is_empty() {
        return None;
    }

    match body.rfind('v') {
        Some(pos) if pos > 0 => match version_suffix(&body[pos..]) {
            // Digits that overflow a version leave no valid split at all.
            Ok((_, digits)) => digits.parse().ok().map(|v| (&body[..pos], Some(v))),
            Err(_) => Some((body, None)),
        },
        _ => Some((body, None)),
    }
}

fn version_suffix(input: &str) -> IResult<&str, &str> {
    all_consuming(preceded(char('v'), digit1))(input)
}

// ============================================================================
// Modern scheme: YYMM.NNNN[N]
// ============================================================================

fn two_digits(input: &str) -> IResult<&str, &str> {
    take_while_m_n(2, 2, |c: char| c.is_ascii_digit())(input)
}

fn modern_grammar(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(
        take_while_m_n(4, 4, |c: char| c.is_ascii_digit()),
        char('.'),
        take_while_m_n(4, 5, |c: char| c.is_ascii_digit()),
    )(input)
}

fn modern_base(raw: &str, base: &str) -> IdentifierResult<(u16, u8, u32)> {
    let (_, (yymm, seq)) = all_consuming(modern_grammar)(base).map_err(|_| invalid(raw))?;
    let (yy, mm) = split_yymm(raw, yymm)?;
    let month = check_month(raw, mm)?;
    let number = seq.parse().map_err(|_| invalid(raw))?;
    Ok((2000 + u16::from(yy), month, number))
}

fn split_yymm(raw: &str, yymm: &str) -> IdentifierResult<(u8, u8)> {
    let (rest, yy) = two_digits(yymm).map_err(|_| invalid(raw))?;
    let (_, mm) = two_digits(rest).map_err(|_| invalid(raw))?;
    let yy = yy.parse().map_err(|_| invalid(raw))?;
    let mm = mm.parse().map_err(|_| invalid(raw))?;
    Ok((yy, mm))
}

// ============================================================================
// Legacy scheme: archive[.subject]/YYMMNNN
// ============================================================================

fn is_category_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.' || c == '-'
}

fn legacy_grammar(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(
        take_while1(is_category_char),
        char('/'),
        take_while_m_n(7, 7, |c: char| c.is_ascii_digit()),
    )(input)
}

type LegacyParts = (String, Option<String>, u16, u8, u32);

fn legacy_base(raw: &str, base: &str) -> IdentifierResult<LegacyParts> {
    let (_, (category, numeric)) =
        all_consuming(legacy_grammar)(base).map_err(|_| invalid(raw))?;

    let (yymm, seq) = numeric.split_at(4);
    let (yy, mm) = split_yymm(raw, yymm)?;
    let month = check_month(raw, mm)?;

    // The scheme started in 1991, so 90-99 are 1990s and the rest 2000s.
    let year = if yy >= 90 {
        1900 + u16::from(yy)
    } else {
        2000 + u16::from(yy)
    };
    let number = seq.parse().map_err(|_| invalid(raw))?;

    let (archive, subject) = match category.split_once('.') {
        Some((archive, subject)) => (archive.to_string(), Some(subject.to_string())),
        None => (category.to_string(), None),
    };

    Ok((archive, subject, year, month, number))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod version {
        use super::*;

        #[test]
        fn test_no_version() {
            assert_eq!(split_version("1805.12345"), Some(("1805.12345", None)));
        }

        #[test]
        fn test_version() {
            assert_eq!(split_version("1805.12345v2"), Some(("1805.12345", Some(2))));
            assert_eq!(
                split_version("quant-ph/0201082v10"),
                Some(("quant-ph/0201082", Some(10)))
            );
        }

        #[test]
        fn test_v_without_digits_stays_in_base() {
            assert_eq!(split_version("1805.12345v"), Some(("1805.12345v", None)));
            assert_eq!(split_version("solv-int/9901001"), Some(("solv-int/9901001", None)));
        }

        #[test]
        fn test_leading_v_is_base() {
            assert_eq!(split_version("v12"), Some(("v12", None)));
        }

        #[test]
        fn test_empty_body() {
            assert_eq!(split_version(""), None);
        }

        #[test]
        fn test_oversized_version() {
            assert_eq!(split_version("1805.12345v99999999999"), None);
        }
    }

    mod modern {
        use super::*;

        #[test]
        fn test_four_digit_sequence() {
            assert_eq!(modern_base("1412.8770", "1412.8770"), Ok((2014, 12, 8770)));
        }

        #[test]
        fn test_five_digit_sequence() {
            assert_eq!(modern_base("1501.00001", "1501.00001"), Ok((2015, 1, 1)));
        }

        #[test]
        fn test_bad_shapes() {
            for base in ["180.12345", "18055.1234", "1805.123", "1805.123456", "1805-12345"] {
                assert!(
                    matches!(
                        modern_base(base, base),
                        Err(IdentifierError::InvalidFormat { .. })
                    ),
                    "{} should be rejected",
                    base
                );
            }
        }

        #[test]
        fn test_month_out_of_range() {
            assert_eq!(
                modern_base("1800.12345", "1800.12345"),
                Err(IdentifierError::InvalidMonth {
                    input: "1800.12345".to_string(),
                    month: 0
                })
            );
            assert!(modern_base("1813.12345", "1813.12345").is_err());
        }
    }

    mod legacy {
        use super::*;

        #[test]
        fn test_century_cutover() {
            let (_, _, year, _, _) = legacy_base("hep-th/9108001", "hep-th/9108001").unwrap();
            assert_eq!(year, 1991);
            let (_, _, year, _, _) = legacy_base("cs/0411052", "cs/0411052").unwrap();
            assert_eq!(year, 2004);
            let (_, _, year, _, _) = legacy_base("x/8901001", "x/8901001").unwrap();
            assert_eq!(year, 2089);
        }

        #[test]
        fn test_subject_split_on_first_dot() {
            let (archive, subject, _, _, number) =
                legacy_base("math.GT/0309136", "math.GT/0309136").unwrap();
            assert_eq!(archive, "math");
            assert_eq!(subject.as_deref(), Some("GT"));
            assert_eq!(number, 136);
        }

        #[test]
        fn test_bad_shapes() {
            for base in ["/0309136", "math/030913", "math/03091366", "ma th/0309136", "a/b/0309136"] {
                assert!(legacy_base(base, base).is_err(), "{} should be rejected", base);
            }
        }

        #[test]
        fn test_month_out_of_range() {
            assert!(matches!(
                legacy_base("cs/0413052", "cs/0413052"),
                Err(IdentifierError::InvalidMonth { month: 13, .. })
            ));
            assert!(matches!(
                legacy_base("cs/0400052", "cs/0400052"),
                Err(IdentifierError::InvalidMonth { month: 0, .. })
            ));
        }
    }
}

//! Rebuilds identifier strings from parsed fields.

use super::ArticleId;

/// First year whose modern identifiers use five-digit sequence numbers.
pub const FIVE_DIGIT_SEQUENCE_YEAR: u16 = 2015;

/// Rebuilds the full identifier from the numeric fields of `id`.
pub(super) fn reconstruct(id: &ArticleId) -> String {
    let base = if id.archive.is_some() {
        legacy_base(id)
    } else {
        modern_base(id)
    };
    with_affixes(id, &base)
}

/// Wraps `base` with the optional `prefix:` and `vN` of `id`.
pub(super) fn with_affixes(id: &ArticleId, base: &str) -> String {
    let mut out = String::with_capacity(base.len() + 12);
    if let Some(ref prefix) = id.prefix {
        out.push_str(prefix);
        out.push(':');
    }
    out.push_str(base);
    if let Some(version) = id.version {
        out.push('v');
        out.push_str(&version.to_string());
    }
    out
}

/// `YYMM.NNNN` up to 2014-12, `YYMM.NNNNN` from 2015-01.
fn modern_base(id: &ArticleId) -> String {
    let width = if id.year < FIVE_DIGIT_SEQUENCE_YEAR { 4 } else { 5 };
    format!(
        "{:02}{:02}.{:0width$}",
        id.year % 100,
        id.month,
        id.number,
        width = width
    )
}

/// `archive[.subject]/YYMMNNN`.
fn legacy_base(id: &ArticleId) -> String {
    let archive = id.archive.as_deref().unwrap_or_default();
    let numeric = format!("{:02}{:02}{:03}", id.year % 100, id.month, id.number);
    match id.subject {
        Some(ref subject) => format!("{}.{}/{}", archive, subject, numeric),
        None => format!("{}/{}", archive, numeric),
    }
}

//! Field values and term validation.

use std::borrow::Cow;
use std::fmt;

use crate::error::{QueryError, QueryResult};
use crate::identifier::ArticleId;
use crate::taxonomy::{Category, CategoryGroup};

/// The value of a field filter.
///
/// | Variant | Meaning | Rendered |
/// |---------|---------|----------|
/// | `Single` | one term | `prefix:term` |
/// | `Any` | match any of the terms | `prefix:(t1 t2 t3)` |
/// | `All` | match all of the terms | `prefix:(t1 AND t2 AND t3)` |
///
/// Vectors, slices and arrays convert into `Any`; tuples convert into `All`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    /// A single term.
    Single(String),
    /// Terms combined with OR inside the field.
    Any(Vec<String>),
    /// Terms combined with AND inside the field.
    All(Vec<String>),
}

impl FieldValue {
    /// A single term from any displayable value.
    pub fn single(term: impl fmt::Display) -> Self {
        FieldValue::Single(term.to_string())
    }

    /// An ANY group from displayable values, in iteration order.
    pub fn any<I>(terms: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        FieldValue::Any(terms.into_iter().map(|t| t.to_string()).collect())
    }

    /// An ALL group from displayable values, in iteration order.
    pub fn all<I>(terms: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        FieldValue::All(terms.into_iter().map(|t| t.to_string()).collect())
    }

    /// Renders the value as a filter on `prefix`, validating every term.
    pub(crate) fn render(&self, prefix: &str, quotable: bool) -> QueryResult<String> {
        match self {
            FieldValue::Single(term) => {
                let term = validate_term(term, quotable)?;
                Ok(format!("{}:{}", prefix, term))
            }
            FieldValue::Any(terms) => {
                let joined = validate_terms(terms, quotable)?.join(" ");
                Ok(format!("{}:({})", prefix, joined))
            }
            FieldValue::All(terms) => {
                let joined = validate_terms(terms, quotable)?.join(" AND ");
                Ok(format!("{}:({})", prefix, joined))
            }
        }
    }
}

fn validate_terms(terms: &[String], quotable: bool) -> QueryResult<Vec<Cow<'_, str>>> {
    terms.iter().map(|t| validate_term(t, quotable)).collect()
}

/// Checks a single term and quotes it when it holds several words.
pub(crate) fn validate_term(term: &str, quotable: bool) -> QueryResult<Cow<'_, str>> {
    if term.contains(['"', '(', ')']) {
        return Err(QueryError::ForbiddenCharacter {
            term: term.to_string(),
        });
    }

    if term.split_whitespace().nth(1).is_some() {
        if quotable {
            return Ok(Cow::Owned(format!("\"{}\"", term)));
        }
        return Err(QueryError::UnquotableMultiTermValue {
            term: term.to_string(),
        });
    }

    Ok(Cow::Borrowed(term))
}

// =============================================================================
// Conversions
// =============================================================================

impl From<&str> for FieldValue {
    fn from(term: &str) -> Self {
        FieldValue::Single(term.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(term: String) -> Self {
        FieldValue::Single(term)
    }
}

impl From<&String> for FieldValue {
    fn from(term: &String) -> Self {
        FieldValue::Single(term.clone())
    }
}

impl From<Category> for FieldValue {
    fn from(category: Category) -> Self {
        FieldValue::single(category)
    }
}

impl From<&Category> for FieldValue {
    fn from(category: &Category) -> Self {
        FieldValue::single(category)
    }
}

impl From<CategoryGroup> for FieldValue {
    fn from(group: CategoryGroup) -> Self {
        FieldValue::single(group)
    }
}

impl From<&CategoryGroup> for FieldValue {
    fn from(group: &CategoryGroup) -> Self {
        FieldValue::single(group)
    }
}

impl From<ArticleId> for FieldValue {
    fn from(id: ArticleId) -> Self {
        FieldValue::single(id)
    }
}

impl From<&ArticleId> for FieldValue {
    fn from(id: &ArticleId) -> Self {
        FieldValue::single(id)
    }
}

impl<T: fmt::Display> From<Vec<T>> for FieldValue {
    fn from(terms: Vec<T>) -> Self {
        FieldValue::any(terms)
    }
}

impl<T: fmt::Display> From<&[T]> for FieldValue {
    fn from(terms: &[T]) -> Self {
        FieldValue::any(terms)
    }
}

impl<T: fmt::Display, const N: usize> From<[T; N]> for FieldValue {
    fn from(terms: [T; N]) -> Self {
        FieldValue::any(terms)
    }
}

macro_rules! impl_all_for_tuple {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty: fmt::Display),+> From<($($ty,)+)> for FieldValue {
            fn from(($($var,)+): ($($ty,)+)) -> Self {
                FieldValue::All(vec![$($var.to_string()),+])
            }
        }
    };
}

impl_all_for_tuple!(A a);
impl_all_for_tuple!(A a, B b);
impl_all_for_tuple!(A a, B b, C c);
impl_all_for_tuple!(A a, B b, C c, D d);
impl_all_for_tuple!(A a, B b, C c, D d, E e);
impl_all_for_tuple!(A a, B b, C c, D d, E e, F f);
impl_all_for_tuple!(A a, B b, C c, D d, E e, F f, G g);
impl_all_for_tuple!(A a, B b, C c, D d, E e, F f, G g, H h);

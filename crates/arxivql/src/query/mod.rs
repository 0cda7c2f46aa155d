//! Boolean search expressions for the arXiv API.
//!
//! A [`Query`] is an immutable, already-serialized filter. Field
//! constructors validate and quote terms; [`Query::and`] and [`Query::or`]
//! combine two queries into a new parenthesized one.
//!
//! ## Negation
//!
//! The API has no standalone NOT, only `ANDNOT`. [`Query::negate`] therefore
//! only marks a query; the mark is consumed by the next [`Query::and`] that
//! takes the query as its right-hand side. Finalizing a query that still
//! carries the mark fails with [`QueryError::StandaloneNegation`].
//!
//! ```rust
//! use arxivql::Query;
//!
//! let query = Query::author("Ilya Sutskever")?
//!     .and(Query::title("autoencoder")?)?
//!     .and(Query::category("cs.AI")?.negate())?;
//!
//! assert_eq!(
//!     query.to_query_string()?,
//!     r#"((au:"Ilya Sutskever" AND ti:autoencoder) ANDNOT cat:cs.AI)"#
//! );
//! # Ok::<(), arxivql::QueryError>(())
//! ```

mod date;
mod field;
mod request;
mod value;

pub use date::{validate_stamp, DateBound, OPEN_END, OPEN_START};
pub use field::Field;
pub use request::{SearchRequest, SearchRequestBuilder, SortBy, SortOrder, DEFAULT_MAX_RESULTS};
pub use value::FieldValue;

use std::ops::Not;

use tracing::warn;

use crate::error::{QueryError, QueryResult};

/// An immutable boolean search expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    content: String,
    negated: bool,
}

/// Right-hand side of a combinator: a query or raw text searched in all fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A built query.
    Query(Query),
    /// Raw text, promoted with [`Query::all`].
    Text(String),
}

impl Query {
    // =========================================================================
    // Field constructors
    // =========================================================================

    /// Builds a filter on an arbitrary field prefix.
    ///
    /// Every term is checked for `"`, `(` and `)`. Multi-word terms are
    /// quoted when `quotable` is true and rejected otherwise.
    pub fn from_field(
        value: impl Into<FieldValue>,
        prefix: &str,
        quotable: bool,
    ) -> QueryResult<Self> {
        let content = value.into().render(prefix, quotable)?;
        Ok(Self::new(content))
    }

    /// Builds a filter on a known field.
    pub fn field(field: Field, value: impl Into<FieldValue>) -> QueryResult<Self> {
        if field.is_deprecated() {
            warn!(
                field = field.prefix(),
                "deprecation warning: use id_list in the search request instead"
            );
        }
        Self::from_field(value, field.prefix(), field.is_quotable())
    }

    /// Title filter: `ti:...`
    pub fn title(value: impl Into<FieldValue>) -> QueryResult<Self> {
        Self::field(Field::Title, value)
    }

    /// Author filter: `au:...`
    pub fn author(value: impl Into<FieldValue>) -> QueryResult<Self> {
        Self::field(Field::Author, value)
    }

    /// Abstract filter: `abs:...`
    pub fn abstract_text(value: impl Into<FieldValue>) -> QueryResult<Self> {
        Self::field(Field::Abstract, value)
    }

    /// Comment filter: `co:...`
    pub fn comment(value: impl Into<FieldValue>) -> QueryResult<Self> {
        Self::field(Field::Comment, value)
    }

    /// Journal reference filter: `jr:...`
    pub fn journal(value: impl Into<FieldValue>) -> QueryResult<Self> {
        Self::field(Field::Journal, value)
    }

    /// Report number filter: `rn:...`
    pub fn report(value: impl Into<FieldValue>) -> QueryResult<Self> {
        Self::field(Field::Report, value)
    }

    /// Category filter: `cat:...`
    ///
    /// Categories are never quoted, so a multi-word term is an error. Use a
    /// list or tuple of categories instead.
    pub fn category(value: impl Into<FieldValue>) -> QueryResult<Self> {
        Self::field(Field::Category, value)
    }

    /// Filter on all fields: `all:...`
    pub fn all(value: impl Into<FieldValue>) -> QueryResult<Self> {
        Self::field(Field::All, value)
    }

    /// Identifier filter: `id:...`
    #[deprecated(note = "use `SearchRequestBuilder::with_id_list` instead")]
    pub fn id(value: impl Into<FieldValue>) -> QueryResult<Self> {
        Self::field(Field::Id, value)
    }

    /// Submission date range: `submittedDate:[START TO END]` (GMT).
    ///
    /// ```rust
    /// use arxivql::{DateBound, Query};
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    /// let query = Query::submitted_date(start, DateBound::Open).unwrap();
    /// assert_eq!(
    ///     query.to_query_string().unwrap(),
    ///     "submittedDate:[202301010000 TO 900001010000]"
    /// );
    /// ```
    pub fn submitted_date(
        start: impl Into<DateBound>,
        end: impl Into<DateBound>,
    ) -> QueryResult<Self> {
        let start = start.into().render(OPEN_START)?;
        let end = end.into().render(OPEN_END)?;
        Ok(Self::new(format!("submittedDate:[{} TO {}]", start, end)))
    }

    fn new(content: String) -> Self {
        Self {
            content,
            negated: false,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// `(self AND other)`, or `(self ANDNOT other)` when `other` is negated.
    pub fn and(&self, other: impl Into<Operand>) -> QueryResult<Self> {
        self.ensure_not_negated()?;
        let other = other.into().into_query()?;
        let operator = if other.negated { "ANDNOT" } else { "AND" };
        Ok(Self::new(format!(
            "({} {} {})",
            self.content, operator, other.content
        )))
    }

    /// `(self OR other)`. A negated `other` has no operator and fails.
    pub fn or(&self, other: impl Into<Operand>) -> QueryResult<Self> {
        self.ensure_not_negated()?;
        let other = other.into().into_query()?;
        if other.negated {
            return Err(QueryError::UnsupportedOperator {
                operator: "ORNOT".to_string(),
            });
        }
        Ok(Self::new(format!("({} OR {})", self.content, other.content)))
    }

    /// Returns a copy with the negation mark toggled.
    pub fn negate(&self) -> Self {
        Self {
            content: self.content.clone(),
            negated: !self.negated,
        }
    }

    // =========================================================================
    // Finalization
    // =========================================================================

    /// The final expression string, ready to be sent as `search_query`.
    pub fn to_query_string(&self) -> QueryResult<String> {
        self.ensure_not_negated()?;
        Ok(self.content.clone())
    }

    /// The serialized expression, regardless of the negation mark.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the query carries an unconsumed negation mark.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    fn ensure_not_negated(&self) -> QueryResult<()> {
        if self.negated {
            return Err(QueryError::StandaloneNegation);
        }
        Ok(())
    }
}

impl Not for Query {
    type Output = Query;

    fn not(self) -> Query {
        Query {
            negated: !self.negated,
            ..self
        }
    }
}

impl Not for &Query {
    type Output = Query;

    fn not(self) -> Query {
        self.negate()
    }
}

impl TryFrom<Query> for String {
    type Error = QueryError;

    fn try_from(query: Query) -> QueryResult<String> {
        query.ensure_not_negated()?;
        Ok(query.content)
    }
}

impl TryFrom<&Query> for String {
    type Error = QueryError;

    fn try_from(query: &Query) -> QueryResult<String> {
        query.to_query_string()
    }
}

// =============================================================================
// Operand
// =============================================================================

impl Operand {
    /// Resolves the operand, promoting text with [`Query::all`].
    pub fn into_query(self) -> QueryResult<Query> {
        match self {
            Operand::Query(query) => Ok(query),
            Operand::Text(text) => Query::all(text),
        }
    }

    /// Left-hand text: `(all:text AND rhs)`.
    pub fn and(self, rhs: impl Into<Operand>) -> QueryResult<Query> {
        self.into_query()?.and(rhs)
    }

    /// Left-hand text: `(all:text OR rhs)`.
    pub fn or(self, rhs: impl Into<Operand>) -> QueryResult<Query> {
        self.into_query()?.or(rhs)
    }
}

impl From<Query> for Operand {
    fn from(query: Query) -> Self {
        Operand::Query(query)
    }
}

impl From<&Query> for Operand {
    fn from(query: &Query) -> Self {
        Operand::Query(query.clone())
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Operand::Text(text.to_string())
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Operand::Text(text)
    }
}

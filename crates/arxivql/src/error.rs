//! Error types for query building and identifier parsing.

use thiserror::Error;

/// Errors that can occur while building or finalizing a query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A term contains a double quote or a parenthesis.
    #[error("double quotes and parentheses are forbidden in terms: {term:?}")]
    ForbiddenCharacter {
        /// The offending term.
        term: String,
    },

    /// A multi-word term was given to a field that cannot quote phrases.
    #[error("unquotable multi-term value: {term:?}")]
    UnquotableMultiTermValue {
        /// The offending term.
        term: String,
    },

    /// A negated query was finalized or combined without a left-hand operand.
    #[error("there is no standalone negation operator in the arXiv API, only combined ANDNOT")]
    StandaloneNegation,

    /// The requested combination has no operator in the arXiv grammar.
    #[error("there is no {operator} operator in the arXiv API")]
    UnsupportedOperator {
        /// Name of the missing operator.
        operator: String,
    },

    /// A digit-only submission date stamp was malformed.
    #[error("invalid submittedDate stamp {value:?}: {reason}")]
    InvalidDateString {
        /// The rejected stamp.
        value: String,
        /// Why the stamp was rejected.
        reason: String,
    },
}

/// Errors that can occur while parsing an arXiv identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The identifier does not match either numbering scheme.
    #[error("invalid arXiv identifier format: {input}")]
    InvalidFormat {
        /// The raw input as given by the caller.
        input: String,
    },

    /// The identifier is well formed but its month is outside 1..=12.
    #[error("invalid month {month:02} in arXiv identifier: {input}")]
    InvalidMonth {
        /// The raw input as given by the caller.
        input: String,
        /// The decoded month.
        month: u8,
    },
}

impl IdentifierError {
    /// The raw input that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            IdentifierError::InvalidFormat { input } => input,
            IdentifierError::InvalidMonth { input, .. } => input,
        }
    }
}

/// Result type for query operations.
pub type QueryResult<T> = std::result::Result<T, QueryError>;

/// Result type for identifier operations.
pub type IdentifierResult<T> = std::result::Result<T, IdentifierError>;

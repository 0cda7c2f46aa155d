//! # arxivql
//!
//! A Rust library for building arXiv API search queries and working with
//! arXiv article identifiers.
//!
//! This crate provides:
//! - **Query Builder**: Compose field filters with AND/OR/ANDNOT without
//!   hand-escaping terms
//! - **Identifier Parser**: Parse and rebuild modern and legacy identifiers
//!
//! ## Query Usage
//!
//! ```rust
//! use arxivql::Query;
//!
//! // Multi-word terms are quoted into phrases
//! let q = Query::title("large language model").unwrap();
//! assert_eq!(q.to_query_string().unwrap(), r#"ti:"large language model""#);
//!
//! // Lists match any term, tuples match all terms
//! let any = Query::category(vec!["cs.LG", "stat.ML"]).unwrap();
//! let all = Query::category(("cs.LG", "stat.ML")).unwrap();
//! assert_eq!(any.to_query_string().unwrap(), "cat:(cs.LG stat.ML)");
//! assert_eq!(all.to_query_string().unwrap(), "cat:(cs.LG AND stat.ML)");
//! ```
//!
//! ## Identifier Usage
//!
//! ```rust
//! use arxivql::ArticleId;
//!
//! let id = ArticleId::parse("arXiv:1805.12345v2").unwrap();
//! assert_eq!((id.year, id.month, id.number), (2018, 5, 12345));
//! assert_eq!(id.reconstruct(), "arXiv:1805.12345v2");
//! ```
//!
//! ## Query Syntax Quick Reference
//!
//! | Construct | Example |
//! |-----------|---------|
//! | Field term | `ti:transformer` |
//! | Phrase | `ti:"large language model"` |
//! | Any of (list) | `cat:(cs.LG stat.ML)` |
//! | All of (tuple) | `cat:(cs.LG AND stat.ML)` |
//! | `AND` | `(au:Hinton AND ti:dropout)` |
//! | `OR` | `(cat:cs.NE OR cat:cs.CL)` |
//! | `ANDNOT` | `(au:Hinton ANDNOT cat:cs.AI)` |
//! | Date range | `submittedDate:[202301010000 TO 202401010000]` |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod identifier;
pub mod query;
pub mod taxonomy;

pub use error::{IdentifierError, IdentifierResult, QueryError, QueryResult};
pub use identifier::{ArticleId, IdentifierFormat};
pub use query::{
    DateBound, Field, FieldValue, Operand, Query, SearchRequest, SearchRequestBuilder, SortBy,
    SortOrder,
};
pub use taxonomy::{Category, CategoryGroup, WildcardRule};

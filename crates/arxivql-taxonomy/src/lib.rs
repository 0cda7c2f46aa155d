//! # arxivql-taxonomy
//!
//! The arXiv category taxonomy as static data, for use with
//! [`arxivql::Query::category`].
//!
//! ```rust
//! use arxivql::Query;
//! use arxivql_taxonomy::{archives, catalog};
//!
//! let q = Query::category(archives::CS).unwrap();
//! assert_eq!(q.to_query_string().unwrap(), "cat:cs.*");
//!
//! let ai = catalog::category("cs.AI").unwrap();
//! let q = Query::category(ai).unwrap().and(Query::category(archives::HEP_TH).unwrap());
//! assert_eq!(q.unwrap().to_query_string().unwrap(), "(cat:cs.AI AND cat:hep-th)");
//! ```

#![warn(missing_docs)]

pub mod catalog;
mod data;

pub use arxivql::{Category, CategoryGroup, WildcardRule};
pub use data::{ARCHIVES, ARCHIVE_COUNT};

/// Named handles for every archive.
pub mod archives {
    use arxivql::CategoryGroup;

    use crate::data::ARCHIVES;

    /// Computer Science (`cs.*`).
    pub static CS: &CategoryGroup = &ARCHIVES[0];
    /// Economics (`econ.*`).
    pub static ECON: &CategoryGroup = &ARCHIVES[1];
    /// Electrical Engineering and Systems Science (`eess.*`).
    pub static EESS: &CategoryGroup = &ARCHIVES[2];
    /// Mathematics (`math.*`).
    pub static MATH: &CategoryGroup = &ARCHIVES[3];
    /// Quantitative Biology (`q-bio.*`).
    pub static Q_BIO: &CategoryGroup = &ARCHIVES[4];
    /// Quantitative Finance (`q-fin.*`).
    pub static Q_FIN: &CategoryGroup = &ARCHIVES[5];
    /// Statistics (`stat.*`).
    pub static STAT: &CategoryGroup = &ARCHIVES[6];
    /// Astrophysics (`astro-ph*`).
    pub static ASTRO_PH: &CategoryGroup = &ARCHIVES[7];
    /// Condensed Matter (`cond-mat*`).
    pub static COND_MAT: &CategoryGroup = &ARCHIVES[8];
    /// Nonlinear Sciences (`nlin.*`).
    pub static NLIN: &CategoryGroup = &ARCHIVES[9];
    /// Physics (`physics.*`).
    pub static PHYSICS: &CategoryGroup = &ARCHIVES[10];
    /// General Relativity and Quantum Cosmology.
    pub static GR_QC: &CategoryGroup = &ARCHIVES[11];
    /// High Energy Physics - Experiment.
    pub static HEP_EX: &CategoryGroup = &ARCHIVES[12];
    /// High Energy Physics - Lattice.
    pub static HEP_LAT: &CategoryGroup = &ARCHIVES[13];
    /// High Energy Physics - Phenomenology.
    pub static HEP_PH: &CategoryGroup = &ARCHIVES[14];
    /// High Energy Physics - Theory.
    pub static HEP_TH: &CategoryGroup = &ARCHIVES[15];
    /// Mathematical Physics.
    pub static MATH_PH: &CategoryGroup = &ARCHIVES[16];
    /// Nuclear Experiment.
    pub static NUCL_EX: &CategoryGroup = &ARCHIVES[17];
    /// Nuclear Theory.
    pub static NUCL_TH: &CategoryGroup = &ARCHIVES[18];
    /// Quantum Physics.
    pub static QUANT_PH: &CategoryGroup = &ARCHIVES[19];
}

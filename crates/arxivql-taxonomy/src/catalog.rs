//! Lookups and curated collections over the static taxonomy.

use std::collections::BTreeMap;

use arxivql::{Category, CategoryGroup};

use crate::data::ARCHIVES;

// https://blog.arxiv.org/2019/12/05/arxiv-machine-learning-classification-guide/
const ML_BROAD: [&str; 16] = [
    "cs.LG", "stat.ML", "math.OC", "cs.CV", "cs.CL", "eess.AS", "cs.IR", "cs.HC", "cs.SI",
    "cs.CY", "cs.GR", "cs.SY", "cs.AI", "cs.MM", "cs.ET", "cs.NE",
];

// The category set of arxiv-sanity.
const ML_KARPATHY: [&str; 6] = ["cs.CV", "cs.AI", "cs.CL", "cs.LG", "cs.NE", "stat.ML"];

const HEP: [&str; 4] = ["hep-th", "hep-ph", "hep-ex", "hep-lat"];

/// All archives in taxonomy order.
pub fn all_archives() -> &'static [CategoryGroup] {
    &ARCHIVES
}

/// Finds an archive by id (`cs`, `astro-ph`, `hep-th`).
pub fn archive(id: &str) -> Option<&'static CategoryGroup> {
    ARCHIVES.iter().find(|archive| archive.id == id)
}

/// Finds a category by id (`cs.AI`, `cond-mat.str-el`, `quant-ph`).
pub fn category(id: &str) -> Option<&'static Category> {
    all_categories().find(|category| category.id == id)
}

/// Every category, archive by archive.
pub fn all_categories() -> impl Iterator<Item = &'static Category> {
    ARCHIVES.iter().flat_map(|archive| archive.iter())
}

/// Every category keyed by id.
pub fn categories_by_id() -> BTreeMap<&'static str, &'static Category> {
    all_categories().map(|category| (category.id, category)).collect()
}

/// Categories arXiv moderation treats as machine learning.
pub fn ml_broad() -> Vec<&'static Category> {
    resolve(&ML_BROAD)
}

/// A narrower machine learning set: vision, AI, language, learning,
/// neural computing and statistical learning.
pub fn ml_karpathy() -> Vec<&'static Category> {
    resolve(&ML_KARPATHY)
}

/// The four high energy physics archives.
pub fn hep() -> Vec<&'static Category> {
    resolve(&HEP)
}

fn resolve(ids: &[&str]) -> Vec<&'static Category> {
    ids.iter().filter_map(|id| category(id)).collect()
}

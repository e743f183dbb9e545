use serde::{Deserialize, Serialize};

pub mod sets;

pub use sets::{intersection, jaccard_index, set_difference, union, ElementSet};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid shingle length: {0} (must be at least 1)")]
    InvalidShingleLength(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

/// All similarity measures for one pair of texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityReport {
    /// Jaccard index of the two trimmed line sets.
    pub line: f64,
    /// Same as `line`, with the template's lines removed from both sides first.
    pub line_excluding_template: f64,
    /// Jaccard index of the shingle sets, template shingles removed.
    pub shingle: f64,
    pub shingle_length: usize,
    /// Lines both texts share after template removal, sorted.
    pub shared_lines: Vec<String>,
}

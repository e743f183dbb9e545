//! Text similarity for duplicate and plagiarism detection.
//!
//! Texts are turned into sets (trimmed lines, or shingles of lowercase words)
//! and compared with the Jaccard index from `simtext-core`. Everything here is
//! a pure function of its inputs.

pub mod compare;
pub mod lines;
pub mod words;

pub use compare::{
    compare, line_similarity, line_similarity_with_template, shingle_similarity,
};
pub use lines::trimmed_lines;
pub use words::{as_lowercase_words, shingle};

//! Word sequences and k-shingles.
//!
//! A word is a maximal run of alphanumeric characters; everything else
//! (whitespace, punctuation, underscores, symbols) separates words.

use simtext_core::{Error, Result};
use std::borrow::Borrow;
use std::collections::HashSet;

/// Words of `text` in order of appearance, lowercased, duplicates kept.
pub fn as_lowercase_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// The set of `k`-shingles of `words`: every run of `k` adjacent words,
/// concatenated without a separator.
///
/// Fewer than `k` words gives an empty set. `k == 0` is rejected.
pub fn shingle<S: Borrow<str>>(words: &[S], k: usize) -> Result<HashSet<String>> {
    if k == 0 {
        return Err(Error::InvalidShingleLength(k));
    }
    Ok(words.windows(k).map(|w| w.concat()).collect())
}

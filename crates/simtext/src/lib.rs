//! Public facade crate for `simtext`.
//!
//! This crate contains no logic of its own. It re-exports the set algebra
//! from `simtext-core` and the text similarity measures from `simtext-text`.

pub use simtext_core::*;
pub use simtext_text::*;

pub use simtext_core as core;
pub use simtext_text as text;

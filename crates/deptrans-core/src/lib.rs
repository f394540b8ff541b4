#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for deptrans.
//!
//! Three layers:
//! - **Vocabulary**: `DeprelVocab`, the label set shared with the scoring model
//! - **Gold trees**: `GoldTree`, a validated head/label assignment with ROOT last
//! - **Interchange**: `RawTreebank`, a 1:1 mapping of the JSON treebank format

mod error;
mod tree;
mod treebank;
mod vocab;

#[cfg(test)]
mod tree_tests;

pub use error::TreeError;
pub use tree::GoldTree;
pub use treebank::{RawSentence, RawTreebank, Treebank, parse_treebank};
pub use vocab::DeprelVocab;

// ============================================================================
// Common Types
// ============================================================================

/// Token index within a sentence. ROOT is the last token, not the first.
pub type TokenId = u32;

/// Dependency relation label id, as issued by `DeprelVocab`.
pub type DeprelId = u32;

/// Sentinel head: the token is unattached (or is ROOT).
pub const BAD_HEAD: TokenId = u32::MAX;

/// Sentinel label paired with `BAD_HEAD`.
pub const BAD_DEPREL: DeprelId = u32::MAX;

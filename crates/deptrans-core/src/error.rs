//! Errors raised while validating gold trees and treebank input.

use crate::TokenId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("sentence has no tokens")]
    Empty,

    #[error("{heads} heads but {deprels} labels")]
    LengthMismatch { heads: usize, deprels: usize },

    #[error("sentence has no root (every token has a head)")]
    NoRoot,

    #[error("sentence has several roots: tokens {first} and {second}")]
    MultipleRoots { first: TokenId, second: TokenId },

    /// ROOT must be the last token of the sentence.
    #[error("root is token {root} but the last token is {last}")]
    RootNotLast { root: TokenId, last: TokenId },

    #[error("token {token} has head {head}, outside the sentence")]
    HeadOutOfRange { token: TokenId, head: TokenId },

    #[error("token {token} is part of a cycle")]
    Cycle { token: TokenId },

    #[error("token {token} has no label")]
    MissingDeprel { token: TokenId },

    #[error("token {token} has unknown label `{label}`")]
    UnknownDeprel { token: TokenId, label: String },

    #[error("sentence {index}: {source}")]
    Sentence {
        index: usize,
        #[source]
        source: Box<TreeError>,
    },
}

//! Errors that can be surfaced to callers of a transition system.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The static oracle had to shift with an exhausted buffer: the gold tree
    /// cannot be built by this system (typically it is non-projective).
    #[error(
        "gold tree is not reachable with {system}: buffer exhausted at step {step} \
         with {stack_depth} tokens on the stack"
    )]
    Unreachable {
        system: &'static str,
        step: usize,
        stack_depth: usize,
    },

    #[error("unknown transition system `{0}`")]
    UnknownSystem(String),
}

pub type Result<T> = std::result::Result<T, Error>;

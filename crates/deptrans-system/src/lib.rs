//! Transition systems for shift-reduce dependency parsing.
//!
//! This crate provides the parser state, the arc-standard transition system,
//! its static oracle, and the dynamic cost function used for cost-augmented
//! training.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod action;
pub mod arcstd;
pub mod error;
mod invariants;
pub mod state;
pub mod system;
pub mod trace;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used items at crate root
pub use action::{Action, ActionKind};
pub use arcstd::{ArcStandard, CostFunction};
pub use error::{Error, Result};
pub use state::State;
pub use system::{SystemKind, TransitionSystem};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};

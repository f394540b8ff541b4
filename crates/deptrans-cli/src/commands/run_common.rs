//! Shared setup for commands that work on a treebank.

use std::ops::Range;
use std::path::Path;

use deptrans_core::{DeprelVocab, Treebank};
use deptrans_system::TransitionSystem;

use super::treebank_loader::load_treebank;

pub fn load_treebank_or_exit(path: &Path) -> Treebank {
    load_treebank(path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

pub fn build_system_or_exit(name: &str, vocab: DeprelVocab) -> TransitionSystem {
    TransitionSystem::from_name(name, vocab).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        eprintln!();
        eprintln!("Available systems: arcstd (alias: arc-standard)");
        std::process::exit(1);
    })
}

/// Sentence indices to process: one sentence, or all of them.
pub fn sentence_range(bank: &Treebank, sentence: Option<usize>) -> Result<Range<usize>, String> {
    let count = bank.trees.len();
    match sentence {
        None => Ok(0..count),
        Some(index) if index < count => Ok(index..index + 1),
        Some(index) => Err(format!(
            "sentence {index} out of range (treebank has {count} sentences)"
        )),
    }
}

pub fn sentence_range_or_exit(bank: &Treebank, sentence: Option<usize>) -> Range<usize> {
    sentence_range(bank, sentence).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    })
}

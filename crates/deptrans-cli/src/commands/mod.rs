pub mod actions;
pub mod check;
pub mod oracle;
pub mod run_common;
pub mod trace;
pub mod treebank_loader;

#[cfg(test)]
mod treebank_loader_tests;

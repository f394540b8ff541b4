//! Verify oracle sequences against the gold trees of a treebank.

use std::fmt;
use std::path::PathBuf;

use deptrans_core::{GoldTree, TokenId};
use deptrans_system::{Error, TransitionSystem};

use super::run_common::{build_system_or_exit, load_treebank_or_exit};

pub struct CheckArgs {
    pub treebank: PathBuf,
    pub strict: bool,
    pub system: String,
}

/// Problem found in one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Crossing arcs: the system cannot build this tree.
    NonProjective,
    /// The oracle gave up on a tree it should handle.
    Unreachable(Error),
    /// Oracle replay attached `token` differently from the gold tree.
    Mismatch { token: TokenId },
    /// Oracle replay stopped before reaching a terminal state.
    Unfinished,
}

impl Finding {
    /// Non-projective trees are expected in real treebanks; everything else
    /// is a bug.
    pub fn is_warning(&self) -> bool {
        matches!(self, Finding::NonProjective)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::NonProjective => f.write_str("gold tree is non-projective"),
            Finding::Unreachable(e) => write!(f, "{e}"),
            Finding::Mismatch { token } => {
                write!(f, "oracle replay attached token {token} differently from gold")
            }
            Finding::Unfinished => f.write_str("oracle replay did not reach a terminal state"),
        }
    }
}

pub fn run(args: CheckArgs) {
    let bank = load_treebank_or_exit(&args.treebank);
    let system = build_system_or_exit(&args.system, bank.vocab.clone());

    let mut failed = 0;
    for (index, tree) in bank.trees.iter().enumerate() {
        let Some(finding) = check_tree(&system, tree) else {
            continue;
        };
        if finding.is_warning() && !args.strict {
            eprintln!("warning: sentence {}: {}", index, finding);
        } else {
            eprintln!("error: sentence {}: {}", index, finding);
            failed += 1;
        }
    }

    if failed > 0 {
        eprintln!();
        eprintln!("{} of {} sentences failed", failed, bank.trees.len());
        std::process::exit(1);
    }

    // Silent on success
}

/// Run the oracle on `tree` and replay it.
pub fn check_tree(system: &TransitionSystem, tree: &GoldTree) -> Option<Finding> {
    if !system.allow_nonprojective() && !tree.is_projective() {
        return Some(Finding::NonProjective);
    }

    let actions = match system.oracle_actions(tree) {
        Ok(actions) => actions,
        Err(e) => return Some(Finding::Unreachable(e)),
    };

    let mut state = system.initial_state(tree.len());
    for action in actions {
        system.perform_action(&mut state, action);
    }

    let token = (0..tree.len()).find(|&t| {
        state.heads()[t] != tree.heads()[t] || state.deprels()[t] != tree.deprels()[t]
    });
    if let Some(token) = token {
        return Some(Finding::Mismatch {
            token: token as TokenId,
        });
    }

    (!state.is_terminal()).then_some(Finding::Unfinished)
}

//! Replay the oracle with per-state costs for debugging.

use std::path::PathBuf;

use deptrans_core::GoldTree;
use deptrans_system::{PrintTracer, Result, TransitionSystem, Tracer, Verbosity};

use super::run_common::{build_system_or_exit, load_treebank_or_exit, sentence_range_or_exit};

pub struct TraceArgs {
    pub treebank: PathBuf,
    pub sentence: Option<usize>,
    pub verbosity: Verbosity,
    pub system: String,
}

pub fn run(args: TraceArgs) {
    let bank = load_treebank_or_exit(&args.treebank);
    let system = build_system_or_exit(&args.system, bank.vocab.clone());
    let range = sentence_range_or_exit(&bank, args.sentence);

    let mut failed = false;
    for index in range {
        println!("sentence {}", index);
        match trace_tree(&system, &bank.trees[index], args.verbosity) {
            Ok(lines) => {
                for line in lines {
                    println!("{}", line);
                }
            }
            Err(e) => {
                eprintln!("error: sentence {}: {}", index, e);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Trace lines for one sentence: each oracle step, followed by the cost of
/// the state it was taken in and the transition costs of every valid action.
pub fn trace_tree(
    system: &TransitionSystem,
    tree: &GoldTree,
    verbosity: Verbosity,
) -> Result<Vec<String>> {
    let actions = system.oracle_actions(tree)?;
    let mut tracer = PrintTracer::new(system, verbosity);

    let mut state = system.initial_state(tree.len());
    for (step, &action) in actions.iter().enumerate() {
        tracer.trace_oracle_step(step, &state, action);
        let valid = system.valid_actions(&state);
        system.transition_costs_with(&state, &valid, tree, &mut tracer);
        system.perform_action(&mut state, action);
    }

    Ok(tracer.lines().to_vec())
}

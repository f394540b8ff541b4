//! Print static-oracle action sequences as JSON.

use std::ops::Range;
use std::path::PathBuf;

use deptrans_core::Treebank;
use deptrans_system::{Error, TransitionSystem};
use serde::Serialize;

use super::run_common::{build_system_or_exit, load_treebank_or_exit, sentence_range_or_exit};

pub struct OracleArgs {
    pub treebank: PathBuf,
    pub sentence: Option<usize>,
    pub pretty: bool,
    pub system: String,
}

#[derive(Debug, Serialize)]
pub struct SentenceActions {
    pub sentence: usize,
    pub actions: Vec<String>,
}

pub fn run(args: OracleArgs) {
    let bank = load_treebank_or_exit(&args.treebank);
    let system = build_system_or_exit(&args.system, bank.vocab.clone());
    let range = sentence_range_or_exit(&bank, args.sentence);

    let (output, failures) = oracle_sequences(&system, &bank, range);

    for (index, e) in &failures {
        eprintln!("error: sentence {}: {}", index, e);
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    };

    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    if !failures.is_empty() {
        std::process::exit(1);
    }
}

/// Oracle action names per sentence, plus the sentences the oracle rejected.
pub fn oracle_sequences(
    system: &TransitionSystem,
    bank: &Treebank,
    range: Range<usize>,
) -> (Vec<SentenceActions>, Vec<(usize, Error)>) {
    let mut output = Vec::new();
    let mut failures = Vec::new();

    for index in range {
        match system.oracle_actions(&bank.trees[index]) {
            Ok(actions) => output.push(SentenceActions {
                sentence: index,
                actions: actions
                    .into_iter()
                    .map(|a| system.action_name(a).to_string())
                    .collect(),
            }),
            Err(e) => failures.push((index, e)),
        }
    }

    (output, failures)
}

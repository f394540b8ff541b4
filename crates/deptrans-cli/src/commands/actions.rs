//! List the action table of a transition system.

use std::path::PathBuf;

use deptrans_core::DeprelVocab;
use deptrans_system::{Action, TransitionSystem};

use super::run_common::{build_system_or_exit, load_treebank_or_exit};

/// Where the label vocabulary comes from.
pub enum LabelSource {
    List(Vec<String>),
    Treebank(PathBuf),
}

pub struct ActionsArgs {
    pub labels: LabelSource,
    pub system: String,
}

pub fn run(args: ActionsArgs) {
    let vocab: DeprelVocab = match args.labels {
        LabelSource::List(labels) => vocab_from_labels(&labels).unwrap_or_else(|msg| {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }),
        LabelSource::Treebank(path) => load_treebank_or_exit(&path).vocab,
    };
    let system = build_system_or_exit(&args.system, vocab);

    print!("{}", action_table(&system));
}

/// Intern `--labels` in order, rejecting repeats.
pub fn vocab_from_labels(labels: &[String]) -> Result<DeprelVocab, String> {
    let mut vocab = DeprelVocab::new();
    for label in labels {
        if vocab.get(label).is_some() {
            return Err(format!("duplicate label `{label}` in --labels"));
        }
        vocab.intern(label);
    }
    Ok(vocab)
}

/// One `id name` line per action, in id order.
pub fn action_table(system: &TransitionSystem) -> String {
    let width = (system.num_actions() - 1).to_string().len();
    let mut out = String::new();
    for id in 0..system.num_actions() {
        let name = system.action_name(Action::from_raw(id));
        out.push_str(&format!("{id:>width$} {name}\n"));
    }
    out
}

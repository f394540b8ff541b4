//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::{ArgGroup, Command};

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("deptrans")
        .about("Oracles and dynamic costs for transition-based dependency parsing")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(actions_command())
        .subcommand(oracle_command())
        .subcommand(check_command())
        .subcommand(trace_command())
}

/// List the action table of a system.
///
/// Labels come from `--labels`, or from the treebank when one is given.
pub fn actions_command() -> Command {
    Command::new("actions")
        .about("List action ids and names")
        .override_usage(
            "\
  deptrans actions <TREEBANK>
  deptrans actions --labels <LABELS>",
        )
        .after_help(
            r#"EXAMPLES:
  deptrans actions train.json           # labels collected from the treebank
  deptrans actions --labels nsubj,obj   # explicit label list"#,
        )
        .arg(treebank_arg())
        .arg(labels_arg())
        .arg(system_arg())
        .group(
            ArgGroup::new("label_source")
                .args(["treebank", "labels"])
                .required(true),
        )
}

/// Print static-oracle action sequences as JSON.
pub fn oracle_command() -> Command {
    Command::new("oracle")
        .about("Print the static-oracle action sequence of each sentence")
        .after_help(
            r#"EXAMPLES:
  deptrans oracle train.json                # all sentences
  deptrans oracle train.json --sentence 3   # one sentence
  cat train.json | deptrans oracle -        # from stdin"#,
        )
        .arg(treebank_arg().required(true))
        .arg(sentence_arg())
        .arg(compact_arg())
        .arg(system_arg())
}

/// Verify that every gold tree is reachable.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Check that every gold tree is rebuilt by its oracle sequence")
        .after_help(
            r#"EXAMPLES:
  deptrans check train.json             # non-projective trees are warnings
  deptrans check train.json --strict    # non-projective trees fail the check"#,
        )
        .arg(treebank_arg().required(true))
        .arg(strict_arg())
        .arg(system_arg())
}

/// Replay the oracle with per-state costs.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Replay the oracle, printing the cost and transition costs of every state")
        .after_help(
            r#"EXAMPLES:
  deptrans trace train.json --sentence 0        # actions and costs
  deptrans trace train.json --sentence 0 -v     # with state snapshots
  deptrans trace train.json --sentence 0 -vv    # also mark reused costs"#,
        )
        .arg(treebank_arg().required(true))
        .arg(sentence_arg())
        .arg(verbose_arg())
        .arg(system_arg())
}

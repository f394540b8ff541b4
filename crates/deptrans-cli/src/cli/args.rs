//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Treebank file, or `-` for stdin (positional).
pub fn treebank_arg() -> Arg {
    Arg::new("treebank")
        .value_name("TREEBANK")
        .value_parser(value_parser!(PathBuf))
        .help("JSON treebank file, or '-' to read stdin")
}

/// Transition system (--system).
pub fn system_arg() -> Arg {
    Arg::new("system")
        .long("system")
        .value_name("NAME")
        .default_value("arcstd")
        .help("Transition system (arcstd, arc-standard)")
}

/// Explicit label list (--labels).
pub fn labels_arg() -> Arg {
    Arg::new("labels")
        .long("labels")
        .value_name("LABELS")
        .value_delimiter(',')
        .help("Comma-separated dependency labels, in id order")
}

/// Restrict to one sentence (--sentence).
pub fn sentence_arg() -> Arg {
    Arg::new("sentence")
        .long("sentence")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Only process sentence N (0-based)")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty when stdout is a TTY)")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat non-projective sentences as errors")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for states, -vv to mark reused costs)")
}

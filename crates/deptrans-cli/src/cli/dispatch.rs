//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use deptrans_system::Verbosity;

use crate::commands::actions::{ActionsArgs, LabelSource};
use crate::commands::check::CheckArgs;
use crate::commands::oracle::OracleArgs;
use crate::commands::trace::TraceArgs;

pub struct ActionsParams {
    pub treebank: Option<PathBuf>,
    pub labels: Option<Vec<String>>,
    pub system: String,
}

impl ActionsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            treebank: m.get_one::<PathBuf>("treebank").cloned(),
            labels: m
                .get_many::<String>("labels")
                .map(|labels| labels.cloned().collect()),
            system: parse_system(m),
        }
    }
}

impl From<ActionsParams> for ActionsArgs {
    fn from(p: ActionsParams) -> Self {
        // clap's required group guarantees one of the two
        let labels = match (p.labels, p.treebank) {
            (Some(labels), _) => LabelSource::List(labels),
            (None, Some(path)) => LabelSource::Treebank(path),
            (None, None) => LabelSource::List(Vec::new()),
        };
        Self {
            labels,
            system: p.system,
        }
    }
}

pub struct OracleParams {
    pub treebank: PathBuf,
    pub sentence: Option<usize>,
    pub compact: bool,
    pub system: String,
}

impl OracleParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            treebank: parse_treebank_path(m),
            sentence: m.get_one::<usize>("sentence").copied(),
            compact: m.get_flag("compact"),
            system: parse_system(m),
        }
    }
}

impl From<OracleParams> for OracleArgs {
    fn from(p: OracleParams) -> Self {
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());

        Self {
            treebank: p.treebank,
            sentence: p.sentence,
            pretty,
            system: p.system,
        }
    }
}

pub struct CheckParams {
    pub treebank: PathBuf,
    pub strict: bool,
    pub system: String,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            treebank: parse_treebank_path(m),
            strict: m.get_flag("strict"),
            system: parse_system(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            treebank: p.treebank,
            strict: p.strict,
            system: p.system,
        }
    }
}

pub struct TraceParams {
    pub treebank: PathBuf,
    pub sentence: Option<usize>,
    pub verbose: u8,
    pub system: String,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            treebank: parse_treebank_path(m),
            sentence: m.get_one::<usize>("sentence").copied(),
            verbose: m.get_count("verbose"),
            system: parse_system(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            treebank: p.treebank,
            sentence: p.sentence,
            verbosity,
            system: p.system,
        }
    }
}

fn parse_treebank_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("treebank")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_system(m: &ArgMatches) -> String {
    m.get_one::<String>("system")
        .cloned()
        .unwrap_or_else(|| "arcstd".to_string())
}

mod cli;
mod commands;

use cli::{ActionsParams, CheckParams, OracleParams, TraceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("actions", m)) => {
            let params = ActionsParams::from_matches(m);
            commands::actions::run(params.into());
        }
        Some(("oracle", m)) => {
            let params = OracleParams::from_matches(m);
            commands::oracle::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

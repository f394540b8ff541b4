//! Tracing infrastructure for oracle and cost computations.
//!
//! The tracer is a zero-cost abstraction: the plain entry points
//! (`oracle_actions`, `transition_costs`) run with `NoopTracer`, whose empty
//! `#[inline(always)]` methods are removed by the compiler along with their
//! arguments. `PrintTracer` collects human-readable lines instead.
//!
//! Tracers receive raw data (states, action ids, costs). Name resolution and
//! formatting happen in the tracer implementation.

use crate::{Action, State, TransitionSystem};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Default: action names and cost values only.
    #[default]
    Default,
    /// Verbose (-v): state snapshots next to every line.
    Verbose,
    /// Very verbose (-vv): also mark transition costs reused from a wrong action.
    VeryVerbose,
}

/// Instrumentation hooks.
///
/// - `trace_oracle_step` - the static oracle picked `action` in `state`
/// - `trace_cost` - the cost function evaluated `state`
/// - `trace_transition_cost` - the adapter produced a delta for a candidate
pub trait Tracer {
    /// Called before the oracle applies the action it picked.
    fn trace_oracle_step(&mut self, step: usize, state: &State, action: Action);

    /// Called once per state whose transition costs are requested.
    fn trace_cost(&mut self, state: &State, cost: u32);

    /// Called for every candidate action. `reused` is true when the delta was
    /// copied from an earlier wrong action of the same kind.
    fn trace_transition_cost(&mut self, action: Action, delta: f32, reused: bool);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_oracle_step(&mut self, _step: usize, _state: &State, _action: Action) {}

    #[inline(always)]
    fn trace_cost(&mut self, _state: &State, _cost: u32) {}

    #[inline(always)]
    fn trace_transition_cost(&mut self, _action: Action, _delta: f32, _reused: bool) {}
}

/// Tracer that collects lines for display.
pub struct PrintTracer<'s> {
    /// Resolves action ids to names.
    system: &'s TransitionSystem,
    verbosity: Verbosity,
    lines: Vec<String>,
}

impl<'s> PrintTracer<'s> {
    pub fn new(system: &'s TransitionSystem, verbosity: Verbosity) -> Self {
        Self {
            system,
            verbosity,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drop collected lines, keeping the configuration.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn with_state(&self, line: String, state: &State) -> String {
        if self.verbosity >= Verbosity::Verbose {
            format!("{line}  {state}")
        } else {
            line
        }
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_oracle_step(&mut self, step: usize, state: &State, action: Action) {
        let line = format!("{step:>3} {}", self.system.action_name(action));
        let line = self.with_state(line, state);
        self.lines.push(line);
    }

    fn trace_cost(&mut self, state: &State, cost: u32) {
        let line = self.with_state(format!("cost {cost}"), state);
        self.lines.push(line);
    }

    fn trace_transition_cost(&mut self, action: Action, delta: f32, reused: bool) {
        let mut line = format!("    {} {delta:+}", self.system.action_name(action));
        if reused && self.verbosity >= Verbosity::VeryVerbose {
            line.push_str(" (reused)");
        }
        self.lines.push(line);
    }
}

//! Transition-system selection.
//!
//! The set of systems is closed, so selection is an enum rather than a trait
//! object. Every operation delegates to the concrete system.

use std::fmt;
use std::str::FromStr;

use deptrans_core::{DeprelVocab, GoldTree};

use crate::trace::Tracer;
use crate::{Action, ArcStandard, Error, Result, State};

/// Identifier of a supported transition system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SystemKind {
    #[default]
    ArcStandard,
}

impl SystemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SystemKind::ArcStandard => ArcStandard::NAME,
        }
    }
}

impl FromStr for SystemKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "arcstd" | "arc-standard" => Ok(SystemKind::ArcStandard),
            _ => Err(Error::UnknownSystem(s.to_string())),
        }
    }
}

impl fmt::Display for SystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A constructed transition system.
#[derive(Debug, Clone)]
pub enum TransitionSystem {
    ArcStandard(ArcStandard),
}

impl TransitionSystem {
    pub fn new(kind: SystemKind, deprels: DeprelVocab) -> Self {
        match kind {
            SystemKind::ArcStandard => TransitionSystem::ArcStandard(ArcStandard::new(deprels)),
        }
    }

    /// Build a system from its name (`arcstd` or `arc-standard`).
    pub fn from_name(name: &str, deprels: DeprelVocab) -> Result<Self> {
        Ok(Self::new(name.parse()?, deprels))
    }

    pub fn kind(&self) -> SystemKind {
        match self {
            TransitionSystem::ArcStandard(_) => SystemKind::ArcStandard,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransitionSystem::ArcStandard(system) => system.name(),
        }
    }

    pub fn deprels(&self) -> &DeprelVocab {
        match self {
            TransitionSystem::ArcStandard(system) => system.deprels(),
        }
    }

    pub fn num_actions(&self) -> u32 {
        match self {
            TransitionSystem::ArcStandard(system) => system.num_actions(),
        }
    }

    pub fn allow_nonprojective(&self) -> bool {
        match self {
            TransitionSystem::ArcStandard(system) => system.allow_nonprojective(),
        }
    }

    pub fn action_name(&self, action: Action) -> &str {
        match self {
            TransitionSystem::ArcStandard(system) => system.action_name(action),
        }
    }

    pub fn action_names(&self) -> &[String] {
        match self {
            TransitionSystem::ArcStandard(system) => system.action_names(),
        }
    }

    pub fn initial_state(&self, len: usize) -> State {
        match self {
            TransitionSystem::ArcStandard(system) => system.initial_state(len),
        }
    }

    pub fn is_valid_action(&self, state: &State, action: Action) -> bool {
        match self {
            TransitionSystem::ArcStandard(system) => system.is_valid_action(state, action),
        }
    }

    pub fn valid_actions(&self, state: &State) -> Vec<Action> {
        match self {
            TransitionSystem::ArcStandard(system) => system.valid_actions(state),
        }
    }

    pub fn perform_action(&self, state: &mut State, action: Action) {
        match self {
            TransitionSystem::ArcStandard(system) => system.perform_action(state, action),
        }
    }

    pub fn oracle_actions(&self, tree: &GoldTree) -> Result<Vec<Action>> {
        match self {
            TransitionSystem::ArcStandard(system) => system.oracle_actions(tree),
        }
    }

    pub fn oracle_actions_with<T: Tracer>(
        &self,
        tree: &GoldTree,
        tracer: &mut T,
    ) -> Result<Vec<Action>> {
        match self {
            TransitionSystem::ArcStandard(system) => system.oracle_actions_with(tree, tracer),
        }
    }

    pub fn cost(&self, state: &State, gold: &GoldTree) -> u32 {
        match self {
            TransitionSystem::ArcStandard(system) => system.cost(state, gold),
        }
    }

    pub fn transition_costs(&self, state: &State, actions: &[Action], gold: &GoldTree) -> Vec<f32> {
        match self {
            TransitionSystem::ArcStandard(system) => system.transition_costs(state, actions, gold),
        }
    }

    pub fn transition_costs_with<T: Tracer>(
        &self,
        state: &State,
        actions: &[Action],
        gold: &GoldTree,
        tracer: &mut T,
    ) -> Vec<f32> {
        match self {
            TransitionSystem::ArcStandard(system) => {
                system.transition_costs_with(state, actions, gold, tracer)
            }
        }
    }
}

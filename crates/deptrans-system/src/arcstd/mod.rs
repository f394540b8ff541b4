//! Arc-standard transition system.
//!
//! Three moves over the stack/buffer configuration of `State`:
//! - SHIFT moves the buffer front onto the stack
//! - LEFT-l attaches the second stack token under the top one
//! - RIGHT-l attaches the top stack token under the second one
//!
//! The system only builds projective trees.

mod cost;
mod oracle;
mod transition_costs;

#[cfg(test)]
mod arcstd_tests;
#[cfg(test)]
mod cost_tests;
#[cfg(test)]
mod transition_costs_tests;

pub use cost::CostFunction;

use deptrans_core::{DeprelId, DeprelVocab};

use crate::{Action, ActionKind, State};

/// Arc-standard system over a fixed label vocabulary.
#[derive(Debug, Clone)]
pub struct ArcStandard {
    deprels: DeprelVocab,
    /// Indexed by action id.
    action_names: Vec<String>,
}

impl ArcStandard {
    pub const NAME: &'static str = "arcstd";

    pub fn new(deprels: DeprelVocab) -> Self {
        let mut action_names = Vec::with_capacity(1 + 2 * deprels.len());
        action_names.push("SHIFT".to_string());
        for (_, label) in deprels.iter() {
            action_names.push(format!("LEFT-{label}"));
            action_names.push(format!("RIGHT-{label}"));
        }
        Self {
            deprels,
            action_names,
        }
    }

    /// System identifier.
    #[inline]
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    #[inline]
    pub fn deprels(&self) -> &DeprelVocab {
        &self.deprels
    }

    /// `1 + 2 * |labels|`.
    #[inline]
    pub fn num_actions(&self) -> u32 {
        self.action_names.len() as u32
    }

    /// Arc-standard cannot build trees with crossing arcs.
    #[inline]
    pub fn allow_nonprojective(&self) -> bool {
        false
    }

    /// `SHIFT`, `LEFT-<label>` or `RIGHT-<label>`.
    ///
    /// # Panics
    /// Panics if the action id is out of range.
    pub fn action_name(&self, action: Action) -> &str {
        self.ensure_action(action);
        &self.action_names[action.as_u32() as usize]
    }

    /// All action names, indexed by action id.
    pub fn action_names(&self) -> &[String] {
        &self.action_names
    }

    #[inline]
    pub fn shift_action(&self) -> Action {
        Action::SHIFT
    }

    #[inline]
    pub fn left_action(&self, deprel: DeprelId) -> Action {
        Action::left(deprel)
    }

    #[inline]
    pub fn right_action(&self, deprel: DeprelId) -> Action {
        Action::right(deprel)
    }

    /// Iterate over every action id, SHIFT first.
    pub fn actions(&self) -> impl Iterator<Item = Action> + use<> {
        (0..self.num_actions()).map(Action::from_raw)
    }

    /// Start state for a sentence of `len` tokens, ROOT included.
    pub fn initial_state(&self, len: usize) -> State {
        State::new(len)
    }

    pub fn is_valid_action(&self, state: &State, action: Action) -> bool {
        match action.kind() {
            ActionKind::Shift => !state.buffer_exhausted(),
            ActionKind::Left | ActionKind::Right if state.stack.len() < 3 => false,
            // ROOT never becomes a dependent. It is shifted last, so in
            // practice only RIGHT can reach it.
            ActionKind::Left => state.second() != Some(state.root()),
            ActionKind::Right => state.top() != Some(state.root()),
        }
    }

    /// Valid actions in id order.
    ///
    /// # Panics
    /// Panics if nothing is valid in a non-terminal state.
    pub fn valid_actions(&self, state: &State) -> Vec<Action> {
        let valid: Vec<Action> = self
            .actions()
            .filter(|&a| self.is_valid_action(state, a))
            .collect();
        self.ensure_some_valid(state, &valid);
        valid
    }

    /// Apply an action in place. O(1).
    ///
    /// The action must be valid for the state; this is only checked in debug
    /// builds.
    pub fn perform_action(&self, state: &mut State, action: Action) {
        self.ensure_action(action);
        debug_assert!(
            self.is_valid_action(state, action),
            "ArcStandard: {} is not valid in {state}",
            self.action_names[action.as_u32() as usize]
        );
        match action.kind() {
            ActionKind::Shift => state.shift(),
            ActionKind::Left => state.left(action.deprel()),
            ActionKind::Right => state.right(action.deprel()),
        }
    }
}

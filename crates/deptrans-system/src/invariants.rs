//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{Action, ArcStandard, State};

impl ArcStandard {
    pub(crate) fn ensure_action(&self, action: Action) {
        if action.as_u32() >= self.num_actions() {
            panic!(
                "ArcStandard: action id {} out of range (system has {} actions)",
                action.as_u32(),
                self.num_actions()
            );
        }
    }

    pub(crate) fn ensure_some_valid(&self, state: &State, valid: &[Action]) {
        if valid.is_empty() && !state.is_terminal() {
            panic!("ArcStandard: no valid action in non-terminal state {state}");
        }
    }
}

impl State {
    pub(crate) fn ensure_can_shift(&self) {
        if self.buffer_exhausted() {
            panic!("State: SHIFT with an exhausted buffer in {self}");
        }
    }

    pub(crate) fn ensure_can_reduce(&self, name: &str) {
        if self.stack_depth() < 2 {
            panic!("State: {name} needs two stack tokens, {self} has {}", self.stack_depth());
        }
    }
}

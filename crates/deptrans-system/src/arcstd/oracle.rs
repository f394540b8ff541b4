//! Static oracle.
//!
//! Greedy rule, evaluated on the current state until it is terminal:
//! 1. LEFT when the second stack token's gold head is the top token.
//! 2. RIGHT when the top token's gold head is the second one and every gold
//!    dependent of the top token is already attached.
//! 3. SHIFT otherwise.
//!
//! Rule 2 is the only non-local test. Instead of scanning the sentence for
//! unattached dependents at every step, the oracle keeps a count of pending
//! gold dependents per token.

use deptrans_core::{GoldTree, TokenId};

use super::ArcStandard;
use crate::trace::{NoopTracer, Tracer};
use crate::{Action, Error, Result, State};

impl ArcStandard {
    /// Canonical action sequence building exactly `tree` from the initial state.
    ///
    /// Fails with `Error::Unreachable` when the oracle has to shift with an
    /// exhausted buffer, i.e. the tree is not projective.
    pub fn oracle_actions(&self, tree: &GoldTree) -> Result<Vec<Action>> {
        self.oracle_actions_with(tree, &mut NoopTracer)
    }

    /// Same as `oracle_actions`, reporting every step to `tracer`.
    pub fn oracle_actions_with<T: Tracer>(
        &self,
        tree: &GoldTree,
        tracer: &mut T,
    ) -> Result<Vec<Action>> {
        let mut state = self.initial_state(tree.len());
        let mut pending = pending_dependents(tree);
        let mut actions = Vec::with_capacity(2 * tree.len());

        while !state.is_terminal() {
            let action = next_action(&state, tree, &pending).ok_or(Error::Unreachable {
                system: Self::NAME,
                step: actions.len(),
                stack_depth: state.stack_depth(),
            })?;
            tracer.trace_oracle_step(actions.len(), &state, action);

            if let Some(head) = reduced_head(&state, action) {
                pending[head as usize] -= 1;
            }
            self.perform_action(&mut state, action);
            actions.push(action);
        }

        Ok(actions)
    }
}

fn pending_dependents(tree: &GoldTree) -> Vec<u32> {
    let mut pending = vec![0; tree.len()];
    for token in 0..tree.len() as TokenId {
        if token != tree.root() {
            pending[tree.head(token) as usize] += 1;
        }
    }
    pending
}

/// `None` means the rule asked for SHIFT with nothing left to shift.
fn next_action(state: &State, tree: &GoldTree, pending: &[u32]) -> Option<Action> {
    if let (Some(top0), Some(top1)) = (state.top(), state.second()) {
        if tree.head(top1) == top0 {
            return Some(Action::left(tree.deprel(top1)));
        }
        if tree.head(top0) == top1 && pending[top0 as usize] == 0 {
            return Some(Action::right(tree.deprel(top0)));
        }
    }

    (!state.buffer_exhausted()).then_some(Action::SHIFT)
}

/// Head that gains an attached dependent when `action` is applied.
fn reduced_head(state: &State, action: Action) -> Option<TokenId> {
    if action.is_left() {
        state.top()
    } else if action.is_right() {
        state.second()
    } else {
        None
    }
}

//! Per-action cost deltas for cost-augmented training.
//!
//! `delta(a) = cost(state) - cost(state after a)`, so 0 marks an action that
//! loses nothing and negative values measure how much is lost.
//!
//! LEFT actions that build the wrong arc differ only in their label, and so do
//! wrong RIGHT actions. Only the first wrong action of each kind is evaluated;
//! the others reuse its delta. SHIFT and the (at most one) correct LEFT and
//! RIGHT are always evaluated.

use deptrans_core::GoldTree;

use super::{ArcStandard, CostFunction};
use crate::trace::{NoopTracer, Tracer};
use crate::{Action, ActionKind, State};

impl ArcStandard {
    /// Cost deltas aligned with `actions`.
    ///
    /// Every candidate must be valid in `state`.
    pub fn transition_costs(&self, state: &State, actions: &[Action], gold: &GoldTree) -> Vec<f32> {
        self.transition_costs_with(state, actions, gold, &mut NoopTracer)
    }

    pub fn transition_costs_with<T: Tracer>(
        &self,
        state: &State,
        actions: &[Action],
        gold: &GoldTree,
        tracer: &mut T,
    ) -> Vec<f32> {
        let mut cost_fn = CostFunction::new(gold);
        let current = cost_fn.cost(state);
        tracer.trace_cost(state, current);

        let mut delta = |action: Action| {
            let mut next = state.clone();
            self.perform_action(&mut next, action);
            current as f32 - cost_fn.cost(&next) as f32
        };

        let mut wrong_left: Option<f32> = None;
        let mut wrong_right: Option<f32> = None;
        let mut costs = Vec::with_capacity(actions.len());

        for &action in actions {
            let (value, reused) = match action.kind() {
                ActionKind::Shift => (delta(action), false),
                _ if builds_gold_arc(state, action, gold) => (delta(action), false),
                kind => {
                    let cached = match kind {
                        ActionKind::Left => &mut wrong_left,
                        _ => &mut wrong_right,
                    };
                    match *cached {
                        Some(value) => (value, true),
                        None => {
                            let value = delta(action);
                            *cached = Some(value);
                            (value, false)
                        }
                    }
                }
            };
            tracer.trace_transition_cost(action, value, reused);
            costs.push(value);
        }

        costs
    }
}

/// The arc `action` would add, head and label, is in the gold tree.
fn builds_gold_arc(state: &State, action: Action, gold: &GoldTree) -> bool {
    debug_assert!(state.stack_depth() >= 2, "arc action needs two stack tokens");
    let (top, second) = match (state.top(), state.second()) {
        (Some(top), Some(second)) => (top, second),
        _ => return false,
    };
    let (head, modifier) = if action.is_left() {
        (top, second)
    } else {
        (second, top)
    };
    gold.head(modifier) == head && gold.deprel(modifier) == action.deprel()
}

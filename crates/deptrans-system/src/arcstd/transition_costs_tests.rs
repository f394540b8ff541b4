use crate::test_utils::{all_trees, five_tokens, replay, system, three_tokens};
use crate::Action;

#[test]
fn three_token_deltas() {
    let system = system();
    let tree = three_tokens();
    let state = replay(&system, 3, &[Action::SHIFT, Action::SHIFT]);
    let valid = system.valid_actions(&state);
    assert_eq!(valid.len(), 7);

    let costs = system.transition_costs(&state, &valid, &tree);

    assert_eq!(costs, vec![-1.0, -2.0, -1.0, -2.0, 0.0, -2.0, -1.0]);
}

#[test]
fn five_token_deltas() {
    let system = system();
    let tree = five_tokens();
    let state = replay(&system, 5, &[Action::SHIFT, Action::SHIFT, Action::SHIFT]);
    let valid = system.valid_actions(&state);

    let costs = system.transition_costs(&state, &valid, &tree);

    assert_eq!(costs, vec![0.0, -3.0, -1.0, -3.0, -1.0, -3.0, -1.0]);
}

#[test]
fn candidate_subset_keeps_order() {
    let system = system();
    let tree = three_tokens();
    let state = replay(&system, 3, &[Action::SHIFT, Action::SHIFT]);

    let costs = system.transition_costs(&state, &[Action::right(1), Action::SHIFT], &tree);

    assert_eq!(costs, vec![0.0, -1.0]);
}

#[test]
fn no_candidates() {
    let system = system();
    let tree = three_tokens();

    assert!(system.transition_costs(&system.initial_state(3), &[], &tree).is_empty());
}

/// Along every oracle path: the oracle action loses nothing, no action gains
/// anything, and the shared delta of wrong arcs equals evaluating each one.
#[test]
fn deltas_match_full_evaluation() {
    let system = system();

    for len in 1..=6 {
        for tree in all_trees(len).into_iter().filter(|t| t.is_projective()) {
            let mut state = system.initial_state(len);
            for action in system.oracle_actions(&tree).unwrap() {
                let valid = system.valid_actions(&state);
                let costs = system.transition_costs(&state, &valid, &tree);

                let current = system.cost(&state, &tree) as f32;
                for (&candidate, &delta) in valid.iter().zip(&costs) {
                    let mut next = state.clone();
                    system.perform_action(&mut next, candidate);
                    let expected = current - system.cost(&next, &tree) as f32;
                    assert_eq!(delta, expected, "{:?} at {state}", tree.heads());
                    assert!(delta <= 0.0);
                }

                let chosen = valid.iter().position(|&a| a == action).unwrap();
                assert_eq!(costs[chosen], 0.0);

                system.perform_action(&mut state, action);
            }
        }
    }
}

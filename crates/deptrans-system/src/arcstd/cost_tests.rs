use crate::test_utils::{all_trees, five_tokens, replay, system, three_tokens};
use crate::{Action, ArcStandard, CostFunction};

#[test]
fn initial_state_costs_nothing() {
    let system = system();
    let tree = five_tokens();

    assert_eq!(system.cost(&system.initial_state(tree.len()), &tree), 0);
}

#[test]
fn wrong_arcs_cost() {
    let system = system();
    let tree = five_tokens();
    let shifted = replay(&system, 5, &[Action::SHIFT, Action::SHIFT, Action::SHIFT]);
    assert_eq!(system.cost(&shifted, &tree), 0);

    // 2 attached under 1: one gold arc lost
    let mut right = shifted.clone();
    system.perform_action(&mut right, Action::right(0));
    assert_eq!(system.cost(&right, &tree), 1);

    // 1 attached under 2 buries 0 and 2 behind a wrong head
    let mut left = shifted.clone();
    system.perform_action(&mut left, Action::left(0));
    assert_eq!(system.cost(&left, &tree), 3);
}

#[test]
fn wrong_label_costs_one() {
    let system = system();
    let tree = three_tokens();
    let mut state = replay(&system, 3, &[Action::SHIFT, Action::SHIFT]);

    system.perform_action(&mut state, Action::right(2));
    assert_eq!(system.cost(&state, &tree), 1);
}

#[test]
fn terminal_oracle_state_costs_nothing() {
    let system = system();
    let tree = three_tokens();
    let actions = system.oracle_actions(&tree).unwrap();

    assert_eq!(system.cost(&replay(&system, 3, &actions), &tree), 0);
}

#[test]
fn reused_evaluator_matches_one_shot() {
    let system = system();
    let tree = five_tokens();
    let mut cost_fn = CostFunction::new(&tree);
    let mut state = system.initial_state(tree.len());

    for action in [
        Action::SHIFT,
        Action::SHIFT,
        Action::SHIFT,
        Action::left(1),
        Action::SHIFT,
        Action::right(0),
    ] {
        system.perform_action(&mut state, action);
        assert_eq!(cost_fn.cost(&state), system.cost(&state, &tree));
    }
    assert!(std::ptr::eq(cost_fn.gold(), &tree));
}

/// Along every oracle path of every small projective tree the cost stays 0.
#[test]
fn oracle_path_is_free() {
    let system = system();

    for len in 1..=6 {
        for tree in all_trees(len).into_iter().filter(|t| t.is_projective()) {
            let mut cost_fn = CostFunction::new(&tree);
            let mut state = system.initial_state(len);
            for action in system.oracle_actions(&tree).unwrap() {
                assert_eq!(cost_fn.cost(&state), 0, "{:?} at {state}", tree.heads());
                system.perform_action(&mut state, action);
            }
            assert_eq!(cost_fn.cost(&state), 0, "{:?}", tree.heads());
        }
    }
}


/// Every reachable state can still be completed: the cost never exceeds the
/// number of arcs in the sentence.
#[test]
fn reachable_states_have_bounded_cost() {
    let system = ArcStandard::new(["dep"].into_iter().collect());

    for len in 1..=4 {
        for tree in all_trees(len).into_iter().filter(|t| t.is_projective()) {
            let mut cost_fn = CostFunction::new(&tree);
            let mut pending = vec![system.initial_state(len)];
            while let Some(state) = pending.pop() {
                assert!(cost_fn.cost(&state) < len as u32, "{:?} at {state}", tree.heads());
                for action in system.valid_actions(&state) {
                    let mut next = state.clone();
                    system.perform_action(&mut next, action);
                    pending.push(next);
                }
            }
        }
    }
}

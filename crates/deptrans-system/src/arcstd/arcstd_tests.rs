use deptrans_core::{BAD_HEAD, DeprelVocab};

use crate::state::STACK_GUARD;
use crate::test_utils::{replay, system};
use crate::{Action, ArcStandard};

#[test]
fn action_table() {
    let system = system();

    assert_eq!(system.num_actions(), 7);
    insta::assert_snapshot!(system.action_names().join("\n"), @r"
    SHIFT
    LEFT-L0
    RIGHT-L0
    LEFT-L1
    RIGHT-L1
    LEFT-L2
    RIGHT-L2
    ");
}

#[test]
fn names_match_constructors() {
    let system = system();

    assert_eq!(system.action_name(system.shift_action()), "SHIFT");
    assert_eq!(system.action_name(system.left_action(1)), "LEFT-L1");
    assert_eq!(system.action_name(system.right_action(2)), "RIGHT-L2");
}

#[test]
fn empty_vocab_only_shifts() {
    let system = ArcStandard::new(DeprelVocab::new());

    assert_eq!(system.num_actions(), 1);
    assert_eq!(system.actions().collect::<Vec<_>>(), vec![Action::SHIFT]);
}

#[test]
#[should_panic(expected = "action id 7 out of range")]
fn out_of_range_action_panics() {
    system().action_name(Action::from_raw(7));
}

#[test]
fn only_shift_at_start() {
    let system = system();
    let state = system.initial_state(4);

    assert_eq!(system.valid_actions(&state), vec![Action::SHIFT]);
}

#[test]
fn arcs_need_two_stack_tokens() {
    let system = system();
    let state = replay(&system, 4, &[Action::SHIFT]);

    assert!(!system.is_valid_action(&state, Action::left(0)));
    assert!(!system.is_valid_action(&state, Action::right(0)));
    assert_eq!(system.valid_actions(&state), vec![Action::SHIFT]);
}

#[test]
fn everything_valid_mid_sentence() {
    let system = system();
    let state = replay(&system, 4, &[Action::SHIFT, Action::SHIFT]);

    assert_eq!(
        system.valid_actions(&state),
        system.actions().collect::<Vec<_>>()
    );
}

#[test]
fn root_on_top_only_heads() {
    let system = system();
    let state = replay(
        &system,
        3,
        &[Action::SHIFT, Action::SHIFT, Action::right(0), Action::SHIFT],
    );

    assert_eq!(state.top(), Some(2));
    assert_eq!(state.second(), Some(0));
    assert_eq!(
        system.valid_actions(&state),
        vec![Action::left(0), Action::left(1), Action::left(2)]
    );
}

/// Walk every valid action sequence: ROOT never gets a head, a non-terminal
/// state always has a move, and every terminal state holds ROOT alone.
#[test]
fn root_is_never_attached() {
    let system = ArcStandard::new(["dep"].into_iter().collect());

    for len in 1..=5 {
        let mut pending = vec![system.initial_state(len)];
        while let Some(state) = pending.pop() {
            assert_eq!(state.heads()[state.root() as usize], BAD_HEAD, "{state}");

            let valid = system.valid_actions(&state);
            if state.is_terminal() {
                assert_eq!(state.stack(), &[STACK_GUARD, state.root()]);
                assert!(valid.is_empty());
            }
            for action in valid {
                let mut next = state.clone();
                system.perform_action(&mut next, action);
                pending.push(next);
            }
        }
    }
}

#[test]
fn terminal_state_has_no_valid_action() {
    let system = system();
    let state = replay(&system, 2, &[Action::SHIFT, Action::SHIFT, Action::left(0)]);

    assert!(state.is_terminal());
    assert!(system.valid_actions(&state).is_empty());
}

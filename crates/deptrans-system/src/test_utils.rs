//! Shared fixtures for transition-system tests.

use deptrans_core::{BAD_DEPREL, BAD_HEAD, DeprelVocab, GoldTree, TokenId};

use crate::{Action, ArcStandard, State, SystemKind, TransitionSystem};

/// Three labels, `L0`..`L2`.
pub fn vocab() -> DeprelVocab {
    ["L0", "L1", "L2"].into_iter().collect()
}

pub fn system() -> ArcStandard {
    ArcStandard::new(vocab())
}

/// Same system behind the factory.
pub fn transition_system() -> TransitionSystem {
    TransitionSystem::new(SystemKind::ArcStandard, vocab())
}

/// Gold tree from heads, labels for non-root tokens, ROOT last.
pub fn gold(heads: &[TokenId], deprels: &[u32]) -> GoldTree {
    let mut h = heads.to_vec();
    h.push(BAD_HEAD);
    let mut d = deprels.to_vec();
    d.push(BAD_DEPREL);
    GoldTree::new(h, d).expect("fixture tree should be valid")
}

/// `0 <-L0- 2`, `1 <-L1- 0`, ROOT = 2.
pub fn three_tokens() -> GoldTree {
    gold(&[2, 0], &[0, 1])
}

/// Projective five-token tree: `0 <- 1 <- 4`, `2 <- 3 <- 1`.
pub fn five_tokens() -> GoldTree {
    gold(&[1, 4, 3, 1], &[0, 1, 2, 0])
}

/// Five tokens whose arcs `2 -> 0` and `4 -> 1` cross.
pub fn crossing_arcs() -> GoldTree {
    gold(&[2, 4, 4, 1], &[0, 0, 0, 0])
}

/// Apply `actions` from the initial state.
pub fn replay(system: &ArcStandard, len: usize, actions: &[Action]) -> State {
    let mut state = system.initial_state(len);
    for &action in actions {
        system.perform_action(&mut state, action);
    }
    state
}

/// Every gold tree of `len` tokens with ROOT last, labelled `token % 3`.
pub fn all_trees(len: usize) -> Vec<GoldTree> {
    let n = len as TokenId;
    let non_root = len - 1;
    let mut trees = Vec::new();
    let mut heads = vec![0; non_root];

    loop {
        let mut full = heads.clone();
        full.push(BAD_HEAD);
        let mut deprels: Vec<u32> = (0..non_root as u32).map(|t| t % 3).collect();
        deprels.push(BAD_DEPREL);
        if let Ok(tree) = GoldTree::new(full, deprels) {
            trees.push(tree);
        }

        // odometer over head assignments
        let mut pos = 0;
        loop {
            if pos == non_root {
                return trees;
            }
            heads[pos] += 1;
            if heads[pos] < n {
                break;
            }
            heads[pos] = 0;
            pos += 1;
        }
    }
}

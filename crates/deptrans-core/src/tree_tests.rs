use crate::{BAD_DEPREL, BAD_HEAD, GoldTree, TreeError};

fn tree(heads: &[u32]) -> Result<GoldTree, TreeError> {
    let deprels = heads
        .iter()
        .map(|&h| if h == BAD_HEAD { BAD_DEPREL } else { 0 })
        .collect();
    GoldTree::new(heads.to_vec(), deprels)
}

#[test]
fn accepts_root_last_tree() {
    let t = tree(&[2, 0, BAD_HEAD]).unwrap();

    assert_eq!(t.len(), 3);
    assert_eq!(t.root(), 2);
    assert_eq!(t.head(1), 0);
    assert_eq!(t.deprel(2), BAD_DEPREL);
}

#[test]
fn single_token_is_just_root() {
    let t = tree(&[BAD_HEAD]).unwrap();
    assert_eq!(t.root(), 0);
    assert!(t.dependents()[0].is_empty());
}

#[test]
fn rejects_empty() {
    assert_eq!(GoldTree::new(vec![], vec![]), Err(TreeError::Empty));
}

#[test]
fn rejects_length_mismatch() {
    let err = GoldTree::new(vec![1, BAD_HEAD], vec![0]).unwrap_err();
    assert_eq!(
        err,
        TreeError::LengthMismatch {
            heads: 2,
            deprels: 1
        }
    );
}

#[test]
fn rejects_missing_root() {
    assert_eq!(tree(&[1, 0]), Err(TreeError::NoRoot));
}

#[test]
fn rejects_several_roots() {
    assert_eq!(
        tree(&[BAD_HEAD, 2, BAD_HEAD]),
        Err(TreeError::MultipleRoots {
            first: 0,
            second: 2
        })
    );
}

#[test]
fn rejects_root_first() {
    assert_eq!(
        tree(&[BAD_HEAD, 0, 0]),
        Err(TreeError::RootNotLast { root: 0, last: 2 })
    );
}

#[test]
fn rejects_head_outside_sentence() {
    assert_eq!(
        tree(&[7, BAD_HEAD]),
        Err(TreeError::HeadOutOfRange { token: 0, head: 7 })
    );
}

#[test]
fn rejects_self_attachment() {
    assert_eq!(tree(&[0, BAD_HEAD]), Err(TreeError::Cycle { token: 0 }));
}

#[test]
fn rejects_cycle() {
    // 0 -> 1 -> 2 -> 0, ROOT unreachable from any of them
    let err = tree(&[1, 2, 0, BAD_HEAD]).unwrap_err();
    assert!(matches!(err, TreeError::Cycle { .. }), "{err:?}");
}

#[test]
fn dependents_are_grouped_by_head() {
    let t = tree(&[1, 4, 3, 1, BAD_HEAD]).unwrap();
    let deps = t.dependents();

    assert_eq!(deps[1], vec![0, 3]);
    assert_eq!(deps[3], vec![2]);
    assert_eq!(deps[4], vec![1]);
    assert!(deps[0].is_empty());
}

#[test]
fn projective_tree() {
    assert!(tree(&[1, 4, 3, 1, BAD_HEAD]).unwrap().is_projective());
}

#[test]
fn crossing_arcs_are_not_projective() {
    // arcs 2-0 and 3-1 cross
    let t = tree(&[2, 3, 4, 4, BAD_HEAD]).unwrap();
    assert!(!t.is_projective());
}

#[test]
fn error_messages() {
    assert_eq!(
        TreeError::RootNotLast { root: 0, last: 3 }.to_string(),
        "root is token 0 but the last token is 3"
    );
    let wrapped = TreeError::Sentence {
        index: 4,
        source: Box::new(TreeError::NoRoot),
    };
    assert_eq!(
        wrapped.to_string(),
        "sentence 4: sentence has no root (every token has a head)"
    );
}

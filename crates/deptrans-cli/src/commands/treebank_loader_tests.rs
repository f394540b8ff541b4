use std::path::Path;

use indoc::indoc;

use super::treebank_loader::{LoadError, load_treebank, treebank_from_str};

pub(crate) const SAMPLE: &str = indoc! {r#"
    {
        "deprels": ["L0", "L1", "L2"],
        "sentences": [
            {
                "words": ["a", "b", "ROOT"],
                "heads": [2, 0, null],
                "deprels": ["L0", "L1", null]
            },
            {
                "heads": [2, 4, 4, 1, null],
                "deprels": ["L0", "L0", "L0", "L0", null]
            }
        ]
    }
"#};

#[test]
fn loads_sample() {
    let bank = treebank_from_str(SAMPLE).unwrap();

    assert_eq!(bank.vocab.len(), 3);
    assert_eq!(bank.trees.len(), 2);
    assert_eq!(bank.trees[1].len(), 5);
}

#[test]
fn malformed_json() {
    let err = treebank_from_str("{ \"sentences\": [").unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
}

#[test]
fn invalid_tree() {
    let err = treebank_from_str(indoc! {r#"
        { "sentences": [ { "heads": [null, 0], "deprels": [null, "x"] } ] }
    "#})
    .unwrap_err();

    insta::assert_snapshot!(err, @"invalid treebank: sentence 0: root is token 0 but the last token is 1");
}

#[test]
fn missing_file() {
    let err = load_treebank(Path::new("/nonexistent/treebank.json")).unwrap_err();

    assert!(matches!(err, LoadError::File { .. }));
    assert!(err.to_string().starts_with("failed to read '/nonexistent/treebank.json': "));
}

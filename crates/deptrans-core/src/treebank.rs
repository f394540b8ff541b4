//! JSON treebank interchange.
//!
//! Two layers, as for any external format:
//! - **Deserialization layer**: `RawTreebank`/`RawSentence`, 1:1 with the JSON
//! - **Validated layer**: `Treebank`, labels interned and trees checked

use crate::{BAD_DEPREL, BAD_HEAD, DeprelVocab, GoldTree, TokenId, TreeError};

/// Raw treebank document.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawTreebank {
    /// Declared label set. Its order fixes the first label ids.
    #[serde(default)]
    pub deprels: Vec<String>,
    pub sentences: Vec<RawSentence>,
}

/// Raw sentence. ROOT is the last entry; its head and label are `null`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawSentence {
    #[serde(default)]
    pub words: Vec<String>,
    pub heads: Vec<Option<TokenId>>,
    pub deprels: Vec<Option<String>>,
}

/// Parse treebank JSON into the raw layer.
pub fn parse_treebank(json: &str) -> Result<RawTreebank, serde_json::Error> {
    serde_json::from_str(json)
}

/// Validated treebank: one vocabulary, one gold tree per sentence.
#[derive(Debug, Clone)]
pub struct Treebank {
    pub vocab: DeprelVocab,
    pub trees: Vec<GoldTree>,
}

impl Treebank {
    /// Intern declared labels first, then labels met in sentences, in order
    /// of appearance.
    pub fn from_raw(raw: &RawTreebank) -> Result<Self, TreeError> {
        let mut vocab: DeprelVocab = raw.deprels.iter().collect();
        for sentence in &raw.sentences {
            for label in sentence.deprels.iter().flatten() {
                vocab.intern(label);
            }
        }

        Self::with_vocab(raw, vocab)
    }

    /// Like `from_raw`, but every label must be declared up front.
    ///
    /// Use this when the vocabulary is shared with an already-trained model.
    pub fn with_vocab(raw: &RawTreebank, vocab: DeprelVocab) -> Result<Self, TreeError> {
        let trees = raw
            .sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| {
                sentence_tree(sentence, &vocab).map_err(|source| TreeError::Sentence {
                    index,
                    source: Box::new(source),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { vocab, trees })
    }
}

fn sentence_tree(sentence: &RawSentence, vocab: &DeprelVocab) -> Result<GoldTree, TreeError> {
    if sentence.heads.len() != sentence.deprels.len() {
        return Err(TreeError::LengthMismatch {
            heads: sentence.heads.len(),
            deprels: sentence.deprels.len(),
        });
    }

    // `null` is the only ROOT marker; a literal BAD_HEAD is just out of range.
    let heads = sentence
        .heads
        .iter()
        .enumerate()
        .map(|(token, head)| match *head {
            None => Ok(BAD_HEAD),
            Some(BAD_HEAD) => Err(TreeError::HeadOutOfRange {
                token: token as TokenId,
                head: BAD_HEAD,
            }),
            Some(head) => Ok(head),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let deprels = sentence
        .heads
        .iter()
        .zip(&sentence.deprels)
        .enumerate()
        .map(|(token, (head, label))| {
            let token = token as TokenId;
            match (head, label) {
                (None, None) => Ok(BAD_DEPREL),
                (_, Some(label)) => vocab.get(label).ok_or_else(|| TreeError::UnknownDeprel {
                    token,
                    label: label.clone(),
                }),
                (Some(_), None) => Err(TreeError::MissingDeprel { token }),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    GoldTree::new(heads, deprels)
}

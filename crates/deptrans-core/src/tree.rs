//! Gold dependency trees.

use crate::{BAD_HEAD, DeprelId, TokenId, TreeError};

/// A validated gold tree: one head and one label per token.
///
/// Invariants established by `GoldTree::new`:
/// - at least one token, as many labels as heads
/// - exactly one token has `BAD_HEAD`, and it is the last one (ROOT)
/// - every other head is a token of the sentence and the arcs are acyclic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldTree {
    heads: Vec<TokenId>,
    deprels: Vec<DeprelId>,
}

impl GoldTree {
    pub fn new(heads: Vec<TokenId>, deprels: Vec<DeprelId>) -> Result<Self, TreeError> {
        if heads.len() != deprels.len() {
            return Err(TreeError::LengthMismatch {
                heads: heads.len(),
                deprels: deprels.len(),
            });
        }
        if heads.is_empty() {
            return Err(TreeError::Empty);
        }

        let n = heads.len();
        let mut root = None;
        for (token, &head) in heads.iter().enumerate() {
            let token = token as TokenId;
            if head == BAD_HEAD {
                if let Some(first) = root {
                    return Err(TreeError::MultipleRoots {
                        first,
                        second: token,
                    });
                }
                root = Some(token);
            } else if head as usize >= n {
                return Err(TreeError::HeadOutOfRange { token, head });
            } else if head == token {
                return Err(TreeError::Cycle { token });
            }
        }

        let root = root.ok_or(TreeError::NoRoot)?;
        let last = (n - 1) as TokenId;
        if root != last {
            return Err(TreeError::RootNotLast { root, last });
        }

        check_acyclic(&heads)?;
        Ok(Self { heads, deprels })
    }

    /// Number of tokens, ROOT included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heads.len()
    }

    /// Always false for a validated tree; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }

    /// The ROOT token, which is always the last index.
    #[inline]
    pub fn root(&self) -> TokenId {
        (self.heads.len() - 1) as TokenId
    }

    #[inline]
    pub fn head(&self, token: TokenId) -> TokenId {
        self.heads[token as usize]
    }

    #[inline]
    pub fn deprel(&self, token: TokenId) -> DeprelId {
        self.deprels[token as usize]
    }

    #[inline]
    pub fn heads(&self) -> &[TokenId] {
        &self.heads
    }

    #[inline]
    pub fn deprels(&self) -> &[DeprelId] {
        &self.deprels
    }

    /// Gold dependents of every token, each list in ascending token order.
    pub fn dependents(&self) -> Vec<Vec<TokenId>> {
        let mut tree = vec![Vec::new(); self.heads.len()];
        for (token, &head) in self.heads.iter().enumerate() {
            if head != BAD_HEAD {
                tree[head as usize].push(token as TokenId);
            }
        }
        tree
    }

    /// True when no two arcs cross.
    ///
    /// Arc-standard can only build projective trees, so this is the check to
    /// run on a treebank before asking the static oracle for action sequences.
    pub fn is_projective(&self) -> bool {
        let spans: Vec<(TokenId, TokenId)> = self
            .heads
            .iter()
            .enumerate()
            .filter(|&(_, &head)| head != BAD_HEAD)
            .map(|(token, &head)| {
                let token = token as TokenId;
                (token.min(head), token.max(head))
            })
            .collect();

        for &(lo, hi) in &spans {
            for &(other_lo, other_hi) in &spans {
                if lo < other_lo && other_lo < hi && hi < other_hi {
                    return false;
                }
            }
        }
        true
    }
}

/// Walk every token up to ROOT, remembering finished tokens so each arc is
/// followed at most once.
fn check_acyclic(heads: &[TokenId]) -> Result<(), TreeError> {
    const UNSEEN: u8 = 0;
    const ON_PATH: u8 = 1;
    const DONE: u8 = 2;

    let mut marks = vec![UNSEEN; heads.len()];
    let mut path = Vec::new();

    for start in 0..heads.len() {
        let mut current = start;
        while marks[current] == UNSEEN {
            marks[current] = ON_PATH;
            path.push(current);
            let head = heads[current];
            if head == BAD_HEAD {
                break;
            }
            current = head as usize;
        }
        if marks[current] == ON_PATH && heads[current] != BAD_HEAD {
            return Err(TreeError::Cycle {
                token: current as TokenId,
            });
        }
        for token in path.drain(..) {
            marks[token] = DONE;
        }
    }
    Ok(())
}

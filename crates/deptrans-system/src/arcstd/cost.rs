//! Dynamic cost function.
//!
//! The cost of a state is the smallest number of gold arcs that any tree
//! reachable from it must miss, plus one for every arc the state has already
//! committed wrongly.
//!
//! The unfinished work is split into two sequences:
//! - σ_L: the real stack tokens, top first
//! - σ_R: the deepest stack token, followed by the buffer tokens that must
//!   still be reduced on the stack side: those whose gold head lies before
//!   the buffer front (or that are ROOT), and those having a gold dependent
//!   already placed in σ_L or σ_R
//!
//! `T[i][j][h]` is the best cost after consuming `σ_L[..=i]` and `σ_R[..=j]`
//! with `h` left as the surviving head. Every candidate head seen so far in
//! either sequence may absorb the next token, or be absorbed by it. The answer
//! is read at `T[|σ_L|-1][|σ_R|-1][root]`. ROOT is the last token here, and
//! the recurrence is kept exactly as derived for that layout.

use deptrans_core::{BAD_HEAD, GoldTree, TokenId};

use super::ArcStandard;
use crate::State;

/// Placeholder for unreachable cells.
const UNREACHABLE: u32 = 100_000;

impl ArcStandard {
    /// One-shot cost of `state` against `gold`.
    ///
    /// Callers evaluating many states of one sentence should keep a
    /// `CostFunction` instead.
    pub fn cost(&self, state: &State, gold: &GoldTree) -> u32 {
        CostFunction::new(gold).cost(state)
    }
}

/// Cost evaluator bound to one gold tree.
///
/// Dependent lists, ROOT, the reachability marks and the DP table are kept
/// between calls, so evaluating the states of one sentence does not
/// reallocate.
#[derive(Debug, Clone)]
pub struct CostFunction<'g> {
    gold: &'g GoldTree,
    dependents: Vec<Vec<TokenId>>,
    root: TokenId,
    in_sigma_l: Vec<bool>,
    in_sigma_r: Vec<bool>,
    sigma_l: Vec<TokenId>,
    sigma_r: Vec<TokenId>,
    table: CostTable,
}

impl<'g> CostFunction<'g> {
    pub fn new(gold: &'g GoldTree) -> Self {
        let n = gold.len();
        Self {
            gold,
            dependents: gold.dependents(),
            root: gold.root(),
            in_sigma_l: vec![false; n],
            in_sigma_r: vec![false; n],
            sigma_l: Vec::with_capacity(n),
            sigma_r: Vec::with_capacity(n),
            table: CostTable::default(),
        }
    }

    pub fn gold(&self) -> &'g GoldTree {
        self.gold
    }

    /// Minimum loss reachable from `state`, plus committed mistakes.
    pub fn cost(&mut self, state: &State) -> u32 {
        debug_assert_eq!(
            state.len(),
            self.gold.len(),
            "CostFunction: state and gold tree have different lengths"
        );

        if state.stack.len() == 1 {
            return 0;
        }

        self.split(state);
        self.fill_table();

        let best = self.table.get(
            self.sigma_l.len() - 1,
            self.sigma_r.len() - 1,
            self.root,
        );
        best + self.penalty(state)
    }

    /// Build σ_L and σ_R for `state`.
    fn split(&mut self, state: &State) {
        let gold = self.gold;

        self.in_sigma_l.fill(false);
        self.in_sigma_r.fill(false);
        self.sigma_l.clear();
        self.sigma_r.clear();

        for &token in state.stack[1..].iter().rev() {
            self.sigma_l.push(token);
            self.in_sigma_l[token as usize] = true;
        }
        let deepest = self.sigma_l[self.sigma_l.len() - 1];
        self.sigma_r.push(deepest);

        let front = state.buffer_front();
        for &token in state.buffer[1..].iter().rev() {
            let head = gold.head(token);
            let joins = head == BAD_HEAD
                || head < front
                || self.dependents[token as usize]
                    .iter()
                    .any(|&d| self.in_sigma_l[d as usize] || self.in_sigma_r[d as usize]);
            if joins {
                self.sigma_r.push(token);
                self.in_sigma_r[token as usize] = true;
            }
        }
    }

    fn fill_table(&mut self) {
        let gold = self.gold;
        let (sigma_l, sigma_r) = (&self.sigma_l, &self.sigma_r);
        let (len_l, len_r) = (sigma_l.len(), sigma_r.len());
        let table = &mut self.table;

        table.reset(len_l, len_r, gold.len());
        table.set(0, 0, sigma_l[0], 0);

        // 1 for a candidate arc that is not in the gold tree.
        let miss = |modifier: TokenId, head: TokenId| u32::from(gold.head(modifier) != head);

        for d in 1..len_l + len_r {
            for j in d.saturating_sub(len_l)..d.min(len_r) {
                let i = d - j - 1;
                let heads = || sigma_l[..=i].iter().chain(&sigma_r[..=j]).copied();

                if i + 1 < len_l {
                    let next = sigma_l[i + 1];
                    for h in heads() {
                        let base = table.get(i, j, h);
                        table.relax(i + 1, j, h, base + miss(next, h));
                        table.relax(i + 1, j, next, base + miss(h, next));
                    }
                }

                if j + 1 < len_r {
                    let next = sigma_r[j + 1];
                    for h in heads() {
                        let base = table.get(i, j, h);
                        table.relax(i, j + 1, h, base + miss(next, h));
                        table.relax(i, j + 1, next, base + miss(h, next));
                    }
                }
            }
        }
    }

    /// Tokens before the buffer front whose committed arc disagrees with gold.
    fn penalty(&self, state: &State) -> u32 {
        let gold = self.gold;
        let limit = (state.buffer_front() as usize).min(gold.len());
        (0..limit as TokenId)
            .filter(|&token| {
                let (head, deprel) = (state.heads[token as usize], state.deprels[token as usize]);
                head != BAD_HEAD && (head != gold.head(token) || deprel != gold.deprel(token))
            })
            .count() as u32
    }
}

/// Flat `len_l x len_r x n` table, reused across calls.
#[derive(Debug, Clone, Default)]
struct CostTable {
    cells: Vec<u32>,
    len_r: usize,
    n: usize,
}

impl CostTable {
    fn reset(&mut self, len_l: usize, len_r: usize, n: usize) {
        self.len_r = len_r;
        self.n = n;
        self.cells.clear();
        self.cells.resize(len_l * len_r * n, UNREACHABLE);
    }

    #[inline]
    fn index(&self, i: usize, j: usize, h: TokenId) -> usize {
        (i * self.len_r + j) * self.n + h as usize
    }

    #[inline]
    fn get(&self, i: usize, j: usize, h: TokenId) -> u32 {
        self.cells[self.index(i, j, h)]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, h: TokenId, value: u32) {
        let idx = self.index(i, j, h);
        self.cells[idx] = value;
    }

    #[inline]
    fn relax(&mut self, i: usize, j: usize, h: TokenId, value: u32) {
        let idx = self.index(i, j, h);
        if value < self.cells[idx] {
            self.cells[idx] = value;
        }
    }
}

//! Parser configuration.
//!
//! Both sequences carry a guard slot that is never a real token:
//! - `stack[0]` is the bottom guard; the top of the stack is `stack.last()`
//! - `buffer[0]` is the end guard; the buffer is stored back-to-front, so the
//!   next token to shift is `buffer.last()`
//!
//! A fresh state for `n` tokens (ROOT being token `n - 1`) therefore looks like
//! `stack = [G]`, `buffer = [G, n-1, ..., 1, 0]`.

use std::fmt;

use deptrans_core::{BAD_DEPREL, BAD_HEAD, DeprelId, TokenId};

/// Value stored in the bottom slot of the stack.
pub const STACK_GUARD: TokenId = BAD_HEAD;

/// Value stored in the end slot of the buffer.
pub const BUFFER_GUARD: TokenId = BAD_HEAD;

/// Mutable parsing configuration.
///
/// Cloning is the supported way to look ahead: copy, apply one action,
/// inspect, drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub(crate) stack: Vec<TokenId>,
    pub(crate) buffer: Vec<TokenId>,
    pub(crate) heads: Vec<TokenId>,
    pub(crate) deprels: Vec<DeprelId>,
}

impl State {
    /// Initial state for a sentence of `len` tokens, ROOT included.
    pub fn new(len: usize) -> Self {
        let mut buffer = Vec::with_capacity(len + 1);
        buffer.push(BUFFER_GUARD);
        buffer.extend((0..len as TokenId).rev());

        let mut stack = Vec::with_capacity(len + 1);
        stack.push(STACK_GUARD);

        Self {
            stack,
            buffer,
            heads: vec![BAD_HEAD; len],
            deprels: vec![BAD_DEPREL; len],
        }
    }

    /// Number of tokens in the sentence, ROOT included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }

    /// The ROOT token (last index).
    #[inline]
    pub fn root(&self) -> TokenId {
        debug_assert!(!self.is_empty(), "State: empty sentence has no root");
        (self.len() - 1) as TokenId
    }

    /// Raw stack, guard included, bottom first.
    #[inline]
    pub fn stack(&self) -> &[TokenId] {
        &self.stack
    }

    /// Raw buffer, guard included, stored back-to-front.
    #[inline]
    pub fn buffer(&self) -> &[TokenId] {
        &self.buffer
    }

    #[inline]
    pub fn heads(&self) -> &[TokenId] {
        &self.heads
    }

    #[inline]
    pub fn deprels(&self) -> &[DeprelId] {
        &self.deprels
    }

    /// Topmost real token on the stack.
    #[inline]
    pub fn top(&self) -> Option<TokenId> {
        (self.stack.len() > 1).then(|| self.stack[self.stack.len() - 1])
    }

    /// Real token just below the top of the stack.
    #[inline]
    pub fn second(&self) -> Option<TokenId> {
        (self.stack.len() > 2).then(|| self.stack[self.stack.len() - 2])
    }

    /// Next token to shift, or the end guard once the buffer is exhausted.
    #[inline]
    pub fn buffer_front(&self) -> TokenId {
        self.buffer[self.buffer.len() - 1]
    }

    /// Only the end guard is left in the buffer.
    #[inline]
    pub fn buffer_exhausted(&self) -> bool {
        self.buffer.len() == 1
    }

    /// Number of real tokens on the stack.
    #[inline]
    pub fn stack_depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// Everything shifted and reduced to a single token.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.buffer_exhausted() && self.stack_depth() <= 1
    }

    pub(crate) fn shift(&mut self) {
        self.ensure_can_shift();
        let front = self.buffer_front();
        self.buffer.truncate(self.buffer.len() - 1);
        self.stack.push(front);
    }

    /// Attach the second stack token under the top one.
    pub(crate) fn left(&mut self, deprel: DeprelId) {
        self.ensure_can_reduce("LEFT");
        let top = self.stack.len() - 1;
        let head = self.stack[top];
        let modifier = std::mem::replace(&mut self.stack[top - 1], head);
        self.stack.truncate(top);
        self.attach(modifier, head, deprel);
    }

    /// Attach the top stack token under the one below it.
    pub(crate) fn right(&mut self, deprel: DeprelId) {
        self.ensure_can_reduce("RIGHT");
        let top = self.stack.len() - 1;
        let (head, modifier) = (self.stack[top - 1], self.stack[top]);
        self.stack.truncate(top);
        self.attach(modifier, head, deprel);
    }

    fn attach(&mut self, modifier: TokenId, head: TokenId, deprel: DeprelId) {
        debug_assert_eq!(
            self.heads[modifier as usize], BAD_HEAD,
            "State: token {modifier} attached twice"
        );
        self.heads[modifier as usize] = head;
        self.deprels[modifier as usize] = deprel;
    }
}

impl fmt::Display for State {
    /// `[0 1 | 2 3 4]`: stack bottom-to-top, then buffer in shift order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, token) in self.stack[1..].iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        f.write_str(" |")?;
        for token in self.buffer[1..].iter().rev() {
            write!(f, " {token}")?;
        }
        f.write_str("]")
    }
}

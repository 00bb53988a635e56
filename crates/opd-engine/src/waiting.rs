//! `WaitingList` — unbounded FIFO overflow queue, one per doctor.
//!
//! Unlike slots, the waiting list is ordered by *insertion*, not priority:
//! a token only reaches the waiting list after losing the priority contest
//! in every slot, and backfill promotes strictly the oldest waiter.

use std::collections::VecDeque;

use opd_core::{Token, TokenId};

/// FIFO queue of tokens that found no slot with room.
#[derive(Clone, Debug, Default)]
pub struct WaitingList {
    inner: VecDeque<Token>,
}

impl WaitingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains(&self, id: TokenId) -> bool {
        self.inner.iter().any(|t| t.id == id)
    }

    /// Waiters oldest-first (read-only).
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.inner.iter()
    }

    // ── Mutators (engine-only) ────────────────────────────────────────────

    /// Enqueue at the back.
    pub(crate) fn push(&mut self, token: Token) {
        self.inner.push_back(token);
    }

    /// Dequeue the oldest waiter, if any.
    pub(crate) fn pop(&mut self) -> Option<Token> {
        self.inner.pop_front()
    }

    /// Remove a specific waiter by ID, preserving the order of the rest.
    pub(crate) fn remove_by_id(&mut self, id: TokenId) -> Option<Token> {
        let at = self.inner.iter().position(|t| t.id == id)?;
        self.inner.remove(at)
    }
}

//! `Slot` — a capacity-bounded, priority-ordered container of tokens.
//!
//! # Ordering invariant
//!
//! `tokens` is kept sorted by `(rank asc, created_at asc)` at all times.
//! With that invariant, the *last* element is always the eviction candidate:
//! worst rank, latest booking among equals.  Insertion uses a
//! `partition_point` search rather than a full re-sort, so each insert is
//! O(log n) compare + O(n) shift — n is a slot capacity, typically single
//! digits.
//!
//! # Capacity
//!
//! `insert` performs no capacity check.  The allocator is the only caller
//! and only inserts into a slot with a free seat (or immediately evicts the
//! lowest holder first), so a slot is never over capacity once an engine
//! operation completes.

use opd_core::{Token, TokenId};

/// One time window in a doctor's day, holding up to `capacity` tokens.
///
/// The start/end labels are opaque: the engine never parses or compares
/// them, it only reports them back in snapshots.  Chronology is the slot's
/// *position* in the doctor's slot list.
#[derive(Clone, Debug)]
pub struct Slot {
    start:    String,
    end:      String,
    capacity: u32,
    /// Sorted by `(rank, created_at)` — see module docs.
    tokens:   Vec<Token>,
}

impl Slot {
    /// `capacity` must be > 0; the registry validates before construction.
    pub(crate) fn new(start: impl Into<String>, end: impl Into<String>, capacity: u32) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            capacity,
            tokens: Vec::with_capacity(capacity as usize),
        }
    }

    // ── Read accessors ────────────────────────────────────────────────────

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Occupants in priority order (read-only).
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tokens.len() >= self.capacity as usize
    }

    /// Human-readable label, e.g. `"9:00 AM - 10:00 AM"`.
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }

    /// The token that would be evicted next: worst rank, latest tie-break.
    /// `None` if the slot is empty.
    pub fn lowest(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn find(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == id)
    }

    // ── Mutators (engine-only) ────────────────────────────────────────────

    /// Insert at the position that keeps the ordering invariant.
    pub(crate) fn insert(&mut self, token: Token) {
        let key = token.sort_key();
        // First index whose key is greater — equal-rank incumbents stay ahead.
        let at = self.tokens.partition_point(|t| t.sort_key() <= key);
        self.tokens.insert(at, token);
    }

    /// Remove and return the eviction candidate.
    pub(crate) fn pop_lowest(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    /// Remove and return the token with `id`, or `None` if absent.
    pub(crate) fn remove_by_id(&mut self, id: TokenId) -> Option<Token> {
        let at = self.tokens.iter().position(|t| t.id == id)?;
        Some(self.tokens.remove(at))
    }

    /// Remove every occupant, preserving priority order.  Used by the delay
    /// cascade, which re-allocates the drained tokens best-first.
    pub(crate) fn drain_all(&mut self) -> Vec<Token> {
        std::mem::take(&mut self.tokens)
    }
}

//! `Doctor` — the unit of scheduling locality.
//!
//! A doctor owns an ordered list of [`Slot`]s (position = chronological
//! order; new slots append only) plus one [`WaitingList`].  Both are mutated
//! exclusively through the allocator / registry — the public face of this
//! type is read-only, so external callers cannot break the slot invariants.

use opd_core::{Token, TokenId};

use crate::slot::Slot;
use crate::waiting::WaitingList;

/// One doctor's schedule: ordered slots plus a FIFO waiting list.
#[derive(Clone, Debug)]
pub struct Doctor {
    name:    String,
    slots:   Vec<Slot>,
    waiting: WaitingList,
}

impl Doctor {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name:    name.into(),
            slots:   Vec::new(),
            waiting: WaitingList::new(),
        }
    }

    // ── Read accessors ────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slots in chronological order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn waiting(&self) -> &WaitingList {
        &self.waiting
    }

    /// Locate an allocated token: `(slot index, token)`.  Does not search
    /// the waiting list.
    pub fn find_token(&self, id: TokenId) -> Option<(usize, &Token)> {
        self.slots
            .iter()
            .enumerate()
            .find_map(|(i, slot)| slot.find(id).map(|t| (i, t)))
    }

    /// Total tokens held across slots and the waiting list.
    pub fn token_count(&self) -> usize {
        self.slots.iter().map(Slot::len).sum::<usize>() + self.waiting.len()
    }

    // ── Mutators (engine-only) ────────────────────────────────────────────

    /// Append a slot.  Capacity validation happens in the registry.
    pub(crate) fn push_slot(&mut self, start: impl Into<String>, end: impl Into<String>, capacity: u32) {
        self.slots.push(Slot::new(start, end, capacity));
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Slot {
        &mut self.slots[index]
    }

    pub(crate) fn waiting_mut(&mut self) -> &mut WaitingList {
        &mut self.waiting
    }
}

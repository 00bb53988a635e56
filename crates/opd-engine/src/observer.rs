//! Allocation observer — event reporting without I/O in the core.
//!
//! The engine itself never prints or logs.  Every state change is reported
//! through [`AllocationObserver`] callbacks so that a transport layer
//! (console report, HTTP API, audit log) can render operations without the
//! core knowing about any output format.
//!
//! All methods have default no-op implementations so implementors only need
//! to override what they care about.
//!
//! # Example — console narrator
//!
//! ```rust,ignore
//! struct Narrator;
//!
//! impl AllocationObserver for Narrator {
//!     fn on_bumped(&mut self, doctor: &str, slot: usize, evicted: &Token, incoming: &Token) {
//!         println!("{incoming} bumped {evicted} out of {doctor}'s slot {slot}");
//!     }
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use opd_core::{Token, TokenId};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Callbacks invoked by the engine at each allocation state change.
///
/// # Contract
///
/// - Must not call back into the registry (the engine holds `&mut` state
///   while observers run).
/// - Must not block; treat callbacks as in-memory event capture.
pub trait AllocationObserver {
    /// `token` took a free seat in `slot` of `doctor`'s schedule.
    fn on_allocated(&mut self, _doctor: &str, _slot: usize, _token: &Token) {}

    /// `incoming` outranked and evicted `evicted` from a full `slot`.
    /// The evicted token cascades to `slot + 1` next.
    fn on_bumped(&mut self, _doctor: &str, _slot: usize, _evicted: &Token, _incoming: &Token) {}

    /// `token` could not claim full `slot` (no resident outranked) and moves
    /// on to `slot + 1`.
    fn on_deferred(&mut self, _doctor: &str, _slot: usize, _token: &Token) {}

    /// `token` ran out of slots and joined `doctor`'s waiting list.
    fn on_waitlisted(&mut self, _doctor: &str, _token: &Token) {}

    /// The oldest waiter was promoted into a seat freed in `slot`.
    fn on_backfilled(&mut self, _doctor: &str, _slot: usize, _token: &Token) {}

    /// `token` was cancelled; `slot` is `None` if it was still waiting.
    fn on_cancelled(&mut self, _doctor: &str, _slot: Option<usize>, _token: &Token) {}

    /// `token` was marked a no-show and removed from `slot`.
    fn on_no_show(&mut self, _doctor: &str, _slot: usize, _token: &Token) {}

    /// `slot` was delayed; its `moved` occupants cascade to later slots.
    fn on_slot_delayed(&mut self, _doctor: &str, _slot: usize, _moved: usize) {}
}

/// An [`AllocationObserver`] that does nothing.  The registry default.
pub struct NoopObserver;

impl AllocationObserver for NoopObserver {}

// ── Event log ─────────────────────────────────────────────────────────────────

/// One recorded allocation event — the audit-trail form of the observer
/// callbacks, with tokens reduced to their IDs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocationEvent {
    Allocated { doctor: String, slot: usize, token: TokenId },
    Bumped { doctor: String, slot: usize, evicted: TokenId, incoming: TokenId },
    Deferred { doctor: String, slot: usize, token: TokenId },
    Waitlisted { doctor: String, token: TokenId },
    Backfilled { doctor: String, slot: usize, token: TokenId },
    Cancelled { doctor: String, slot: Option<usize>, token: TokenId },
    NoShow { doctor: String, slot: usize, token: TokenId },
    SlotDelayed { doctor: String, slot: usize, moved: usize },
}

/// An observer that records every event into a shared, cloneable log.
///
/// Clones share the same underlying buffer, so a test (or audit layer) can
/// keep one handle while the registry owns the other:
///
/// ```rust,ignore
/// let log = EventLog::new();
/// let mut registry = Registry::with_observer(Box::new(log.clone()));
/// // ... operations ...
/// assert!(matches!(log.events()[0], AllocationEvent::Allocated { .. }));
/// ```
#[derive(Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<AllocationEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far, in order.
    pub fn events(&self) -> Vec<AllocationEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn push(&self, event: AllocationEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl AllocationObserver for EventLog {
    fn on_allocated(&mut self, doctor: &str, slot: usize, token: &Token) {
        self.push(AllocationEvent::Allocated { doctor: doctor.into(), slot, token: token.id });
    }

    fn on_bumped(&mut self, doctor: &str, slot: usize, evicted: &Token, incoming: &Token) {
        self.push(AllocationEvent::Bumped {
            doctor:   doctor.into(),
            slot,
            evicted:  evicted.id,
            incoming: incoming.id,
        });
    }

    fn on_deferred(&mut self, doctor: &str, slot: usize, token: &Token) {
        self.push(AllocationEvent::Deferred { doctor: doctor.into(), slot, token: token.id });
    }

    fn on_waitlisted(&mut self, doctor: &str, token: &Token) {
        self.push(AllocationEvent::Waitlisted { doctor: doctor.into(), token: token.id });
    }

    fn on_backfilled(&mut self, doctor: &str, slot: usize, token: &Token) {
        self.push(AllocationEvent::Backfilled { doctor: doctor.into(), slot, token: token.id });
    }

    fn on_cancelled(&mut self, doctor: &str, slot: Option<usize>, token: &Token) {
        self.push(AllocationEvent::Cancelled { doctor: doctor.into(), slot, token: token.id });
    }

    fn on_no_show(&mut self, doctor: &str, slot: usize, token: &Token) {
        self.push(AllocationEvent::NoShow { doctor: doctor.into(), slot, token: token.id });
    }

    fn on_slot_delayed(&mut self, doctor: &str, slot: usize, moved: usize) {
        self.push(AllocationEvent::SlotDelayed { doctor: doctor.into(), slot, moved });
    }
}

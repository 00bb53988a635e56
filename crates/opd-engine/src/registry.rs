//! `Registry` — the operation surface exposed to transport layers.
//!
//! Maps doctor names to [`Doctor`] schedules and owns the [`TokenMint`], so
//! token IDs and logical timestamps are monotonic per registry with no
//! hidden global state.
//!
//! # Concurrency contract
//!
//! The registry is a plain single-writer structure: every mutating operation
//! takes `&mut self`, and one operation never touches two doctors.  A
//! service exposing it to concurrent callers must serialize mutations per
//! doctor — wrapping the whole registry in a mutex is sufficient; sharding
//! doctors across registries recovers cross-doctor parallelism.  A booking's
//! cascade touches an a-priori-unknown number of that doctor's slots plus
//! the waiting list, so it must be observed as atomic; there is no finer
//! safe granularity.  Operations never block and complete in at most
//! `slot_count + 1` steps, so no timeout concept exists at this layer.

use std::collections::HashMap;

use opd_core::{OpdError, OpdResult, Token, TokenId, TokenKind, TokenMint};

use crate::allocator;
use crate::doctor::Doctor;
use crate::observer::{AllocationObserver, NoopObserver};
use crate::snapshot::DoctorStatus;

/// All registered doctors plus the token mint and event observer.
pub struct Registry {
    doctors:  HashMap<String, Doctor>,
    mint:     TokenMint,
    observer: Box<dyn AllocationObserver>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// An empty registry with no observer attached.
    pub fn new() -> Self {
        Self::with_observer(Box::new(NoopObserver))
    }

    /// An empty registry reporting every state change to `observer`.
    pub fn with_observer(observer: Box<dyn AllocationObserver>) -> Self {
        Self {
            doctors: HashMap::new(),
            mint: TokenMint::new(),
            observer,
        }
    }

    /// Replace the attached observer.
    pub fn set_observer(&mut self, observer: Box<dyn AllocationObserver>) {
        self.observer = observer;
    }

    // ── Setup ─────────────────────────────────────────────────────────────

    /// Register a doctor.  Duplicate names are an error rather than an
    /// overwrite: replacing a doctor would silently drop live bookings.
    pub fn add_doctor(&mut self, name: impl Into<String>) -> OpdResult<&Doctor> {
        let name = name.into();
        if self.doctors.contains_key(&name) {
            return Err(OpdError::DoctorExists(name));
        }
        let doctor = self.doctors.entry(name).or_insert_with_key(|n| Doctor::new(n.clone()));
        Ok(doctor)
    }

    /// Append a slot to `doctor`'s schedule.  Slot order is creation order
    /// and is immutable afterwards.
    pub fn add_slot(
        &mut self,
        doctor: &str,
        start: impl Into<String>,
        end: impl Into<String>,
        capacity: u32,
    ) -> OpdResult<()> {
        if capacity == 0 {
            return Err(OpdError::InvalidCapacity(capacity));
        }
        let doc = self.doctor_mut(doctor)?;
        doc.push_slot(start, end, capacity);
        Ok(())
    }

    // ── Mutating operations ───────────────────────────────────────────────

    /// Book a token for `patient` starting at `slot_index`.
    ///
    /// Once the doctor and index resolve, booking cannot fail: the token
    /// lands in a slot or, at worst, the waiting list.  The returned copy
    /// reflects the placement — `allocated_at` is `None` iff it is waiting.
    pub fn book_token(
        &mut self,
        doctor: &str,
        slot_index: usize,
        patient: impl Into<String>,
        kind: TokenKind,
    ) -> OpdResult<Token> {
        let doc = match self.doctors.get_mut(doctor) {
            Some(d) => d,
            None => return Err(OpdError::DoctorNotFound(doctor.to_string())),
        };
        let slot_count = doc.slot_count();
        if slot_index >= slot_count {
            return Err(OpdError::InvalidSlotIndex { index: slot_index, slot_count });
        }

        let token = self.mint.mint(patient, kind);
        let id = token.id;
        let unplaced = token.clone();

        let placement =
            allocator::allocate(doc, slot_index, token, &mut self.mint, self.observer.as_mut());

        Ok(match placement {
            allocator::Placement::Slot(i) => {
                doc.slots()[i].find(id).cloned().unwrap_or(unplaced)
            }
            allocator::Placement::WaitingList => unplaced,
        })
    }

    /// Cancel a token anywhere in `doctor`'s schedule.
    ///
    /// Waiting-list tokens are simply removed (no vacancy to fill); slot
    /// tokens are removed and the freed seat backfilled from the waiting
    /// list.  `Ok(false)` if the ID is not held anywhere — no side effects.
    pub fn cancel_token(&mut self, doctor: &str, id: TokenId) -> OpdResult<bool> {
        let doc = match self.doctors.get_mut(doctor) {
            Some(d) => d,
            None => return Err(OpdError::DoctorNotFound(doctor.to_string())),
        };

        if let Some(removed) = doc.waiting_mut().remove_by_id(id) {
            self.observer.on_cancelled(doc.name(), None, &removed);
            return Ok(true);
        }

        match remove_from_slots(doc, id) {
            None => Ok(false),
            Some((slot_index, removed)) => {
                self.observer.on_cancelled(doc.name(), Some(slot_index), &removed);
                allocator::backfill(doc, slot_index, &mut self.mint, self.observer.as_mut());
                Ok(true)
            }
        }
    }

    /// Mark an *allocated* token as a no-show.  Identical to cancellation
    /// except the waiting list is not searched: a waiter has no seat to miss.
    pub fn mark_no_show(&mut self, doctor: &str, id: TokenId) -> OpdResult<bool> {
        let doc = match self.doctors.get_mut(doctor) {
            Some(d) => d,
            None => return Err(OpdError::DoctorNotFound(doctor.to_string())),
        };

        match remove_from_slots(doc, id) {
            None => Ok(false),
            Some((slot_index, removed)) => {
                self.observer.on_no_show(doc.name(), slot_index, &removed);
                allocator::backfill(doc, slot_index, &mut self.mint, self.observer.as_mut());
                Ok(true)
            }
        }
    }

    /// Delay a slot: every occupant is pushed at least one slot later,
    /// subject to the same bumping rules as a fresh booking.
    pub fn delay_slot(&mut self, doctor: &str, slot_index: usize) -> OpdResult<()> {
        let doc = match self.doctors.get_mut(doctor) {
            Some(d) => d,
            None => return Err(OpdError::DoctorNotFound(doctor.to_string())),
        };
        let slot_count = doc.slot_count();
        if slot_index >= slot_count {
            return Err(OpdError::InvalidSlotIndex { index: slot_index, slot_count });
        }

        allocator::delay(doc, slot_index, &mut self.mint, self.observer.as_mut());
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Live read-only view of one doctor.
    pub fn doctor(&self, name: &str) -> Option<&Doctor> {
        self.doctors.get(name)
    }

    /// All doctors, in no particular order.
    pub fn doctors(&self) -> impl Iterator<Item = &Doctor> {
        self.doctors.values()
    }

    pub fn doctor_count(&self) -> usize {
        self.doctors.len()
    }

    /// Defensive snapshot of one doctor's schedule, or `None` if unknown.
    pub fn doctor_status(&self, name: &str) -> Option<DoctorStatus> {
        self.doctors.get(name).map(DoctorStatus::from)
    }

    /// Snapshots of every doctor, in no particular order.
    pub fn statuses(&self) -> Vec<DoctorStatus> {
        self.doctors.values().map(DoctorStatus::from).collect()
    }

    /// Restart the token ID / stamp sequences.  Test-isolation hook — only
    /// meaningful on an empty or freshly rebuilt registry.
    pub fn reset_mint(&mut self) {
        self.mint.reset();
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn doctor_mut(&mut self, name: &str) -> OpdResult<&mut Doctor> {
        self.doctors
            .get_mut(name)
            .ok_or_else(|| OpdError::DoctorNotFound(name.to_string()))
    }
}

/// Search slots in chronological order and remove the token with `id`.
fn remove_from_slots(doctor: &mut Doctor, id: TokenId) -> Option<(usize, Token)> {
    for index in 0..doctor.slot_count() {
        if let Some(removed) = doctor.slot_mut(index).remove_by_id(id) {
            return Some((index, removed));
        }
    }
    None
}

//! The cascading placement algorithm: booking with bumping, waiting-list
//! overflow, cancellation backfill, and the slot-delay cascade.
//!
//! # Bumping rule
//!
//! A token offered to a full slot claims a seat only if it *strictly*
//! outranks the slot's worst occupant (lower rank number).  Exact ties favor
//! the incumbent.  The evicted occupant — and any token that fails the
//! contest — is offered to the next slot under the same rule, until a slot
//! with room is found or the slots run out and the token joins the waiting
//! list.
//!
//! The cascade is an explicit loop over a strictly increasing slot index, so
//! an operation completes in at most `slot_count + 1` steps regardless of
//! how many evictions it triggers (at most one per slot), and stack depth
//! stays constant.
//!
//! All functions take `&mut Doctor`: one operation never touches two
//! doctors, which is what makes per-doctor mutual exclusion a sufficient
//! locking contract for concurrent frontends.

use opd_core::{Token, TokenMint};

use crate::doctor::Doctor;
use crate::observer::AllocationObserver;

// ── Placement ─────────────────────────────────────────────────────────────────

/// Where the token passed to [`allocate`] ended up.
///
/// Tokens displaced *by* that token may land elsewhere; their movements are
/// reported through the observer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Placement {
    /// Seated in the slot at this index.
    Slot(usize),
    /// No slot had room (or every full slot out-prioritized the token).
    WaitingList,
}

// ── Allocation ────────────────────────────────────────────────────────────────

/// Place `token` at `start_index` or later, bumping lower-priority holders
/// forward as needed.  Returns where the *offered* token landed.
///
/// The caller has already validated `start_index` against the slot list for
/// booking; the delay cascade may legitimately pass an index one past the
/// end, which sends tokens straight to the waiting list.
pub(crate) fn allocate(
    doctor: &mut Doctor,
    start_index: usize,
    token: Token,
    mint: &mut TokenMint,
    obs: &mut dyn AllocationObserver,
) -> Placement {
    let mut index = start_index;
    let mut token = token;
    // Set once the offered token takes a seat; later iterations then place
    // the cascade of evicted tokens.
    let mut offered_landed: Option<Placement> = None;

    loop {
        if index >= doctor.slot_count() {
            obs.on_waitlisted(doctor.name(), &token);
            doctor.waiting_mut().push(token);
            return offered_landed.unwrap_or(Placement::WaitingList);
        }

        if !doctor.slots()[index].is_full() {
            token.mark_allocated(mint.stamp());
            obs.on_allocated(doctor.name(), index, &token);
            doctor.slot_mut(index).insert(token);
            return offered_landed.unwrap_or(Placement::Slot(index));
        }

        // Full slot: strict `<` — the incumbent wins exact rank ties.
        let outranks = doctor.slots()[index]
            .lowest()
            .is_some_and(|lowest| token.rank() < lowest.rank());

        if outranks {
            if let Some(evicted) = doctor.slot_mut(index).pop_lowest() {
                token.mark_allocated(mint.stamp());
                obs.on_bumped(doctor.name(), index, &evicted, &token);
                doctor.slot_mut(index).insert(token);
                offered_landed.get_or_insert(Placement::Slot(index));
                token = evicted;
            }
        } else {
            obs.on_deferred(doctor.name(), index, &token);
        }

        index += 1;
    }
}

// ── Backfill ──────────────────────────────────────────────────────────────────

/// Promote the oldest waiter into a seat freed in `slot_index`.
///
/// Runs after a cancellation or no-show removed one token from that slot,
/// so at most one waiter moves.  No-op when the slot is still full or no one
/// is waiting.
pub(crate) fn backfill(
    doctor: &mut Doctor,
    slot_index: usize,
    mint: &mut TokenMint,
    obs: &mut dyn AllocationObserver,
) {
    if doctor.slots()[slot_index].is_full() {
        return;
    }
    if let Some(mut waiter) = doctor.waiting_mut().pop() {
        waiter.mark_allocated(mint.stamp());
        obs.on_backfilled(doctor.name(), slot_index, &waiter);
        doctor.slot_mut(slot_index).insert(waiter);
    }
}

// ── Delay ─────────────────────────────────────────────────────────────────────

/// Push every occupant of `slot_index` at least one slot later.
///
/// Occupants are drained in priority order and re-offered to `slot_index + 1`
/// best-first, so the highest-priority displaced tokens get first claim on
/// the next slot's capacity.  Each re-offer follows the full bumping rule
/// and may displace occupants of later slots in turn.
pub(crate) fn delay(
    doctor: &mut Doctor,
    slot_index: usize,
    mint: &mut TokenMint,
    obs: &mut dyn AllocationObserver,
) {
    let moved = doctor.slot_mut(slot_index).drain_all();
    obs.on_slot_delayed(doctor.name(), slot_index, moved.len());
    for token in moved {
        allocate(doctor, slot_index + 1, token, mint, obs);
    }
}

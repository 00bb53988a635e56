//! `opd-engine` — priority token allocation for outpatient-department slots.
//!
//! Patients claim discrete visit tokens in doctors' time slots under a
//! strict priority ordering.  Booking into a full slot *bumps* its worst
//! occupant one slot later; bumped tokens cascade through subsequent slots
//! and overflow into a per-doctor FIFO waiting list.  Cancellations and
//! no-shows backfill the freed seat from that list, and delaying a slot
//! re-cascades all of its occupants.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`slot`]     | `Slot` — capacity-bounded, priority-ordered container  |
//! | [`waiting`]  | `WaitingList` — FIFO overflow queue                    |
//! | [`doctor`]   | `Doctor` — ordered slots + waiting list                |
//! | `allocator`  | bumping cascade, backfill, delay (internal)            |
//! | [`registry`] | `Registry` — the operation surface                     |
//! | [`snapshot`] | `DoctorStatus`, `SlotStatus` read projections          |
//! | [`observer`] | `AllocationObserver`, `EventLog`                       |
//! | [`loader`]   | `load_roster_csv`, `load_roster_reader`                |
//!
//! # Invariants the engine maintains
//!
//! - A slot never exceeds its capacity once an operation completes.
//! - Slot occupants stay sorted by `(priority rank, booking order)`.
//! - A token ID is held by at most one slot or waiting list, and by none
//!   after cancellation / no-show.
//! - Operations either fail before any mutation (unknown doctor, bad index)
//!   or complete fully; a full slot is never an error.

mod allocator;

pub mod doctor;
pub mod loader;
pub mod observer;
pub mod registry;
pub mod slot;
pub mod snapshot;
pub mod waiting;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use doctor::Doctor;
pub use loader::{load_roster_csv, load_roster_reader};
pub use observer::{AllocationEvent, AllocationObserver, EventLog, NoopObserver};
pub use registry::Registry;
pub use slot::Slot;
pub use snapshot::{DoctorStatus, SlotStatus};
pub use waiting::WaitingList;

pub use opd_core::{OpdError, OpdResult, Stamp, Token, TokenId, TokenKind, TokenMint};

//! Shared error type.
//!
//! "Slot full" is deliberately *not* an error: a full slot is an expected
//! condition the allocator resolves by bumping, cascading, or waiting-list
//! overflow.  Only resolution failures (unknown doctor, bad index, bad
//! capacity, unparseable roster) surface here.

use thiserror::Error;

/// The top-level error type for the `opd-*` crates.
#[derive(Debug, Error)]
pub enum OpdError {
    #[error("doctor {0:?} not found")]
    DoctorNotFound(String),

    #[error("doctor {0:?} is already registered")]
    DoctorExists(String),

    #[error("slot index {index} out of range (doctor has {slot_count} slots)")]
    InvalidSlotIndex { index: usize, slot_count: usize },

    #[error("slot capacity must be > 0, got {0}")]
    InvalidCapacity(u32),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `opd-*` crates.
pub type OpdResult<T> = Result<T, OpdError>;

//! Read-only status projections for presentation layers.
//!
//! Snapshots are defensive, independent copies: handing one to a JSON
//! renderer or console report cannot mutate — or observe later mutations of
//! — the live schedule.  With the `serde` feature enabled they serialize
//! directly, so a transport layer owns nothing but formatting.

use opd_core::Token;

use crate::doctor::Doctor;
use crate::slot::Slot;

// ── SlotStatus ────────────────────────────────────────────────────────────────

/// Point-in-time copy of one slot.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotStatus {
    pub start:    String,
    pub end:      String,
    pub capacity: u32,
    /// Occupants in priority order.
    pub tokens:   Vec<Token>,
}

impl SlotStatus {
    pub fn is_full(&self) -> bool {
        self.tokens.len() >= self.capacity as usize
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Occupancy in `[0.0, 1.0]`, for capacity bars and load displays.
    pub fn fill_ratio(&self) -> f32 {
        self.tokens.len() as f32 / self.capacity as f32
    }

    /// Human-readable label, e.g. `"9:00 AM - 10:00 AM"`.
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

impl From<&Slot> for SlotStatus {
    fn from(slot: &Slot) -> Self {
        Self {
            start:    slot.start().to_string(),
            end:      slot.end().to_string(),
            capacity: slot.capacity(),
            tokens:   slot.tokens().to_vec(),
        }
    }
}

// ── DoctorStatus ──────────────────────────────────────────────────────────────

/// Point-in-time copy of one doctor's whole schedule.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoctorStatus {
    pub name:    String,
    /// Slots in chronological order.
    pub slots:   Vec<SlotStatus>,
    /// Waiting list, oldest first.
    pub waiting: Vec<Token>,
}

impl DoctorStatus {
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    /// Total tokens across slots and the waiting list.
    pub fn token_count(&self) -> usize {
        self.slots.iter().map(|s| s.tokens.len()).sum::<usize>() + self.waiting.len()
    }
}

impl From<&Doctor> for DoctorStatus {
    fn from(doctor: &Doctor) -> Self {
        Self {
            name:    doctor.name().to_string(),
            slots:   doctor.slots().iter().map(SlotStatus::from).collect(),
            waiting: doctor.waiting().tokens().cloned().collect(),
        }
    }
}

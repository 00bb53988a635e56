//! CSV roster loader.
//!
//! Builds a [`Registry`] from a roster file describing doctors and their
//! slots — the day's configuration, typically written once each morning by
//! whatever administrative tool the clinic uses.
//!
//! # CSV format
//!
//! One row per slot.  Doctors are registered on first mention; row order
//! defines each doctor's slot order (= chronological order).
//!
//! ```csv
//! doctor,start,end,capacity
//! Sharma,9:00 AM,10:00 AM,5
//! Sharma,10:00 AM,11:00 AM,5
//! Patel,9:00 AM,10:00 AM,4
//! ```
//!
//! Start/end are opaque labels; the engine never parses them.  A zero
//! capacity is rejected with [`OpdError::InvalidCapacity`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use opd_core::{OpdError, OpdResult};

use crate::registry::Registry;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    doctor:   String,
    start:    String,
    end:      String,
    capacity: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a registry from a roster CSV file.
pub fn load_roster_csv(path: &Path) -> OpdResult<Registry> {
    let file = std::fs::File::open(path).map_err(OpdError::Io)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_roster_reader<R: Read>(reader: R) -> OpdResult<Registry> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut registry = Registry::new();

    for result in csv_reader.deserialize::<RosterRecord>() {
        let row = result.map_err(|e| OpdError::Parse(e.to_string()))?;
        if registry.doctor(&row.doctor).is_none() {
            registry.add_doctor(row.doctor.clone())?;
        }
        registry.add_slot(&row.doctor, row.start, row.end, row.capacity)?;
    }

    Ok(registry)
}

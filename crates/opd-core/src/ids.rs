//! Strongly typed identifier and logical-timestamp wrappers.
//!
//! Both types are `Copy + Ord + Hash` so they can be used as map keys and
//! sorted without ceremony.  The inner integer is `pub` for cheap
//! construction in tests and transport layers.

use std::fmt;

// ── TokenId ───────────────────────────────────────────────────────────────────

/// Identity of one booked token.
///
/// IDs are handed out by [`TokenMint`][crate::TokenMint] in strictly
/// increasing order, so `TokenId` ordering equals creation order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenId(pub u32);

impl TokenId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: TokenId = TokenId(u32::MAX);
}

impl Default for TokenId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for TokenId {
    /// Renders the wire form used by transport layers, e.g. `T007`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{:03}", self.0)
    }
}

// ── Stamp ─────────────────────────────────────────────────────────────────────

/// A monotonic logical timestamp.
///
/// The engine never reads a wall clock: creation and allocation times only
/// need to be *ordered*, so a per-registry sequence counter is enough and
/// keeps every run deterministic.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stamp(pub u64);

impl Stamp {
    pub const ZERO: Stamp = Stamp(0);
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

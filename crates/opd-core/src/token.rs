//! Token kinds and the `Token` record.
//!
//! # Priority model
//!
//! Every token carries a [`TokenKind`] whose `rank()` is a fixed integer —
//! **lower rank = higher priority**:
//!
//! | Kind        | Rank |
//! |-------------|------|
//! | `Emergency` | 0    |
//! | `Paid`      | 1    |
//! | `FollowUp`  | 2    |
//! | `WalkIn`    | 3    |
//! | `Online`    | 4    |
//!
//! Ranks are total-ordered and never change at runtime.  Slots keep their
//! occupants sorted by `(rank, created_at)`, so equal-rank tokens are served
//! in booking order.

use std::fmt;
use std::str::FromStr;

use crate::{OpdError, Stamp, TokenId};

// ── TokenKind ─────────────────────────────────────────────────────────────────

/// Booking source / urgency class of a token.
///
/// The derived `Ord` follows declaration order, which matches the rank
/// table: `Emergency < Paid < FollowUp < WalkIn < Online`, with "less"
/// meaning "served first".
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    Emergency,
    Paid,
    FollowUp,
    WalkIn,
    Online,
}

impl TokenKind {
    /// All kinds in priority order, for transport-layer enumeration.
    pub const ALL: [TokenKind; 5] = [
        TokenKind::Emergency,
        TokenKind::Paid,
        TokenKind::FollowUp,
        TokenKind::WalkIn,
        TokenKind::Online,
    ];

    /// Priority rank — lower is served first.
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            TokenKind::Emergency => 0,
            TokenKind::Paid      => 1,
            TokenKind::FollowUp  => 2,
            TokenKind::WalkIn    => 3,
            TokenKind::Online    => 4,
        }
    }

    /// Upper-case wire name, e.g. `"EMERGENCY"`.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Emergency => "EMERGENCY",
            TokenKind::Paid      => "PAID",
            TokenKind::FollowUp  => "FOLLOWUP",
            TokenKind::WalkIn    => "WALKIN",
            TokenKind::Online    => "ONLINE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = OpdError;

    /// Parses the wire names case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EMERGENCY" => Ok(TokenKind::Emergency),
            "PAID"      => Ok(TokenKind::Paid),
            "FOLLOWUP"  => Ok(TokenKind::FollowUp),
            "WALKIN"    => Ok(TokenKind::WalkIn),
            "ONLINE"    => Ok(TokenKind::Online),
            other => Err(OpdError::Parse(format!(
                "invalid token kind {other:?}: expected one of EMERGENCY, PAID, \
                 FOLLOWUP, WALKIN, ONLINE"
            ))),
        }
    }
}

// ── Token ─────────────────────────────────────────────────────────────────────

/// One patient's claim to one visit slot.
///
/// A token lives in exactly one of: a slot, a doctor's waiting list, or
/// nowhere (cancelled / no-show).  Identity and kind are immutable;
/// `allocated_at` is stamped once, the first time the token enters a slot,
/// and is kept when bumping later moves the token to another slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub id:           TokenId,
    pub patient:      String,
    pub kind:         TokenKind,
    /// When the token was minted — the tie-break for equal ranks.
    pub created_at:   Stamp,
    /// `None` while the token sits in a waiting list.
    pub allocated_at: Option<Stamp>,
}

impl Token {
    /// Priority rank of this token's kind (lower = served first).
    #[inline]
    pub fn rank(&self) -> u8 {
        self.kind.rank()
    }

    /// Sort key for slot ordering: rank ascending, then booking order.
    #[inline]
    pub fn sort_key(&self) -> (u8, Stamp) {
        (self.rank(), self.created_at)
    }

    /// `true` once the token has held a seat in some slot.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.allocated_at.is_some()
    }

    /// Record the first allocation time.  Later calls are no-ops: a bumped
    /// token keeps the stamp from its first seat.
    #[inline]
    pub fn mark_allocated(&mut self, at: Stamp) {
        self.allocated_at.get_or_insert(at);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} [{}]", self.id, self.patient, self.kind)
    }
}

// ── TokenMint ─────────────────────────────────────────────────────────────────

/// The single monotonic source of [`TokenId`]s and [`Stamp`]s.
///
/// Owned by the registry rather than hidden in a static so that tests and
/// parallel registries are isolated.  IDs start at 1 (`T001`), matching the
/// wire format transport layers expect.
#[derive(Clone, Debug, Default)]
pub struct TokenMint {
    next_id:    u32,
    next_stamp: u64,
}

impl TokenMint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh token for `patient`, stamped with the current time.
    pub fn mint(&mut self, patient: impl Into<String>, kind: TokenKind) -> Token {
        self.next_id += 1;
        Token {
            id:           TokenId(self.next_id),
            patient:      patient.into(),
            kind,
            created_at:   self.stamp(),
            allocated_at: None,
        }
    }

    /// Issue the next logical timestamp.
    pub fn stamp(&mut self) -> Stamp {
        let s = Stamp(self.next_stamp);
        self.next_stamp += 1;
        s
    }

    /// Number of tokens minted so far.
    pub fn issued(&self) -> u32 {
        self.next_id
    }

    /// Restart ID and stamp sequences.  Test-isolation hook; never call this
    /// while minted tokens are still live in a registry.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

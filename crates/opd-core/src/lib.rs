//! `opd-core` — foundational types for the OPD token allocation engine.
//!
//! This crate is a dependency of every other `opd-*` crate.  It intentionally
//! has no `opd-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                    |
//! |-----------|---------------------------------------------|
//! | [`ids`]   | `TokenId`, `Stamp`                          |
//! | [`token`] | `TokenKind`, `Token`, `TokenMint`           |
//! | [`error`] | `OpdError`, `OpdResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod token;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{OpdError, OpdResult};
pub use ids::{Stamp, TokenId};
pub use token::{Token, TokenKind, TokenMint};

//! Padzone core logic
//!
//! This crate contains the pure state machine that hands out one-time-pad
//! indices to four parties organized as two teams. It performs no I/O and
//! draws no randomness, so every run is fully determined by the sequence of
//! `(role, length)` sends fed into it.
//!
//! # Architecture
//!
//! ```text
//!      ┌─────────────────────────────┐
//!      │ padzone-core                │
//!      │ - Party cursors             │
//!      │ - Zone/gap safety check     │
//!      │ - Pad usage bookkeeping     │
//!      └─────────────────────────────┘
//!         ↓                       ↓
//! ┌─────────────────┐  ┌─────────────────┐
//! │ padzone-harness │  │ padzone-sim     │
//! │ - Seeded RNG    │  │ - CLI           │
//! │ - Traffic       │  │ - Reports       │
//! │ - Oracle        │  │                 │
//! └─────────────────┘  └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`role`]: The four parties, their teams and directions
//! - [`party`]: Per-party cursor and the safety predicate
//! - [`protocol`]: Zoning, pairing, claim bookkeeping and termination
//! - [`stats`]: Statistics snapshot
//! - [`error`]: Error types

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod party;
pub mod protocol;
pub mod role;
pub mod stats;

pub use error::ProtocolError;
pub use party::{PadIndex, Party, Zone};
pub use protocol::Protocol;
pub use role::{Direction, Role, Team};
pub use stats::Statistics;

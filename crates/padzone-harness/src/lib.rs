//! Traffic simulation harness for padzone.
//!
//! Drives [`padzone_core::Protocol`] instances with seeded, reproducible
//! traffic and checks their invariants.
//!
//! # Determinism
//!
//! All randomness flows from explicit `ChaCha8Rng` seeds. A batch is pinned by
//! its master seed, a single run by its own seed, and a recorded [`Trace`]
//! replays to identical protocol state.
//!
//! # Modules
//!
//! - [`traffic`]: Traffic patterns and the per-run driver
//! - [`runner`]: Repeated independent executions
//! - [`summary`]: Aggregate statistics over a batch
//! - [`oracle`]: Invariant checks over live protocol state
//! - [`operation`]: Arbitrary operation streams for fuzzing

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod operation;
pub mod oracle;
pub mod runner;
pub mod summary;
pub mod traffic;

pub use config::SimulationConfig;
pub use error::HarnessError;
pub use operation::{Operation, OperationResult};
pub use oracle::{OracleError, check_invariants};
pub use runner::{Runner, activity_counts};
pub use summary::Summary;
pub use traffic::{Driver, RunOutcome, Trace, TraceStep, TrafficPattern, replay};

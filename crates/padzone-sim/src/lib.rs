//! Padzone simulator.
//!
//! Runs every traffic pattern over a batch of independent protocol instances
//! and renders the aggregate waste as a text report or JSON document.
//!
//! ## Architecture
//!
//! ```text
//! padzone-sim
//!   ├─ Runner             (seeded batches, padzone-harness)
//!   ├─ Summary            (per-pattern aggregation)
//!   └─ SimulationReport   (text / JSON rendering)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod report;

pub use error::ReportError;
pub use report::{STATIC_PARTITION_BASELINE_PCT, ScenarioReport, SimulationReport};

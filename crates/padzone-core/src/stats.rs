//! Read-only statistics snapshot.

use serde::{Deserialize, Serialize};

/// Aggregate view of one protocol instance at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Size of the pad space (`n`).
    pub total_pads: u64,
    /// Pads claimed by any party.
    pub used_pads: u64,
    /// Pads never claimed.
    pub wasted_pads: u64,
    /// `wasted_pads` as a percentage of `total_pads`.
    pub waste_percentage: f64,
    /// Successful sends.
    pub messages_sent: u64,
    /// All send attempts, successful or not.
    pub messages_attempted: u64,
    /// Whether no party can claim even one more pad.
    pub terminated: bool,
}

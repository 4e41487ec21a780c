//! Traffic generation.
//!
//! A [`Driver`] owns a seeded `ChaCha8Rng` and drives one protocol instance to
//! completion under a [`TrafficPattern`]. The core never sees randomness: it
//! only receives the `(role, length)` pairs the driver draws.
//!
//! # Patterns
//!
//! - `SingleSender`: one random party sends until its first rejection.
//! - `TwoSenders`: two distinct random parties, sender picked per message.
//! - `AllSenders`: every party is active, sender picked per message.
//!
//! Multi-sender runs stop after a fixed number of consecutive rejections, or
//! earlier if the protocol terminates.

use std::{fmt, ops::RangeInclusive};

use padzone_core::{Protocol, Role, Statistics};
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// Which parties send and when a run gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrafficPattern {
    /// One randomly chosen party is active.
    SingleSender,
    /// Two randomly chosen parties are active.
    TwoSenders,
    /// All four parties are active.
    AllSenders,
}

impl TrafficPattern {
    /// Patterns in report order.
    pub const ALL: [Self; 3] = [Self::SingleSender, Self::TwoSenders, Self::AllSenders];

    /// Number of active parties.
    pub fn active_parties(self) -> usize {
        match self {
            Self::SingleSender => 1,
            Self::TwoSenders => 2,
            Self::AllSenders => 4,
        }
    }

    /// Consecutive rejections after which a run stops.
    pub fn max_consecutive_failures(self) -> u32 {
        match self {
            Self::SingleSender => 1,
            Self::TwoSenders => 50,
            Self::AllSenders => 100,
        }
    }

    /// Short scenario label.
    pub fn label(self) -> &'static str {
        match self {
            Self::SingleSender => "S.1",
            Self::TwoSenders => "S.2",
            Self::AllSenders => "S.4",
        }
    }

    /// Stream id used to separate per-pattern seed sequences.
    pub(crate) fn stream(self) -> u64 {
        self.active_parties() as u64
    }
}

impl fmt::Display for TrafficPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.active_parties();
        let noun = if count == 1 { "party" } else { "parties" };
        write!(f, "Scenario {} ({count} active {noun})", self.label())
    }
}

/// One attempted send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Sender.
    pub role: Role,
    /// Message length in pads.
    pub length: u32,
    /// Whether the protocol accepted the send.
    pub accepted: bool,
}

/// Ordered record of every attempt in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    /// Append an attempt.
    pub fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    /// All attempts in order.
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Accepted sends in order.
    pub fn accepted(&self) -> impl Iterator<Item = &TraceStep> {
        self.steps.iter().filter(|step| step.accepted)
    }

    /// Number of attempts.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing was attempted.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Result of driving one protocol instance to its stopping point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Pattern the run used.
    pub pattern: TrafficPattern,
    /// Seed of the run's RNG.
    pub seed: u64,
    /// Parties allowed to send, sorted.
    pub active: Vec<Role>,
    /// Final protocol statistics.
    pub statistics: Statistics,
    /// Sends the driver saw accepted.
    pub messages_sent: u64,
    /// Every attempt, in order.
    pub trace: Trace,
}

/// Seeded traffic generator for a single run.
#[derive(Debug, Clone)]
pub struct Driver {
    rng: ChaCha8Rng,
    seed: u64,
    n: u32,
    d: u32,
    lengths: RangeInclusive<u32>,
}

impl Driver {
    /// Create a driver for protocols of `n` pads and gap `d`, drawing message
    /// lengths uniformly from `lengths`.
    pub fn new(seed: u64, n: u32, d: u32, lengths: RangeInclusive<u32>) -> Result<Self, HarnessError> {
        if lengths.is_empty() || *lengths.start() == 0 {
            return Err(HarnessError::InvalidConfig {
                reason: format!("message length range {lengths:?} must be non-empty and positive"),
            });
        }

        Ok(Self { rng: ChaCha8Rng::seed_from_u64(seed), seed, n, d, lengths })
    }

    /// Seed this driver was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Drive a fresh protocol under `pattern` until it terminates or the
    /// pattern's rejection limit is hit.
    pub fn run(&mut self, pattern: TrafficPattern) -> Result<RunOutcome, HarnessError> {
        let mut protocol = Protocol::new(self.n, self.d)?;

        let mut active: Vec<Role> =
            Role::ALL.choose_multiple(&mut self.rng, pattern.active_parties()).copied().collect();
        active.sort();

        let limit = pattern.max_consecutive_failures();
        let mut trace = Trace::default();
        let mut failures = 0;
        let mut messages_sent = 0;

        while !protocol.is_terminated() && failures < limit {
            let length = self.rng.gen_range(self.lengths.clone());
            let Some(&role) = active.choose(&mut self.rng) else {
                break;
            };

            let accepted = protocol.attempt_send(role, length);
            trace.push(TraceStep { role, length, accepted });

            if accepted {
                messages_sent += 1;
                failures = 0;
            } else {
                failures += 1;
            }
        }

        let statistics = protocol.statistics();
        tracing::debug!(
            pattern = pattern.label(),
            seed = self.seed,
            ?active,
            used = statistics.used_pads,
            wasted = statistics.wasted_pads,
            attempts = trace.len(),
            "run finished"
        );

        Ok(RunOutcome { pattern, seed: self.seed, active, statistics, messages_sent, trace })
    }
}

/// Feed recorded sends into a fresh protocol.
pub fn replay<I>(n: u32, d: u32, sends: I) -> Result<Protocol, HarnessError>
where
    I: IntoIterator<Item = (Role, u32)>,
{
    let mut protocol = Protocol::new(n, d)?;
    for (role, length) in sends {
        protocol.attempt_send(role, length);
    }
    Ok(protocol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_limits() {
        assert_eq!(TrafficPattern::SingleSender.max_consecutive_failures(), 1);
        assert_eq!(TrafficPattern::TwoSenders.max_consecutive_failures(), 50);
        assert_eq!(TrafficPattern::AllSenders.max_consecutive_failures(), 100);
    }

    #[test]
    fn pattern_display() {
        assert_eq!(TrafficPattern::SingleSender.to_string(), "Scenario S.1 (1 active party)");
        assert_eq!(TrafficPattern::AllSenders.to_string(), "Scenario S.4 (4 active parties)");
    }

    #[test]
    fn rejects_zero_length_range() {
        assert!(Driver::new(1, 100, 5, 0..=10).is_err());
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn rejects_empty_length_range() {
        assert!(Driver::new(1, 100, 5, 10..=1).is_err());
    }

    #[test]
    fn trace_tracks_accepted_steps() {
        let mut trace = Trace::default();
        trace.push(TraceStep { role: Role::Alice, length: 3, accepted: true });
        trace.push(TraceStep { role: Role::Bob, length: 9, accepted: false });

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.accepted().count(), 1);
    }
}

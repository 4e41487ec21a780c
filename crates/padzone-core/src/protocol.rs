//! Two-team pad allocation protocol.
//!
//! The pad space `[0, n)` is split into two disjoint zones. Alice and Bob own
//! `[0, n/2)`, Charlie and Dave own `[n/2, n)`. Within a zone the forward party
//! starts at the low edge and the backward party at the high edge, and every
//! claim must leave more than `d` untouched pads between the claimer's new
//! frontier and its partner's boundary.
//!
//! # Invariants
//!
//! - Zones are disjoint and cover `[0, n)` exactly once.
//! - A pad is claimed at most once over the protocol's lifetime.
//! - Claimed pads lie in the claimer's zone.
//! - Partners keep a gap strictly greater than `d` between their frontiers.
//!
//! The protocol is a monotone process: every successful claim shrinks the
//! viable range of the claimer or its partner, so termination is always
//! reached in a finite number of sends.
//!
//! Callers are serialized. The check-then-claim sequence in
//! [`Protocol::attempt_send`] is not atomic across threads.

use crate::{
    error::ProtocolError,
    party::{PadIndex, Party, Zone},
    role::{Role, Team},
    stats::Statistics,
};

/// Protocol instance for one simulated run.
#[derive(Debug, Clone)]
pub struct Protocol {
    n: u32,
    d: u32,
    /// Claimed flag per pad index.
    pad_usage: Vec<bool>,
    /// Indexed by [`Role::index`].
    parties: [Party; 4],
    messages_sent: u64,
    messages_attempted: u64,
}

impl Protocol {
    /// Create a protocol over `n` pads with gap parameter `d`.
    pub fn new(n: u32, d: u32) -> Result<Self, ProtocolError> {
        if n == 0 {
            return Err(ProtocolError::EmptyPadSpace);
        }

        let split = i64::from(n / 2);
        let first = Zone::new(0, split);
        let second = Zone::new(split, i64::from(n));

        let parties = Role::ALL.map(|role| {
            let zone = match role.team() {
                Team::First => first,
                Team::Second => second,
            };
            Party::new(role, zone)
        });

        tracing::debug!(n, d, split, "protocol created");

        Ok(Self {
            n,
            d,
            pad_usage: vec![false; n as usize],
            parties,
            messages_sent: 0,
            messages_attempted: 0,
        })
    }

    /// Total pad count.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Gap parameter.
    pub fn d(&self) -> u32 {
        self.d
    }

    /// Party playing `role`.
    pub fn party(&self, role: Role) -> &Party {
        &self.parties[role.index()]
    }

    /// Party sharing `role`'s zone.
    pub fn partner(&self, role: Role) -> &Party {
        self.party(role.partner())
    }

    /// Claimed flag per pad index.
    pub fn pad_usage(&self) -> &[bool] {
        &self.pad_usage
    }

    /// Successful sends so far.
    pub fn messages_sent(&self) -> u64 {
        self.messages_sent
    }

    /// Send attempts so far.
    pub fn messages_attempted(&self) -> u64 {
        self.messages_attempted
    }

    /// Whether `role` could claim `length` pads against its partner's current
    /// state. Pure: counters are not touched.
    pub fn can_send(&self, role: Role, length: u32) -> bool {
        let partner = self.partner(role);
        self.party(role).can_send(length, partner.last_used_index(), self.d, partner.has_sent())
    }

    /// Try to send a message of `length` pads from `role`.
    ///
    /// Returns `false` without side effects beyond the attempt counter when the
    /// claim would leave the zone or violate the gap.
    ///
    /// # Panics
    ///
    /// Panics if a claimed pad was already marked used. That can only happen if
    /// the safety check itself is broken, and continuing would reuse key
    /// material.
    pub fn attempt_send(&mut self, role: Role, length: u32) -> bool {
        self.messages_attempted += 1;

        if !self.can_send(role, length) {
            tracing::trace!(%role, length, "send rejected");
            return false;
        }

        let claimed = self.parties[role.index()].consume_pads(length);
        for index in &claimed {
            self.mark_used(role, *index);
        }

        self.messages_sent += 1;
        tracing::debug!(
            %role,
            length,
            next = self.party(role).next_pad_index(),
            "send accepted"
        );

        true
    }

    fn mark_used(&mut self, role: Role, index: PadIndex) {
        let slot = usize::try_from(index).ok().and_then(|i| self.pad_usage.get_mut(i));
        assert!(slot.is_some(), "pad {index} claimed by {role} lies outside [0, {})", self.n);

        if let Some(used) = slot {
            assert!(!*used, "pad {index} claimed twice (by {role}): perfect secrecy violated");
            *used = true;
        }
    }

    /// Whether no party can claim even a single pad.
    ///
    /// Recomputed from live state on every call.
    pub fn is_terminated(&self) -> bool {
        Role::ALL.into_iter().all(|role| !self.can_send(role, 1))
    }

    /// Number of claimed pads.
    pub fn used_pads(&self) -> u64 {
        self.pad_usage.iter().filter(|used| **used).count() as u64
    }

    /// Number of pads never claimed.
    pub fn wasted_pads(&self) -> u64 {
        u64::from(self.n) - self.used_pads()
    }

    /// Wasted pads as a percentage of the pad space.
    pub fn waste_percentage(&self) -> f64 {
        (self.wasted_pads() as f64 * 100.0) / f64::from(self.n)
    }

    /// Snapshot of totals, counters and termination status.
    pub fn statistics(&self) -> Statistics {
        let used_pads = self.used_pads();
        let wasted_pads = u64::from(self.n) - used_pads;

        Statistics {
            total_pads: u64::from(self.n),
            used_pads,
            wasted_pads,
            waste_percentage: (wasted_pads as f64 * 100.0) / f64::from(self.n),
            messages_sent: self.messages_sent,
            messages_attempted: self.messages_attempted,
            terminated: self.is_terminated(),
        }
    }
}

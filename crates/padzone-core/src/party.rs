//! Party cursor state.
//!
//! A party owns a cursor over its team's zone and advances it monotonically in
//! one direction as it claims pads. Forward parties start at the low edge of
//! the zone, backward parties at the high edge, so partners always move toward
//! each other.
//!
//! # Invariants
//!
//! - The cursor never moves against the party's direction.
//! - Every claimed index lies in `[zone.min, zone.max)`.
//! - `has_sent` flips to `true` on the first claim and never resets.
//!
//! `can_send` is a pure predicate. `consume_pads` trusts that the caller has
//! just seen `can_send` return `true` for the same length and partner state;
//! [`Protocol`](crate::Protocol) is the only caller that upholds this.

use serde::{Deserialize, Serialize};

use crate::role::{Direction, Role};

/// Signed pad position.
///
/// Claimed pads are always in `[0, n)`, but a backward cursor that has claimed
/// index 0 rests at -1, and a backward party in an empty zone starts there.
pub type PadIndex = i64;

/// Half-open range `[min, max)` of pad indices owned by one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// First index in the zone.
    pub min: PadIndex,
    /// One past the last index in the zone.
    pub max: PadIndex,
}

impl Zone {
    /// Create a zone covering `[min, max)`.
    pub fn new(min: PadIndex, max: PadIndex) -> Self {
        Self { min, max }
    }

    /// Number of pads in the zone.
    pub fn len(&self) -> u64 {
        self.max.saturating_sub(self.min).max(0).unsigned_abs()
    }

    /// Whether the zone holds no pads.
    pub fn is_empty(&self) -> bool {
        self.max <= self.min
    }

    /// Whether `index` falls inside the zone.
    pub fn contains(&self, index: PadIndex) -> bool {
        (self.min..self.max).contains(&index)
    }
}

/// One party's cursor over its zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Party {
    role: Role,
    direction: Direction,
    zone: Zone,
    start_index: PadIndex,
    current_index: PadIndex,
    has_sent: bool,
}

impl Party {
    /// Create a party at the edge of `zone` that matches its role's direction.
    pub fn new(role: Role, zone: Zone) -> Self {
        let direction = role.direction();
        let start_index = match direction {
            Direction::Forward => zone.min,
            Direction::Backward => zone.max - 1,
        };

        Self { role, direction, zone, start_index, current_index: start_index, has_sent: false }
    }

    /// Role of this party.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Direction the cursor advances in.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Zone this party may claim from.
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Inclusive lower bound of the zone.
    pub fn zone_min(&self) -> PadIndex {
        self.zone.min
    }

    /// Exclusive upper bound of the zone.
    pub fn zone_max(&self) -> PadIndex {
        self.zone.max
    }

    /// Initial cursor position.
    pub fn start_index(&self) -> PadIndex {
        self.start_index
    }

    /// Whether this party has claimed at least once.
    pub fn has_sent(&self) -> bool {
        self.has_sent
    }

    /// Pad index a length-1 claim would take right now.
    pub fn next_pad_index(&self) -> PadIndex {
        self.current_index
    }

    /// Boundary-most index claimed so far.
    ///
    /// Before the first claim this is the start index, which partners treat as
    /// the untouched boundary of this party's territory.
    pub fn last_used_index(&self) -> PadIndex {
        if self.has_sent {
            self.current_index - self.direction.step()
        } else {
            self.start_index
        }
    }

    /// Number of pads this party has claimed.
    pub fn pads_claimed(&self) -> u64 {
        (self.current_index - self.start_index).unsigned_abs()
    }

    /// Inclusive `(start, end)` of the next `length` pads, in numeric order.
    fn candidate_range(&self, length: u32) -> (PadIndex, PadIndex) {
        let span = i64::from(length) - 1;
        match self.direction {
            Direction::Forward => (self.current_index, self.current_index + span),
            Direction::Backward => (self.current_index - span, self.current_index),
        }
    }

    /// Whether a claim of `length` pads fits the zone and keeps a gap strictly
    /// greater than `d` to the partner's boundary.
    ///
    /// `partner_last_index` is the partner's [`last_used_index`], which is its
    /// start index until it sends. Because of that the check is the same
    /// whether or not the partner has sent, and `partner_has_sent` does not
    /// affect the result.
    ///
    /// A zero length never fits.
    ///
    /// [`last_used_index`]: Party::last_used_index
    pub fn can_send(
        &self,
        length: u32,
        partner_last_index: PadIndex,
        d: u32,
        _partner_has_sent: bool,
    ) -> bool {
        if length == 0 {
            return false;
        }

        let (start, end) = self.candidate_range(length);
        let gap = i64::from(d);

        match self.direction {
            Direction::Forward => end < self.zone.max && end < partner_last_index - gap,
            Direction::Backward => start >= self.zone.min && start > partner_last_index + gap,
        }
    }

    /// Claim `length` pads and advance the cursor past them.
    ///
    /// Returns the claimed indices in the order the cursor passed them, so a
    /// backward party yields descending indices. No validation happens here.
    pub fn consume_pads(&mut self, length: u32) -> Vec<PadIndex> {
        let step = self.direction.step();
        let claimed: Vec<PadIndex> =
            (0..i64::from(length)).map(|offset| self.current_index + offset * step).collect();

        self.current_index += i64::from(length) * step;
        self.has_sent = true;

        claimed
    }
}

//! Invariant oracle.
//!
//! Checks a protocol's live state against the allocation invariants. The
//! oracle only reads public state, so it can run after every step of a fuzzed
//! or property-tested operation stream.
//!
//! # Checked invariants
//!
//! - Zones are disjoint and cover `[0, n)` exactly once.
//! - Every cursor stays within its zone (or one step past the edge it has
//!   exhausted).
//! - The claimed pads are exactly the union of each party's swept territory,
//!   so no pad was claimed twice and none outside its claimer's zone.
//! - Partners that have sent keep a gap strictly greater than `d`.

use padzone_core::{Direction, PadIndex, Party, Protocol, Role, Zone};
use thiserror::Error;

/// An invariant the protocol state violates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// Zones overlap, leave holes, or partners disagree on their zone.
    #[error("zones {first:?} and {second:?} do not partition [0, {n})")]
    ZonePartition {
        /// First team's zone.
        first: Zone,
        /// Second team's zone.
        second: Zone,
        /// Pad count.
        n: u32,
    },

    /// A cursor left its zone.
    #[error("{role} cursor at {cursor} left zone {zone:?}")]
    CursorOutsideZone {
        /// Offending party.
        role: Role,
        /// Cursor position.
        cursor: PadIndex,
        /// Party's zone.
        zone: Zone,
    },

    /// Usage record disagrees with the parties' swept territory.
    #[error("pad {index}: marked {marked}, swept by {owners} parties")]
    UsageMismatch {
        /// Pad index.
        index: usize,
        /// Whether the usage record marks it claimed.
        marked: bool,
        /// How many parties' territory covers it.
        owners: usize,
    },

    /// Partners are closer than the gap parameter allows.
    #[error("{role} and its partner are {gap} apart, need more than {d}")]
    GapViolated {
        /// Forward party of the pair.
        role: Role,
        /// Distance between frontiers.
        gap: i64,
        /// Gap parameter.
        d: u32,
    },
}

/// Verify every invariant against `protocol`'s current state.
pub fn check_invariants(protocol: &Protocol) -> Result<(), OracleError> {
    check_zones(protocol)?;

    for role in Role::ALL {
        check_cursor(protocol.party(role))?;
    }

    check_usage(protocol)?;

    for role in [Role::Alice, Role::Charlie] {
        check_gap(protocol, role)?;
    }

    Ok(())
}

fn check_zones(protocol: &Protocol) -> Result<(), OracleError> {
    let first = protocol.party(Role::Alice).zone();
    let second = protocol.party(Role::Charlie).zone();
    let n = protocol.n();

    let partitioned = first == protocol.party(Role::Bob).zone()
        && second == protocol.party(Role::Dave).zone()
        && first.min == 0
        && first.max == second.min
        && second.max == i64::from(n)
        && first.min <= first.max;

    if partitioned { Ok(()) } else { Err(OracleError::ZonePartition { first, second, n }) }
}

fn check_cursor(party: &Party) -> Result<(), OracleError> {
    let zone = party.zone();
    let cursor = party.next_pad_index();
    let within = match party.direction() {
        Direction::Forward => (zone.min..=zone.max).contains(&cursor),
        Direction::Backward => (zone.min - 1..zone.max).contains(&cursor),
    };

    if within {
        Ok(())
    } else {
        Err(OracleError::CursorOutsideZone { role: party.role(), cursor, zone })
    }
}

/// Whether `index` lies in the range `party`'s cursor has swept past.
fn swept(party: &Party, index: PadIndex) -> bool {
    let start = party.start_index();
    let cursor = party.next_pad_index();
    match party.direction() {
        Direction::Forward => (start..cursor).contains(&index),
        Direction::Backward => (cursor + 1..=start).contains(&index),
    }
}

fn check_usage(protocol: &Protocol) -> Result<(), OracleError> {
    for (index, marked) in protocol.pad_usage().iter().copied().enumerate() {
        let position = index as PadIndex;
        let owners = Role::ALL.iter().filter(|role| swept(protocol.party(**role), position)).count();

        if owners > 1 || marked != (owners == 1) {
            return Err(OracleError::UsageMismatch { index, marked, owners });
        }
    }
    Ok(())
}

fn check_gap(protocol: &Protocol, forward: Role) -> Result<(), OracleError> {
    let own = protocol.party(forward);
    let partner = protocol.partner(forward);

    if !own.has_sent() && !partner.has_sent() {
        return Ok(());
    }

    let gap = partner.last_used_index() - own.last_used_index();
    if gap > i64::from(protocol.d()) {
        Ok(())
    } else {
        Err(OracleError::GapViolated { role: forward, gap, d: protocol.d() })
    }
}

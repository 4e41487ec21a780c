//! Party roles, teams and movement directions.
//!
//! The four parties form a closed set. Partner lookup is an exhaustive match
//! so a role can never resolve to a missing partner; the only fallible path is
//! parsing a role from foreign input.

use std::{fmt, str::FromStr};

use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// One of the four communicating parties.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Arbitrary,
)]
pub enum Role {
    /// First team, moves forward from the low edge of the first zone.
    Alice,
    /// First team, moves backward from the high edge of the first zone.
    Bob,
    /// Second team, moves forward from the low edge of the second zone.
    Charlie,
    /// Second team, moves backward from the high edge of the second zone.
    Dave,
}

/// Team owning one zone of the pad space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Alice and Bob, zone `[0, n/2)`.
    First,
    /// Charlie and Dave, zone `[n/2, n)`.
    Second,
}

/// Direction a party's cursor advances in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Cursor advances by +1 per claimed pad.
    Forward,
    /// Cursor advances by -1 per claimed pad.
    Backward,
}

impl Direction {
    /// Signed step applied to a cursor per claimed pad.
    pub fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

impl Role {
    /// All roles in canonical order.
    pub const ALL: [Self; 4] = [Self::Alice, Self::Bob, Self::Charlie, Self::Dave];

    /// The other party sharing this role's zone.
    pub fn partner(self) -> Self {
        match self {
            Self::Alice => Self::Bob,
            Self::Bob => Self::Alice,
            Self::Charlie => Self::Dave,
            Self::Dave => Self::Charlie,
        }
    }

    /// Team (and therefore zone) this role belongs to.
    pub fn team(self) -> Team {
        match self {
            Self::Alice | Self::Bob => Team::First,
            Self::Charlie | Self::Dave => Team::Second,
        }
    }

    /// Direction this role's cursor moves in.
    pub fn direction(self) -> Direction {
        match self {
            Self::Alice | Self::Charlie => Direction::Forward,
            Self::Bob | Self::Dave => Direction::Backward,
        }
    }

    /// Position in [`Role::ALL`], used for constant-time table lookup.
    pub fn index(self) -> usize {
        match self {
            Self::Alice => 0,
            Self::Bob => 1,
            Self::Charlie => 2,
            Self::Dave => 3,
        }
    }

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Alice => "Alice",
            Self::Bob => "Bob",
            Self::Charlie => "Charlie",
            Self::Dave => "Dave",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProtocolError::UnknownParty { name: s.to_string() })
    }
}

impl TryFrom<u8> for Role {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| ProtocolError::UnknownParty { name: value.to_string() })
    }
}

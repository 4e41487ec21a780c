//! Operations for fuzzing and model-based testing.
//!
//! Operations are generated by `arbitrary` (fuzzing) or proptest and applied to
//! a protocol one at a time. Lengths are kept to a `u8` so generated streams
//! stay small while still crossing zone and gap boundaries.

use arbitrary::Arbitrary;
use padzone_core::{Protocol, Role};

/// An action against a protocol instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Attempt a send.
    Send {
        /// Sender.
        role: Role,
        /// Message length in pads.
        length: u8,
    },

    /// Query termination.
    CheckTermination,
}

/// Observable result of applying an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationResult {
    /// Send accepted.
    Sent,
    /// Send rejected by the safety check.
    Rejected,
    /// Termination status.
    Terminated(bool),
}

impl Operation {
    /// Apply this operation to `protocol`.
    pub fn apply(&self, protocol: &mut Protocol) -> OperationResult {
        match *self {
            Self::Send { role, length } => {
                if protocol.attempt_send(role, u32::from(length)) {
                    OperationResult::Sent
                } else {
                    OperationResult::Rejected
                }
            },
            Self::CheckTermination => OperationResult::Terminated(protocol.is_terminated()),
        }
    }
}

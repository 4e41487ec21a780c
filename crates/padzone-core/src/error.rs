//! Protocol error types.
//!
//! A rejected send is not an error: `attempt_send` reports it as `false`.
//! A pad claimed twice is not an error either: it aborts the run.

use thiserror::Error;

/// Errors from constructing or addressing a protocol instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Input named a party outside the four known roles.
    #[error("unknown party: {name}")]
    UnknownParty {
        /// The offending input, as received.
        name: String,
    },

    /// The pad space must contain at least one pad.
    #[error("pad count must be positive")]
    EmptyPadSpace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ProtocolError::UnknownParty { name: "Mallory".to_string() };
        assert_eq!(err.to_string(), "unknown party: Mallory");
        assert_eq!(ProtocolError::EmptyPadSpace.to_string(), "pad count must be positive");
    }
}

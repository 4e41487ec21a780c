//! Harness error types.

use padzone_core::ProtocolError;
use thiserror::Error;

/// Errors from configuring or running simulations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// Simulation parameters are inconsistent.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// Aggregation needs at least one run.
    #[error("no executions to summarize")]
    NoExecutions,

    /// Protocol construction failed.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_errors_convert() {
        let err: HarnessError = ProtocolError::EmptyPadSpace.into();
        assert_eq!(err.to_string(), "protocol error: pad count must be positive");
    }

    #[test]
    fn invalid_config_display() {
        let err = HarnessError::InvalidConfig { reason: "executions must be positive".to_string() };
        assert_eq!(err.to_string(), "invalid configuration: executions must be positive");
    }
}

//! Simulation configuration.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// Parameters shared by every execution in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Total pad count per protocol instance.
    pub n: u32,
    /// Gap parameter.
    pub d: u32,
    /// Independent executions per traffic pattern.
    pub executions: u32,
    /// Shortest message, in pads.
    pub min_msg_len: u32,
    /// Longest message, in pads.
    pub max_msg_len: u32,
    /// Master seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { n: 1000, d: 10, executions: 100, min_msg_len: 1, max_msg_len: 50, seed: None }
    }
}

impl SimulationConfig {
    /// Reject configurations no run could execute.
    pub fn validate(&self) -> Result<(), HarnessError> {
        let reason = if self.n == 0 {
            "pad count must be positive"
        } else if self.executions == 0 {
            "executions must be positive"
        } else if self.min_msg_len == 0 {
            "message lengths must be positive"
        } else if self.min_msg_len > self.max_msg_len {
            "min message length exceeds max message length"
        } else {
            return Ok(());
        };

        Err(HarnessError::InvalidConfig { reason: reason.to_string() })
    }

    /// Inclusive range message lengths are drawn from.
    pub fn message_lengths(&self) -> RangeInclusive<u32> {
        self.min_msg_len..=self.max_msg_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_pads() {
        let config = SimulationConfig { n: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(HarnessError::InvalidConfig { .. })));
    }

    #[test]
    fn rejects_zero_executions() {
        let config = SimulationConfig { executions: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(HarnessError::InvalidConfig { .. })));
    }

    #[test]
    fn rejects_zero_length_messages() {
        let config = SimulationConfig { min_msg_len: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(HarnessError::InvalidConfig { .. })));
    }

    #[test]
    fn rejects_inverted_length_range() {
        let config = SimulationConfig { min_msg_len: 20, max_msg_len: 10, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: min message length exceeds max message length"
        );
    }

    #[test]
    fn single_length_range_is_valid() {
        let config = SimulationConfig { min_msg_len: 5, max_msg_len: 5, ..Default::default() };
        assert!(config.validate().is_ok());
        assert_eq!(config.message_lengths(), 5..=5);
    }
}

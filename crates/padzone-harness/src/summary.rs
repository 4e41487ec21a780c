//! Aggregate statistics over a batch of runs.

use serde::{Deserialize, Serialize};

use crate::{
    error::HarnessError,
    traffic::{RunOutcome, TrafficPattern},
};

/// Summary of one traffic pattern's batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Pattern the batch ran.
    pub pattern: TrafficPattern,
    /// Number of runs summarized.
    pub executions: usize,
    /// Mean wasted pads.
    pub avg_wasted: f64,
    /// Sample standard deviation of wasted pads.
    pub std_wasted: f64,
    /// Fewest wasted pads in any run.
    pub min_wasted: u64,
    /// Most wasted pads in any run.
    pub max_wasted: u64,
    /// Mean waste percentage.
    pub avg_waste_pct: f64,
    /// Sample standard deviation of waste percentage.
    pub std_waste_pct: f64,
    /// Mean accepted messages per run.
    pub avg_messages: f64,
    /// Mean used pads per run.
    pub avg_used: f64,
}

impl Summary {
    /// Summarize `outcomes`, which must all come from the same pattern.
    pub fn from_outcomes(outcomes: &[RunOutcome]) -> Result<Self, HarnessError> {
        let first = outcomes.first().ok_or(HarnessError::NoExecutions)?;

        let wasted: Vec<f64> =
            outcomes.iter().map(|o| o.statistics.wasted_pads as f64).collect();
        let waste_pct: Vec<f64> =
            outcomes.iter().map(|o| o.statistics.waste_percentage).collect();
        let messages: Vec<f64> = outcomes.iter().map(|o| o.messages_sent as f64).collect();
        let used: Vec<f64> = outcomes.iter().map(|o| o.statistics.used_pads as f64).collect();

        let wasted_counts = outcomes.iter().map(|o| o.statistics.wasted_pads);

        Ok(Self {
            pattern: first.pattern,
            executions: outcomes.len(),
            avg_wasted: mean(&wasted),
            std_wasted: sample_stdev(&wasted),
            min_wasted: wasted_counts.clone().min().unwrap_or_default(),
            max_wasted: wasted_counts.max().unwrap_or_default(),
            avg_waste_pct: mean(&waste_pct),
            std_waste_pct: sample_stdev(&waste_pct),
            avg_messages: mean(&messages),
            avg_used: mean(&used),
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample (n - 1) standard deviation; zero below two values.
fn sample_stdev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

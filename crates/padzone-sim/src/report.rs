//! Report assembly and rendering.

use std::{collections::BTreeMap, io::Write};

use padzone_core::Role;
use padzone_harness::{Runner, SimulationConfig, Summary, TrafficPattern, activity_counts};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Worst-case waste of a static four-way partition, for comparison.
pub const STATIC_PARTITION_BASELINE_PCT: f64 = 75.0;

const RULE_WIDTH: usize = 80;

/// Results for one traffic pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Aggregate statistics.
    pub summary: Summary,
    /// How many runs each role was active in.
    pub activity: BTreeMap<Role, usize>,
}

/// Results for every traffic pattern in one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Configuration the batch ran with.
    pub config: SimulationConfig,
    /// Master seed of the batch.
    pub master_seed: u64,
    /// Per-pattern results, in [`TrafficPattern::ALL`] order.
    pub scenarios: Vec<ScenarioReport>,
}

impl SimulationReport {
    /// Run every traffic pattern with `runner`.
    pub fn run(runner: &Runner) -> Result<Self, ReportError> {
        let scenarios = TrafficPattern::ALL
            .into_iter()
            .map(|pattern| {
                let outcomes = runner.run(pattern)?;
                let counts = activity_counts(&outcomes);
                let activity = Role::ALL.into_iter().map(|r| (r, counts[r.index()])).collect();

                Ok(ScenarioReport { summary: Summary::from_outcomes(&outcomes)?, activity })
            })
            .collect::<Result<Vec<_>, ReportError>>()?;

        Ok(Self { config: runner.config().clone(), master_seed: runner.master_seed(), scenarios })
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }

    /// Write the human-readable report.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);
        let config = &self.config;

        writeln!(out, "{heavy}")?;
        writeln!(out, "Multi-Party One-Time Pad Protocol Simulation")?;
        writeln!(out, "Protocol: Parallel Pairs (m=4)")?;
        writeln!(out, "{heavy}")?;

        writeln!(out)?;
        writeln!(out, "Configuration:")?;
        writeln!(out, "  Total pads (n): {}", config.n)?;
        writeln!(out, "  Gap parameter (d): {}", config.d)?;
        writeln!(out, "  Executions per scenario: {}", config.executions)?;
        writeln!(out, "  Message length range: [{}, {}]", config.min_msg_len, config.max_msg_len)?;
        writeln!(out, "  Master seed: {}", self.master_seed)?;
        writeln!(
            out,
            "  Static partition baseline (worst case): {STATIC_PARTITION_BASELINE_PCT:.1}%"
        )?;

        writeln!(out)?;
        writeln!(out, "{heavy}")?;
        writeln!(out, "Detailed Results")?;
        writeln!(out, "{heavy}")?;
        for scenario in &self.scenarios {
            write_scenario(out, scenario, config.n)?;
        }

        writeln!(out)?;
        writeln!(out, "{heavy}")?;
        writeln!(out, "Summary Table")?;
        writeln!(out, "{heavy}")?;
        writeln!(
            out,
            "{:<12} {:<15} {:<12} {:<8} {:<8} {:<12}",
            "Scenario", "Avg Wasted", "Std Dev", "Min", "Max", "Waste %"
        )?;
        writeln!(out, "{light}")?;
        for scenario in &self.scenarios {
            let s = &scenario.summary;
            let label = format!("{} (x={})", s.pattern.label(), s.pattern.active_parties());
            writeln!(
                out,
                "{label:<12} {:>8.1} pads   {:>8.1}    {:>6}  {:>6}  {:>6.2}%",
                s.avg_wasted, s.std_wasted, s.min_wasted, s.max_wasted, s.avg_waste_pct
            )?;
        }
        writeln!(out, "{light}")?;
        writeln!(
            out,
            "{:<12} {:>45} {:>12}",
            "Baseline",
            "(static partition worst case)",
            format!("{STATIC_PARTITION_BASELINE_PCT:.2}%")
        )?;
        writeln!(out, "{heavy}")?;

        Ok(())
    }
}

fn write_scenario<W: Write>(
    out: &mut W,
    scenario: &ScenarioReport,
    n: u32,
) -> Result<(), ReportError> {
    let s = &scenario.summary;

    writeln!(out)?;
    writeln!(out, "{}:", s.pattern)?;
    writeln!(out, "  Executions: {}", s.executions)?;
    writeln!(out, "  Average pads used: {:.1} / {n}", s.avg_used)?;
    writeln!(out, "  Average pads wasted: {:.1} ± {:.1}", s.avg_wasted, s.std_wasted)?;
    writeln!(out, "  Wasted pads range: [{}, {}]", s.min_wasted, s.max_wasted)?;
    writeln!(out, "  Average waste percentage: {:.2}% ± {:.2}%", s.avg_waste_pct, s.std_waste_pct)?;
    writeln!(out, "  Average messages sent: {:.1}", s.avg_messages)?;

    let activity: Vec<String> =
        scenario.activity.iter().map(|(role, count)| format!("{role} {count}")).collect();
    writeln!(out, "  Active party frequency: {}", activity.join(", "))?;

    Ok(())
}

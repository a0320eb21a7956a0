//! JSON report adapter.
//!
//! Writes one self-contained execution record per run: parameters, the
//! per-strategy trajectories and scores, the zone tally, and the final-day
//! recommendation.

use serde::Serialize;
use std::fs;

use crate::domain::engine::{BacktestOutcome, StrategyRun};
use crate::domain::error::AlphariseError;
use crate::domain::metrics::PerformanceMetrics;
use crate::domain::params::SimulationParams;
use crate::domain::recommendation::Recommendation;
use crate::domain::zone::{Zone, ZoneCounts};
use crate::ports::report_port::ReportPort;

pub struct JsonReportAdapter;

#[derive(Serialize)]
struct Report<'a> {
    params: &'a SimulationParams,
    variable: StrategySection<'a>,
    baseline: StrategySection<'a>,
    lump_sum: StrategySection<'a>,
    zones: &'a [Zone],
    zone_counts: &'a ZoneCounts,
    recommendation: &'a Recommendation,
}

#[derive(Serialize)]
struct StrategySection<'a> {
    final_value: f64,
    contributed_capital: f64,
    cash_reserve: f64,
    interest_accrued: f64,
    metrics: &'a PerformanceMetrics,
    value_history: &'a [f64],
    invested_history: &'a [f64],
    cash_history: &'a [f64],
    return_history: &'a [f64],
}

impl<'a> StrategySection<'a> {
    fn from_run(run: &'a StrategyRun) -> Self {
        let state = &run.state;
        StrategySection {
            final_value: state.value_history.last().copied().unwrap_or(0.0),
            contributed_capital: state.contributed_capital,
            cash_reserve: state.cash_reserve,
            interest_accrued: state.interest_accrued,
            metrics: &run.metrics,
            value_history: &state.value_history,
            invested_history: &state.invested_history,
            cash_history: &state.cash_history,
            return_history: &state.return_history,
        }
    }
}

impl ReportPort for JsonReportAdapter {
    fn write(
        &self,
        outcome: &BacktestOutcome,
        params: &SimulationParams,
        output_path: &str,
    ) -> Result<(), AlphariseError> {
        let report = Report {
            params,
            variable: StrategySection::from_run(&outcome.variable),
            baseline: StrategySection::from_run(&outcome.baseline),
            lump_sum: StrategySection::from_run(&outcome.lump_sum),
            zones: &outcome.zones,
            zone_counts: &outcome.zone_counts,
            recommendation: &outcome.recommendation,
        };

        let json = serde_json::to_string_pretty(&report).map_err(|e| AlphariseError::Report {
            reason: format!("serialization failed: {e}"),
        })?;
        fs::write(output_path, json)?;
        Ok(())
    }
}

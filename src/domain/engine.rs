//! Backtest orchestration: three strategies over one series, scored alike.

use super::baseline::run_capital_matched;
use super::lump_sum::run_lump_sum;
use super::market_day::MarketDay;
use super::metrics::PerformanceMetrics;
use super::params::{CASH_INTEREST_RATE, SimulationParams};
use super::recommendation::{Recommendation, recommend};
use super::state::StrategyState;
use super::variable_policy::run_variable_policy;
use super::zone::{Zone, ZoneCounts};

/// One strategy's finalized histories plus its score.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyRun {
    pub state: StrategyState,
    pub metrics: PerformanceMetrics,
}

/// Full output of one engine invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestOutcome {
    pub variable: StrategyRun,
    pub baseline: StrategyRun,
    pub lump_sum: StrategyRun,
    pub zones: Vec<Zone>,
    pub zone_counts: ZoneCounts,
    pub recommendation: Recommendation,
}

/// Run the variable policy, then the capital-matched baseline and the
/// lump-sum benchmark against its total contribution, and score all three.
///
/// The ordering is strict: the variable policy's final contributed capital
/// is frozen before the other two are constructed. Returns `None` on an
/// empty series; a pure function of its inputs otherwise.
pub fn run_backtest(series: &[MarketDay], params: &SimulationParams) -> Option<BacktestOutcome> {
    if series.is_empty() {
        return None;
    }

    let variable = run_variable_policy(series, params);
    let matched_total = variable.state.contributed_capital;

    let baseline = run_capital_matched(series, params, matched_total);
    let lump_sum = run_lump_sum(series, params, matched_total);

    let last_day = &series[series.len() - 1];
    let recommendation = recommend(last_day, &variable.state, params);

    let zone_counts = ZoneCounts::tally(&variable.zones);

    Some(BacktestOutcome {
        variable: score(variable.state),
        baseline: score(baseline),
        lump_sum: score(lump_sum),
        zones: variable.zones,
        zone_counts,
        recommendation,
    })
}

fn score(state: StrategyState) -> StrategyRun {
    let metrics = PerformanceMetrics::from_state(&state, CASH_INTEREST_RATE);
    StrategyRun { state, metrics }
}

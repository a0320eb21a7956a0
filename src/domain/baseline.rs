//! Capital-matched fixed-rate DCA baseline.
//!
//! A non-adaptive control: the same total fresh capital as the variable
//! policy, spread evenly across the period. Never branches on zone, never
//! drains or sells.

use super::market_day::MarketDay;
use super::params::{CASH_INTEREST_RATE, SimulationParams};
use super::state::StrategyState;

/// Run a fixed-contribution DCA whose total injected capital equals
/// `matched_total` (the variable policy's final contributed capital).
/// The reserve is seeded like the variable policy's and accrues the same
/// interest, but is never deployed.
pub fn run_capital_matched(
    series: &[MarketDay],
    params: &SimulationParams,
    matched_total: f64,
) -> StrategyState {
    let mut state = StrategyState::seed(0.0, params.initial_capital, 0.0, series[0].price);

    let trade_days = series.len().saturating_sub(1);
    if trade_days == 0 {
        return state;
    }
    let daily_contribution = matched_total / trade_days as f64;

    for day in &series[1..] {
        state.accrue_daily_interest(CASH_INTEREST_RATE);
        state.buy(daily_contribution, day.price);
        state.contributed_capital += daily_contribution;
        state.record_day(day.price);
        state.push_return(daily_contribution);
    }

    state
}

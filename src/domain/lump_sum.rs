//! Lump-sum buy-and-hold benchmark.

use super::market_day::MarketDay;
use super::params::SimulationParams;
use super::state::StrategyState;

/// Deploy everything at the first day's price and hold: the initial capital
/// plus all the fresh capital the variable policy would have drip-fed in,
/// as if it were available up front. `matched_total` is the variable
/// policy's final contributed capital; the invested history is pinned to it
/// for metric comparability.
pub fn run_lump_sum(
    series: &[MarketDay],
    params: &SimulationParams,
    matched_total: f64,
) -> StrategyState {
    let first_price = series[0].price;
    let total_units = (params.initial_capital + matched_total) / first_price;

    let mut state = StrategyState::seed(total_units, 0.0, matched_total, first_price);

    for day in &series[1..] {
        state.record_day(day.price);
        state.push_return(0.0);
    }

    state
}

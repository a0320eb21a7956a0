//! The variable-rate DCA simulator.
//!
//! Walks the series from day 1, classifies each day, and scales the daily
//! contribution by zone: oversized buys plus reserve drains while
//! accumulating, flat buys while neutral, token buys plus partial sells
//! while reducing.

use super::market_day::MarketDay;
use super::params::{CASH_INTEREST_RATE, SimulationParams};
use super::policy::plan_trade;
use super::state::StrategyState;
use super::zone::Zone;

/// Finalized output of one variable-policy walk.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableRun {
    pub state: StrategyState,
    /// One label per simulated day (the seed day gets none).
    pub zones: Vec<Zone>,
}

/// Run the variable policy over the series. Day 0 is a seed row only: the
/// initial capital sits in the cash reserve, no trade, no return.
///
/// The series must be non-empty and ascending by date; the engine gates the
/// empty case before calling.
pub fn run_variable_policy(series: &[MarketDay], params: &SimulationParams) -> VariableRun {
    let mut state = StrategyState::seed(0.0, params.initial_capital, 0.0, series[0].price);
    let mut zones = Vec::with_capacity(series.len().saturating_sub(1));

    for day in &series[1..] {
        state.accrue_daily_interest(CASH_INTEREST_RATE);

        let sentiment = params.effective_sentiment(day.date, day.sentiment);
        let zone = Zone::classify_day(day, sentiment, params.t1, params.t3);
        let plan = plan_trade(zone, params, state.cash_reserve);

        state.cash_reserve -= plan.drain_amount;
        if plan.sell_fraction > 0.0 {
            let sold_units = state.asset_held * plan.sell_fraction;
            state.asset_held -= sold_units;
            state.cash_reserve += sold_units * day.price;
        }
        state.cash_reserve += plan.banked;

        state.buy(plan.total_buy, day.price);
        state.contributed_capital += plan.fresh_input;

        state.record_day(day.price);
        state.push_return(plan.fresh_input);
        zones.push(zone);
    }

    VariableRun { state, zones }
}

//! "What to do today" extraction from the final simulated day.

use chrono::NaiveDate;
use serde::Serialize;

use super::market_day::MarketDay;
use super::params::SimulationParams;
use super::policy::{TradePlan, plan_trade};
use super::state::StrategyState;
use super::zone::Zone;

/// Read-only projection of the final day for the execution side: the day's
/// classification plus the trade the policy would place, computed without
/// mutating the finished state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub date: NaiveDate,
    pub price: f64,
    pub sentiment: i64,
    pub ema_short: f64,
    pub ema_mid: f64,
    pub cash_reserve: f64,
    pub interest_accrued: f64,
    pub zone: Zone,
    /// Coarse sentiment bucket, 1-5.
    pub tier: u8,
    pub plan: TradePlan,
    /// Asset units the plan's sell fraction amounts to today.
    pub sell_units: f64,
}

/// Derive today's action from the final day and the final state of a
/// completed variable-policy run. Uses the same arithmetic as the
/// simulator so the answer matches what a replay would do.
pub fn recommend(
    day: &MarketDay,
    state: &StrategyState,
    params: &SimulationParams,
) -> Recommendation {
    let sentiment = params.effective_sentiment(day.date, day.sentiment);
    let zone = Zone::classify_day(day, sentiment, params.t1, params.t3);
    let plan = plan_trade(zone, params, state.cash_reserve);

    Recommendation {
        date: day.date,
        price: day.price,
        sentiment,
        ema_short: day.ema_short,
        ema_mid: day.ema_mid,
        cash_reserve: state.cash_reserve,
        interest_accrued: state.interest_accrued,
        zone,
        tier: day.sentiment_tier(),
        plan,
        sell_units: state.asset_held * plan.sell_fraction,
    }
}

//! Simulation parameters and policy constants.

use chrono::NaiveDate;
use serde::Serialize;

/// Annual nominal rate earned by idle cash reserve, compounded daily.
/// Doubles as the risk-free rate in metric computation so the benchmark
/// comparison stays internally consistent.
pub const CASH_INTEREST_RATE: f64 = 0.045;

/// Calendar-day annualization basis. The asset trades every day.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Fraction of the cash reserve deployed per accumulation day, expressed as
/// a divisor: each such day drains reserve/15 on top of the reduction floor.
pub const RESERVE_DRAIN_DIVISOR: f64 = 15.0;

/// Test/what-if hook: force the sentiment index to a fixed value, optionally
/// only within a date window. Applied before classification; the underlying
/// series is never touched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentOverride {
    pub value: i64,
    pub window: Option<(NaiveDate, NaiveDate)>,
}

impl SentimentOverride {
    /// Effective sentiment for a day under this override.
    pub fn apply(&self, date: NaiveDate, actual: i64) -> i64 {
        match self.window {
            Some((start, end)) if date < start || date > end => actual,
            _ => self.value,
        }
    }
}

/// Caller-supplied knobs for one backtest run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationParams {
    /// Seed capital, held as cash reserve at the start of the walk.
    pub initial_capital: f64,
    /// Nominal daily contribution in USD.
    pub base_dca: f64,
    /// Accumulation sentiment ceiling.
    pub t1: i64,
    /// Reduction sentiment floor. Expected above `t1`, not enforced.
    pub t3: i64,
    /// Contribution multiplier on accumulation days.
    pub f1: f64,
    /// Contribution multiplier on reduction days.
    pub f3: f64,
    /// Percent of holdings sold per reduction day.
    pub sell_factor: f64,
    pub extreme_sentiment: Option<SentimentOverride>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        SimulationParams {
            initial_capital: 10_000.0,
            base_dca: 20.0,
            t1: 67,
            t3: 77,
            f1: 10.0,
            f3: 0.0,
            sell_factor: 5.0,
            extreme_sentiment: None,
        }
    }
}

impl SimulationParams {
    /// Sentiment index to classify with, after the optional override.
    pub fn effective_sentiment(&self, date: NaiveDate, actual: i64) -> i64 {
        match &self.extreme_sentiment {
            Some(ov) => ov.apply(date, actual),
            None => actual,
        }
    }
}

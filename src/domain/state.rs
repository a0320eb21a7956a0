//! Mutable accumulator for one simulated strategy walk.

use super::params::DAYS_PER_YEAR;

/// Portfolio state owned by exactly one simulator run. Seeded with a day-0
/// row, mutated once per subsequent day in date order, then read-only.
///
/// The three histories stay parallel: one entry per input day, including the
/// seed day. `return_history` has one entry per day after the seed.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyState {
    /// Asset units currently held.
    pub asset_held: f64,
    /// Cumulative fresh capital injected. Excludes the initial capital,
    /// reserve drains, and interest.
    pub contributed_capital: f64,
    /// Uninvested dry powder, interest-bearing.
    pub cash_reserve: f64,
    /// Cumulative interest earned by the reserve.
    pub interest_accrued: f64,
    pub value_history: Vec<f64>,
    pub invested_history: Vec<f64>,
    pub cash_history: Vec<f64>,
    pub return_history: Vec<f64>,
}

impl StrategyState {
    /// Create a state and record its day-0 row at the given price.
    pub fn seed(asset_held: f64, cash_reserve: f64, contributed_capital: f64, price: f64) -> Self {
        let mut state = StrategyState {
            asset_held,
            contributed_capital,
            cash_reserve,
            interest_accrued: 0.0,
            value_history: Vec::new(),
            invested_history: Vec::new(),
            cash_history: Vec::new(),
            return_history: Vec::new(),
        };
        state.record_day(price);
        state
    }

    /// One day of compounding on the reserve at `annual_rate / 365`.
    /// Returns the interest earned today.
    pub fn accrue_daily_interest(&mut self, annual_rate: f64) -> f64 {
        let earned = self.cash_reserve * annual_rate / DAYS_PER_YEAR;
        self.cash_reserve += earned;
        self.interest_accrued += earned;
        earned
    }

    /// Convert a USD amount to asset units at the given price.
    pub fn buy(&mut self, amount: f64, price: f64) {
        self.asset_held += amount / price;
    }

    /// Mark-to-market value at the given price: holdings plus reserve.
    pub fn portfolio_value(&self, price: f64) -> f64 {
        self.asset_held * price + self.cash_reserve
    }

    /// Append today's value/invested/cash snapshots. Returns today's value.
    pub fn record_day(&mut self, price: f64) -> f64 {
        let value = self.portfolio_value(price);
        self.value_history.push(value);
        self.invested_history.push(self.contributed_capital);
        self.cash_history.push(self.cash_reserve);
        value
    }

    /// Append today's return, backing the fresh injection out of the value
    /// change so the return reflects market performance, not inflow.
    /// Call after `record_day`, once at least two rows exist.
    pub fn push_return(&mut self, fresh_input: f64) {
        let n = self.value_history.len();
        let new_value = self.value_history[n - 1];
        let prev_value = self.value_history[n - 2];
        self.return_history.push((new_value - fresh_input) / prev_value - 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn seed_records_day_zero_row() {
        let state = StrategyState::seed(0.0, 10_000.0, 0.0, 50_000.0);
        assert_eq!(state.value_history, vec![10_000.0]);
        assert_eq!(state.invested_history, vec![0.0]);
        assert_eq!(state.cash_history, vec![10_000.0]);
        assert!(state.return_history.is_empty());
    }

    #[test]
    fn seed_with_holdings_marks_to_market() {
        let state = StrategyState::seed(0.5, 0.0, 3_000.0, 50_000.0);
        assert_relative_eq!(state.value_history[0], 25_000.0);
        assert_relative_eq!(state.invested_history[0], 3_000.0);
        assert_relative_eq!(state.cash_history[0], 0.0);
    }

    #[test]
    fn interest_compounds_on_reserve() {
        let mut state = StrategyState::seed(0.0, 1_000.0, 0.0, 50_000.0);
        let earned = state.accrue_daily_interest(0.045);
        assert_relative_eq!(earned, 1_000.0 * 0.045 / 365.0);
        assert_relative_eq!(state.cash_reserve, 1_000.0 + earned);
        assert_relative_eq!(state.interest_accrued, earned);

        let earned2 = state.accrue_daily_interest(0.045);
        assert!(earned2 > earned);
        assert_relative_eq!(state.interest_accrued, earned + earned2);
    }

    #[test]
    fn interest_on_empty_reserve_is_zero() {
        let mut state = StrategyState::seed(0.0, 0.0, 0.0, 50_000.0);
        assert_relative_eq!(state.accrue_daily_interest(0.045), 0.0);
        assert_relative_eq!(state.cash_reserve, 0.0);
    }

    #[test]
    fn buy_adds_units_at_price() {
        let mut state = StrategyState::seed(0.0, 1_000.0, 0.0, 50_000.0);
        state.buy(500.0, 50_000.0);
        assert_relative_eq!(state.asset_held, 0.01);
    }

    #[test]
    fn push_return_backs_out_fresh_input() {
        let mut state = StrategyState::seed(0.0, 1_000.0, 0.0, 50_000.0);
        state.buy(100.0, 50_000.0);
        state.contributed_capital += 100.0;
        state.record_day(55_000.0);
        state.push_return(100.0);

        // value went 1000 -> 1110; backing out the $100 injection leaves 1%.
        let expected = (1_110.0 - 100.0) / 1_000.0 - 1.0;
        assert_relative_eq!(state.return_history[0], expected, epsilon = 1e-9);
    }

    #[test]
    fn histories_stay_parallel() {
        let mut state = StrategyState::seed(0.0, 1_000.0, 0.0, 50_000.0);
        for i in 0..5 {
            state.record_day(50_000.0 + i as f64 * 100.0);
            state.push_return(0.0);
        }
        assert_eq!(state.value_history.len(), 6);
        assert_eq!(state.invested_history.len(), 6);
        assert_eq!(state.cash_history.len(), 6);
        assert_eq!(state.return_history.len(), 5);
    }
}

//! Risk-adjusted performance metrics over a finalized strategy run.

use serde::Serialize;

use super::params::DAYS_PER_YEAR;
use super::state::StrategyState;

/// Derived once from a finished walk; immutable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceMetrics {
    pub sharpe: f64,
    pub sortino: f64,
    pub annualized_return: f64,
}

impl PerformanceMetrics {
    /// Neutral result for degenerate input.
    pub fn zero() -> Self {
        PerformanceMetrics {
            sharpe: 0.0,
            sortino: 0.0,
            annualized_return: 0.0,
        }
    }

    pub fn from_state(state: &StrategyState, risk_free_rate: f64) -> Self {
        Self::compute(
            &state.return_history,
            &state.invested_history,
            &state.value_history,
            risk_free_rate,
        )
    }

    /// Compute Sharpe, Sortino, and a CAGR-style annualized return.
    ///
    /// Daily returns are annualized on a 365-day calendar. The downside
    /// variance keeps the full sample count in its divisor: flat and
    /// positive days contribute zero rather than being excluded. Any
    /// denominator that can legitimately be zero is clamped instead of
    /// letting NaN through.
    pub fn compute(
        returns: &[f64],
        invested: &[f64],
        values: &[f64],
        risk_free_rate: f64,
    ) -> Self {
        if returns.len() < 2 {
            return Self::zero();
        }

        let n = returns.len() as f64;
        let mean = returns.iter().sum::<f64>() / n;

        let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
        let annualized_stddev = variance.sqrt() * DAYS_PER_YEAR.sqrt();

        let downside_variance = returns
            .iter()
            .filter(|&&r| r < 0.0)
            .map(|r| r.powi(2))
            .sum::<f64>()
            / n;
        let annualized_downside = downside_variance.sqrt() * DAYS_PER_YEAR.sqrt();

        let annualized_mean = mean * DAYS_PER_YEAR;
        let excess = annualized_mean - risk_free_rate;

        let sharpe_divisor = if annualized_stddev == 0.0 {
            1.0
        } else {
            annualized_stddev
        };
        let sortino_divisor = if annualized_downside == 0.0 {
            1.0
        } else {
            annualized_downside
        };

        let sharpe = excess / sharpe_divisor;
        let sortino = excess / sortino_divisor;

        let final_value = values.last().copied().unwrap_or(0.0);
        let final_invested = invested.last().copied().unwrap_or(0.0);
        let profit = final_value - final_invested;
        let avg_capital = if invested.is_empty() {
            0.0
        } else {
            invested.iter().sum::<f64>() / invested.len() as f64
        };
        let years = n / DAYS_PER_YEAR;

        let annualized_return = if years > 0.0 && avg_capital > 0.0 {
            let total_return_ratio = profit / avg_capital;
            (1.0 + total_return_ratio).powf(1.0 / years) - 1.0
        } else {
            0.0
        };

        PerformanceMetrics {
            sharpe,
            sortino,
            annualized_return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn degenerate_input_yields_zero_metrics() {
        let m = PerformanceMetrics::compute(&[], &[], &[], 0.045);
        assert_eq!(m, PerformanceMetrics::zero());

        let m = PerformanceMetrics::compute(&[0.01], &[100.0], &[100.0], 0.045);
        assert_eq!(m, PerformanceMetrics::zero());
    }

    #[test]
    fn zero_variance_clamps_the_divisor() {
        // constant positive return: stddev is 0, divisor clamps to 1
        let returns = vec![0.001; 10];
        let invested = vec![100.0; 10];
        let values = vec![100.0; 10];
        let m = PerformanceMetrics::compute(&returns, &invested, &values, 0.0);

        let annualized_mean = 0.001 * 365.0;
        assert_relative_eq!(m.sharpe, annualized_mean, epsilon = 1e-9);
        // no negative days either, so sortino clamps the same way
        assert_relative_eq!(m.sortino, annualized_mean, epsilon = 1e-9);
    }

    #[test]
    fn sharpe_uses_population_variance() {
        let returns = vec![0.02, 0.0, 0.02, 0.0];
        let m = PerformanceMetrics::compute(&returns, &[100.0; 4], &[100.0; 4], 0.0);

        // mean 0.01, population stddev 0.01 (sample stddev would differ),
        // both sides annualized so the ratio collapses to sqrt(365)
        let expected = 0.01 * 365.0 / (0.01 * 365.0_f64.sqrt());
        assert_relative_eq!(m.sharpe, expected, epsilon = 1e-9);
    }

    #[test]
    fn downside_divisor_keeps_full_sample_count() {
        // one losing day out of four: downside variance = r^2 / 4, not r^2 / 1
        let returns = vec![0.03, -0.02, 0.0, 0.0];
        let m = PerformanceMetrics::compute(&returns, &[100.0; 4], &[100.0; 4], 0.0);

        let mean = (0.03 - 0.02) / 4.0;
        let downside = ((-0.02_f64).powi(2) / 4.0).sqrt() * 365.0_f64.sqrt();
        let expected_sortino = mean * 365.0 / downside;
        assert_relative_eq!(m.sortino, expected_sortino, epsilon = 1e-9);
    }

    #[test]
    fn risk_free_rate_is_subtracted() {
        let returns = vec![0.001, 0.002, 0.0005, 0.0015];
        let a = PerformanceMetrics::compute(&returns, &[100.0; 4], &[100.0; 4], 0.0);
        let b = PerformanceMetrics::compute(&returns, &[100.0; 4], &[100.0; 4], 0.045);
        assert!(b.sharpe < a.sharpe);
        assert!(b.sortino < a.sortino);
    }

    #[test]
    fn annualized_return_over_one_year_is_total_return_ratio() {
        let returns = vec![0.0; 365];
        let invested = vec![1_000.0; 365];
        let values = {
            let mut v = vec![1_000.0; 364];
            v.push(1_200.0);
            v
        };
        let m = PerformanceMetrics::compute(&returns, &invested, &values, 0.0);
        // profit 200 over average capital 1000, one year elapsed
        assert_relative_eq!(m.annualized_return, 0.2, epsilon = 1e-9);
    }

    #[test]
    fn annualized_return_zero_without_capital() {
        let returns = vec![0.01, 0.02, 0.03];
        let invested = vec![0.0; 3];
        let values = vec![10.0, 20.0, 30.0];
        let m = PerformanceMetrics::compute(&returns, &invested, &values, 0.0);
        assert_relative_eq!(m.annualized_return, 0.0);
    }

    #[test]
    fn from_state_reads_histories() {
        let mut state = crate::domain::state::StrategyState::seed(0.0, 1_000.0, 0.0, 50_000.0);
        for _ in 0..5 {
            state.record_day(50_000.0);
            state.push_return(0.0);
        }
        let m = PerformanceMetrics::from_state(&state, 0.045);
        assert!(m.sharpe.is_finite());
        assert!(m.sortino.is_finite());
    }
}

//! Report generation port trait.

use crate::domain::engine::BacktestOutcome;
use crate::domain::error::AlphariseError;
use crate::domain::params::SimulationParams;

/// Port for writing backtest reports.
pub trait ReportPort {
    fn write(
        &self,
        outcome: &BacktestOutcome,
        params: &SimulationParams,
        output_path: &str,
    ) -> Result<(), AlphariseError>;
}

//! Per-zone trade arithmetic.
//!
//! Shared by the day-by-day simulator and the recommendation extractor so
//! that "today's trade" is reproducible without replaying the whole series.

use serde::Serialize;

use super::params::{RESERVE_DRAIN_DIVISOR, SimulationParams};
use super::zone::Zone;

/// Dollar breakdown of one day's action under the variable policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TradePlan {
    /// New outside capital put to work today.
    pub fresh_input: f64,
    /// Reserve cash deployed on top of the fresh input.
    pub drain_amount: f64,
    /// Total USD converted to asset units today.
    pub total_buy: f64,
    /// Fraction of current holdings to sell (reduction days only).
    pub sell_fraction: f64,
    /// Unspent slice of the nominal contribution, banked to reserve.
    pub banked: f64,
}

/// Compute the day's trade amounts for a given zone and reserve balance.
///
/// Accumulation days drain the reserve toward `base_dca * f3 +
/// reserve / 15`, capped at what the reserve holds. Reduction days invest
/// only `base_dca * f3`, bank the unspent remainder, and sell
/// `sell_factor` percent of holdings. Neutral days invest `base_dca` flat.
pub fn plan_trade(zone: Zone, params: &SimulationParams, cash_reserve: f64) -> TradePlan {
    match zone {
        Zone::Accumulation => {
            let fresh_input = params.base_dca * params.f1;
            let drain_target =
                params.base_dca * params.f3 + cash_reserve / RESERVE_DRAIN_DIVISOR;
            let drain_amount = cash_reserve.min(drain_target);
            TradePlan {
                fresh_input,
                drain_amount,
                total_buy: fresh_input + drain_amount,
                sell_fraction: 0.0,
                banked: 0.0,
            }
        }
        Zone::Neutral => TradePlan {
            fresh_input: params.base_dca,
            drain_amount: 0.0,
            total_buy: params.base_dca,
            sell_fraction: 0.0,
            banked: 0.0,
        },
        Zone::Reduction => {
            let fresh_input = params.base_dca * params.f3;
            TradePlan {
                fresh_input,
                drain_amount: 0.0,
                total_buy: fresh_input,
                sell_fraction: params.sell_factor / 100.0,
                banked: params.base_dca - fresh_input,
            }
        }
    }
}

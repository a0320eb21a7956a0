//! Config loading and validation for simulation parameters.
//!
//! Every field is checked before a run; invalid values fail fast with the
//! offending section/key rather than producing a quietly wrong backtest.

use chrono::NaiveDate;

use super::error::AlphariseError;
use super::params::{SentimentOverride, SimulationParams};
use crate::ports::config_port::ConfigPort;

/// Build validated [`SimulationParams`] from a `[strategy]` config section.
/// Missing keys fall back to the defaults.
pub fn load_params(config: &dyn ConfigPort) -> Result<SimulationParams, AlphariseError> {
    let defaults = SimulationParams::default();

    let params = SimulationParams {
        initial_capital: config.get_double("strategy", "initial_capital", defaults.initial_capital),
        base_dca: config.get_double("strategy", "base_dca", defaults.base_dca),
        t1: config.get_int("strategy", "t1", defaults.t1),
        t3: config.get_int("strategy", "t3", defaults.t3),
        f1: config.get_double("strategy", "f1", defaults.f1),
        f3: config.get_double("strategy", "f3", defaults.f3),
        sell_factor: config.get_double("strategy", "sell_factor", defaults.sell_factor),
        extreme_sentiment: load_override(config)?,
    };

    validate_params(&params)?;
    Ok(params)
}

fn load_override(config: &dyn ConfigPort) -> Result<Option<SentimentOverride>, AlphariseError> {
    if !config.get_bool("strategy", "simulate_extreme_sentiment", false) {
        return Ok(None);
    }

    let value = config.get_int("strategy", "extreme_sentiment_value", 95);
    let start = config.get_string("strategy", "extreme_sentiment_start");
    let end = config.get_string("strategy", "extreme_sentiment_end");

    let window = match (start, end) {
        (None, None) => None,
        (Some(s), Some(e)) => {
            let start = parse_date(&s, "extreme_sentiment_start")?;
            let end = parse_date(&e, "extreme_sentiment_end")?;
            if end < start {
                return Err(AlphariseError::ConfigInvalid {
                    section: "strategy".into(),
                    key: "extreme_sentiment_end".into(),
                    reason: "window end precedes its start".into(),
                });
            }
            Some((start, end))
        }
        (Some(_), None) => {
            return Err(AlphariseError::ConfigMissing {
                section: "strategy".into(),
                key: "extreme_sentiment_end".into(),
            });
        }
        (None, Some(_)) => {
            return Err(AlphariseError::ConfigMissing {
                section: "strategy".into(),
                key: "extreme_sentiment_start".into(),
            });
        }
    };

    Ok(Some(SentimentOverride { value, window }))
}

fn parse_date(value: &str, key: &str) -> Result<NaiveDate, AlphariseError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| AlphariseError::ConfigInvalid {
        section: "strategy".into(),
        key: key.into(),
        reason: format!("invalid date ({e}), expected YYYY-MM-DD"),
    })
}

/// Validate parameter ranges. `t1 < t3` is conventional but deliberately
/// not enforced; the classifier's precedence handles the overlap.
pub fn validate_params(params: &SimulationParams) -> Result<(), AlphariseError> {
    let invalid = |key: &str, reason: &str| AlphariseError::ConfigInvalid {
        section: "strategy".into(),
        key: key.into(),
        reason: reason.into(),
    };

    if params.initial_capital < 0.0 {
        return Err(invalid("initial_capital", "must be non-negative"));
    }
    if params.base_dca <= 0.0 {
        return Err(invalid("base_dca", "must be positive"));
    }
    if !(0..=100).contains(&params.t1) {
        return Err(invalid("t1", "must be between 0 and 100"));
    }
    if !(0..=100).contains(&params.t3) {
        return Err(invalid("t3", "must be between 0 and 100"));
    }
    if params.f1 < 0.0 {
        return Err(invalid("f1", "must be non-negative"));
    }
    if params.f3 < 0.0 {
        return Err(invalid("f3", "must be non-negative"));
    }
    if !(0.0..=100.0).contains(&params.sell_factor) {
        return Err(invalid("sell_factor", "must be between 0 and 100"));
    }
    Ok(())
}

#![allow(dead_code)]

use chrono::NaiveDate;
use alpharise::domain::error::AlphariseError;
pub use alpharise::domain::market_day::MarketDay;
use alpharise::domain::params::SimulationParams;
use alpharise::ports::data_port::MarketDataPort;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn day_at(offset: u64, price: f64, sentiment: i64, ema_short: f64, ema_mid: f64) -> MarketDay {
    MarketDay {
        date: date(2024, 1, 1) + chrono::Days::new(offset),
        price,
        sentiment,
        ema_short,
        ema_mid,
        ema_long: ema_mid * 0.97,
    }
}

/// A day that classifies Neutral under any 0-100 thresholds with a gap:
/// price sits between the short EMA (above) and the mid EMA (below).
pub fn neutral_day(offset: u64, price: f64) -> MarketDay {
    day_at(offset, price, 50, price * 1.05, price * 0.95)
}

/// A day that classifies Accumulation for t1 > 40.
pub fn accumulation_day(offset: u64, price: f64) -> MarketDay {
    day_at(offset, price, 40, price * 1.05, price * 1.10)
}

/// A day that classifies Reduction for t3 < 85.
pub fn reduction_day(offset: u64, price: f64) -> MarketDay {
    day_at(offset, price, 85, price * 0.90, price * 0.85)
}

/// Deterministic pseudo-varied series mixing all three zones.
pub fn varied_series(len: u64) -> Vec<MarketDay> {
    (0..len)
        .map(|i| {
            let price = 55_000.0 + (i as f64 * 2_137.0) % 30_000.0;
            let sentiment = (i as i64 * 17) % 100;
            day_at(i, price, sentiment, price * 1.02, price * 0.98)
        })
        .collect()
}

pub fn default_params() -> SimulationParams {
    SimulationParams::default()
}

pub struct MockMarketDataPort {
    pub days: Vec<MarketDay>,
    pub error: Option<String>,
}

impl MockMarketDataPort {
    pub fn new(days: Vec<MarketDay>) -> Self {
        Self { days, error: None }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            days: Vec::new(),
            error: Some(reason.to_string()),
        }
    }
}

impl MarketDataPort for MockMarketDataPort {
    fn fetch_series(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<MarketDay>, AlphariseError> {
        if let Some(reason) = &self.error {
            return Err(AlphariseError::Data {
                reason: reason.clone(),
            });
        }
        let mut days = self.days.clone();
        if let Some(start) = start_date {
            days.retain(|d| d.date >= start);
        }
        if let Some(end) = end_date {
            days.retain(|d| d.date <= end);
        }
        Ok(days)
    }

    fn data_range(&self) -> Result<Option<(NaiveDate, NaiveDate, usize)>, AlphariseError> {
        if let Some(reason) = &self.error {
            return Err(AlphariseError::Data {
                reason: reason.clone(),
            });
        }
        match (self.days.first(), self.days.last()) {
            (Some(first), Some(last)) => Ok(Some((first.date, last.date, self.days.len()))),
            _ => Ok(None),
        }
    }
}

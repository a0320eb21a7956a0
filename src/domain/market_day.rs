//! Daily market observation: price, sentiment index, and trend EMAs.

use chrono::NaiveDate;
use serde::Serialize;

/// One enriched day of the input series. The upstream provider supplies the
/// EMAs and the sentiment index; the engine never recomputes them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketDay {
    pub date: NaiveDate,
    pub price: f64,
    /// Composite sentiment index, conventionally 0-100. Low reads as
    /// undervalued, high as overvalued.
    pub sentiment: i64,
    /// ~20-period EMA of price.
    pub ema_short: f64,
    /// ~50-period EMA of price.
    pub ema_mid: f64,
    /// ~100-period EMA of price.
    pub ema_long: f64,
}

impl MarketDay {
    /// Coarse sentiment bucket, 1 (deep fear) through 5 (euphoria).
    pub fn sentiment_tier(&self) -> u8 {
        match self.sentiment {
            s if s < 30 => 1,
            s if s < 50 => 2,
            s if s < 70 => 3,
            s if s < 85 => 4,
            _ => 5,
        }
    }
}

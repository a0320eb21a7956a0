//! Per-day market regime classification.

use serde::Serialize;
use std::fmt;

use super::market_day::MarketDay;

/// Market regime label driving the variable policy's daily branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Zone {
    Accumulation,
    Neutral,
    Reduction,
}

impl Zone {
    /// Classify a single day against the two sentiment thresholds.
    ///
    /// Accumulation is checked before Reduction: if both conditions hold at
    /// once, accumulation wins. The precedence is part of the policy, not an
    /// accident of branch layout.
    pub fn classify(
        price: f64,
        ema_short: f64,
        ema_mid: f64,
        sentiment: i64,
        t1: i64,
        t3: i64,
    ) -> Zone {
        if price < ema_mid && sentiment < t1 {
            Zone::Accumulation
        } else if price > ema_short && sentiment > t3 {
            Zone::Reduction
        } else {
            Zone::Neutral
        }
    }

    /// Classify a [`MarketDay`], optionally overriding its sentiment index.
    pub fn classify_day(day: &MarketDay, sentiment: i64, t1: i64, t3: i64) -> Zone {
        Zone::classify(day.price, day.ema_short, day.ema_mid, sentiment, t1, t3)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Zone::Accumulation => "accumulate",
            Zone::Neutral => "neutral",
            Zone::Reduction => "reduce",
        };
        write!(f, "{label}")
    }
}

/// Tally of zone labels over a simulated run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ZoneCounts {
    pub accumulation: usize,
    pub neutral: usize,
    pub reduction: usize,
}

impl ZoneCounts {
    pub fn tally(zones: &[Zone]) -> Self {
        let mut counts = ZoneCounts::default();
        for zone in zones {
            counts.record(*zone);
        }
        counts
    }

    pub fn record(&mut self, zone: Zone) {
        match zone {
            Zone::Accumulation => self.accumulation += 1,
            Zone::Neutral => self.neutral += 1,
            Zone::Reduction => self.reduction += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.accumulation + self.neutral + self.reduction
    }
}

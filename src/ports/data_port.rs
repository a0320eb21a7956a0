//! Market data access port trait.
//!
//! The engine consumes an already-enriched daily series; where it comes
//! from (file, API, database) is the adapter's business.

use chrono::NaiveDate;

use crate::domain::error::AlphariseError;
use crate::domain::market_day::MarketDay;

pub trait MarketDataPort {
    /// Fetch the enriched series, ascending by date, restricted to the
    /// given window when bounds are supplied.
    fn fetch_series(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<MarketDay>, AlphariseError>;

    /// First date, last date, and row count of the available data.
    fn data_range(&self) -> Result<Option<(NaiveDate, NaiveDate, usize)>, AlphariseError>;
}

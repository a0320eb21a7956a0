//! CSV market data adapter.
//!
//! Reads the upstream provider's enriched export: one row per day with
//! `date,price,cbbi,ema20,ema50,ema100` columns, headed.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::domain::error::AlphariseError;
use crate::domain::market_day::MarketDay;
use crate::ports::data_port::MarketDataPort;

pub struct CsvAdapter {
    path: PathBuf,
}

impl CsvAdapter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_all(&self) -> Result<Vec<MarketDay>, AlphariseError> {
        let mut rdr =
            csv::Reader::from_path(&self.path).map_err(|e| AlphariseError::Data {
                reason: format!("failed to open {}: {}", self.path.display(), e),
            })?;

        let mut days = Vec::new();
        for (row, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| AlphariseError::Data {
                reason: format!("CSV parse error at row {}: {}", row + 1, e),
            })?;
            days.push(parse_row(&record, row + 1)?);
        }

        days.sort_by_key(|d| d.date);
        Ok(days)
    }
}

fn field<'a>(
    record: &'a csv::StringRecord,
    index: usize,
    name: &str,
    row: usize,
) -> Result<&'a str, AlphariseError> {
    record.get(index).ok_or_else(|| AlphariseError::Data {
        reason: format!("row {row}: missing {name} column"),
    })
}

fn float(
    record: &csv::StringRecord,
    index: usize,
    name: &str,
    row: usize,
) -> Result<f64, AlphariseError> {
    field(record, index, name, row)?
        .trim()
        .parse()
        .map_err(|e| AlphariseError::Data {
            reason: format!("row {row}: invalid {name} value: {e}"),
        })
}

fn parse_row(record: &csv::StringRecord, row: usize) -> Result<MarketDay, AlphariseError> {
    let date = NaiveDate::parse_from_str(field(record, 0, "date", row)?.trim(), "%Y-%m-%d")
        .map_err(|e| AlphariseError::Data {
            reason: format!("row {row}: invalid date: {e}"),
        })?;
    let sentiment: i64 = field(record, 2, "cbbi", row)?
        .trim()
        .parse()
        .map_err(|e| AlphariseError::Data {
            reason: format!("row {row}: invalid cbbi value: {e}"),
        })?;

    Ok(MarketDay {
        date,
        price: float(record, 1, "price", row)?,
        sentiment,
        ema_short: float(record, 3, "ema20", row)?,
        ema_mid: float(record, 4, "ema50", row)?,
        ema_long: float(record, 5, "ema100", row)?,
    })
}

impl MarketDataPort for CsvAdapter {
    fn fetch_series(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<MarketDay>, AlphariseError> {
        let mut days = self.read_all()?;
        if let Some(start) = start_date {
            days.retain(|d| d.date >= start);
        }
        if let Some(end) = end_date {
            days.retain(|d| d.date <= end);
        }
        Ok(days)
    }

    fn data_range(&self) -> Result<Option<(NaiveDate, NaiveDate, usize)>, AlphariseError> {
        let days = self.read_all()?;
        match (days.first(), days.last()) {
            (Some(first), Some(last)) => Ok(Some((first.date, last.date, days.len()))),
            _ => Ok(None),
        }
    }
}

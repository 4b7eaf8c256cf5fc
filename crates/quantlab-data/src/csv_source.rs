//! CSV-directory-backed market data client.

use crate::cache::BarCache;
use crate::validate::date_range_bounds;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use quantlab_core::error::DataError;
use quantlab_core::traits::MarketData;
use quantlab_core::types::{Bar, BarSeries};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::{debug, info};

/// CSV record format with column-name aliases for common exports.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "time", alias = "timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// Market data client backed by a directory of per-symbol CSV files.
///
/// Looks up `{symbol}.csv` (case variants and a `_daily` suffix are
/// accepted) under the configured directory. Carries an explicit
/// connect/disconnect lifecycle: `connect` verifies the directory
/// exists, and fetching without a session is a `NotConnected` error.
pub struct CsvMarketData {
    dir: PathBuf,
    connected: AtomicBool,
    cache: Mutex<BarCache>,
}

impl CsvMarketData {
    /// Create a client for the given data directory. No session is
    /// opened until `connect` is called.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            connected: AtomicBool::new(false),
            cache: Mutex::new(BarCache::new()),
        }
    }

    fn candidate_paths(&self, symbol: &str) -> Vec<PathBuf> {
        let lower = symbol.to_lowercase();
        vec![
            self.dir.join(format!("{}.csv", symbol)),
            self.dir.join(format!("{}.csv", lower)),
            self.dir.join(format!("{}_daily.csv", symbol)),
            self.dir.join(format!("{}_daily.csv", lower)),
        ]
    }

    fn load_from_path(&self, symbol: &str, path: &Path) -> Result<Vec<Bar>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| DataError::Parse(e.to_string()))?;

        let mut bars = Vec::new();
        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::Parse(e.to_string()))?;
            let timestamp = parse_timestamp(&record.date)?;
            bars.push(Bar::new(
                timestamp,
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume,
            ));
        }

        bars.sort_by_key(|b| b.timestamp);
        debug!(symbol, path = %path.display(), rows = bars.len(), "loaded CSV bars");
        Ok(bars)
    }
}

#[async_trait]
impl MarketData for CsvMarketData {
    async fn connect(&self) -> Result<(), DataError> {
        if !self.dir.is_dir() {
            return Err(DataError::Source(format!(
                "data directory {} does not exist",
                self.dir.display()
            )));
        }
        self.connected.store(true, Ordering::SeqCst);
        info!(dir = %self.dir.display(), "CSV market data session opened");
        Ok(())
    }

    async fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).clear_all();
    }

    async fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn get_market_data(
        &self,
        symbol: &str,
        start: &str,
        end: &str,
    ) -> Result<Option<BarSeries>, DataError> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(DataError::NotConnected);
        }

        {
            let cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(series) = cache.get(symbol, start, end) {
                debug!(symbol, start, end, "cache hit");
                return Ok(Some(series.clone()));
            }
        }

        let Some(path) = self.candidate_paths(symbol).into_iter().find(|p| p.exists()) else {
            return Ok(None);
        };

        let bars = self.load_from_path(symbol, &path)?;

        let (lo, hi) = date_range_bounds(start, end)
            .ok_or_else(|| DataError::Parse(format!("invalid date range {start}-{end}")))?;
        let bars: Vec<Bar> = bars
            .into_iter()
            .filter(|b| (lo..=hi).contains(&b.timestamp))
            .collect();

        if bars.is_empty() {
            return Ok(None);
        }

        let series = BarSeries::new(symbol, bars);
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .put(symbol, start, end, series.clone());
        Ok(Some(series))
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// Parse the timestamp formats seen in daily CSV exports.
fn parse_timestamp(date_str: &str) -> Result<i64, DataError> {
    let formats = [
        "%Y-%m-%d",
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d",
        "%Y%m%d",
        "%m/%d/%Y",
    ];

    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.and_utc().timestamp_millis());
        }
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            if let Some(dt) = d.and_hms_opt(0, 0, 0) {
                return Ok(dt.and_utc().timestamp_millis());
            }
        }
    }

    // Fall back to a raw Unix timestamp, milliseconds if > 10 digits
    if let Ok(ts) = date_str.parse::<i64>() {
        if ts > 10_000_000_000 {
            return Ok(ts);
        }
        return Ok(ts * 1000);
    }

    Err(DataError::Parse(format!("could not parse date: {}", date_str)))
}

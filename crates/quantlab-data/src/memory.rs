//! In-memory market data client.

use crate::validate::date_range_bounds;
use async_trait::async_trait;
use quantlab_core::error::DataError;
use quantlab_core::traits::MarketData;
use quantlab_core::types::{Bar, BarSeries};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Market data client serving pre-loaded series from memory.
///
/// Carries the same explicit session lifecycle as the CSV client, which
/// makes it the collaborator of choice for dispatcher tests and for
/// embedding callers that already hold their bars.
#[derive(Default)]
pub struct MemoryMarketData {
    series: Mutex<HashMap<String, BarSeries>>,
    connected: AtomicBool,
}

impl MemoryMarketData {
    /// Create an empty client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the series held for a symbol.
    pub fn insert(&self, series: BarSeries) {
        self.series
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(series.symbol.clone(), series);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_series(self, series: BarSeries) -> Self {
        self.insert(series);
        self
    }
}

#[async_trait]
impl MarketData for MemoryMarketData {
    async fn connect(&self) -> Result<(), DataError> {
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
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

        let guard = self.series.lock().unwrap_or_else(|e| e.into_inner());
        let Some(series) = guard.get(symbol) else {
            return Ok(None);
        };

        let (lo, hi) = date_range_bounds(start, end)
            .ok_or_else(|| DataError::Parse(format!("invalid date range {start}-{end}")))?;
        let bars: Vec<Bar> = series
            .iter()
            .filter(|b| (lo..=hi).contains(&b.timestamp))
            .copied()
            .collect();

        if bars.is_empty() {
            return Ok(None);
        }
        Ok(Some(BarSeries::new(symbol, bars)))
    }

    fn name(&self) -> &str {
        "memory"
    }
}

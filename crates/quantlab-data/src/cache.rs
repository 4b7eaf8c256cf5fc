//! In-memory bar series cache.

use quantlab_core::types::BarSeries;
use std::collections::HashMap;

/// Simple in-memory cache keyed by symbol and date range, so repeated
/// requests within one session do not re-read files.
#[derive(Debug, Default)]
pub struct BarCache {
    cache: HashMap<String, BarSeries>,
}

impl BarCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn cache_key(symbol: &str, start: &str, end: &str) -> String {
        format!("{}_{}_{}", symbol, start, end)
    }

    /// Get a cached series.
    pub fn get(&self, symbol: &str, start: &str, end: &str) -> Option<&BarSeries> {
        self.cache.get(&Self::cache_key(symbol, start, end))
    }

    /// Store a series.
    pub fn put(&mut self, symbol: &str, start: &str, end: &str, series: BarSeries) {
        self.cache.insert(Self::cache_key(symbol, start, end), series);
    }

    /// Drop every entry for a symbol.
    pub fn clear(&mut self, symbol: &str) {
        self.cache.retain(|k, _| !k.starts_with(symbol));
    }

    /// Drop all entries.
    pub fn clear_all(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantlab_core::types::Bar;

    #[test]
    fn test_cache_round_trip() {
        let mut cache = BarCache::new();
        let series = BarSeries::new("000001.SZ", vec![Bar::new(1, 1.0, 1.0, 1.0, 1.0, 1.0)]);

        assert!(cache.get("000001.SZ", "20240101", "20240201").is_none());
        cache.put("000001.SZ", "20240101", "20240201", series);
        assert!(cache.get("000001.SZ", "20240101", "20240201").is_some());
        // A different range is a different entry
        assert!(cache.get("000001.SZ", "20240101", "20240301").is_none());

        cache.clear("000001.SZ");
        assert!(cache.get("000001.SZ", "20240101", "20240201").is_none());
    }
}

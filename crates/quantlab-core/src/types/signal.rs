//! Position signals derived from a bar series.

use serde::{Deserialize, Serialize};

/// Per-bar position signal: long, flat, or short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Long,
    Flat,
    Short,
}

impl Signal {
    /// Integer value used in return arithmetic: +1, 0, or -1.
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            Signal::Long => 1,
            Signal::Flat => 0,
            Signal::Short => -1,
        }
    }
}

impl Default for Signal {
    fn default() -> Self {
        Signal::Flat
    }
}

/// A signal series aligned index-for-index with the bar series that
/// produced it. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSeries {
    signals: Vec<Signal>,
}

impl SignalSeries {
    /// Create a new signal series.
    pub fn new(signals: Vec<Signal>) -> Self {
        Self { signals }
    }

    /// Get the number of signals.
    #[inline]
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Get a signal by index.
    pub fn get(&self, index: usize) -> Option<Signal> {
        self.signals.get(index).copied()
    }

    /// Get all signals as a slice.
    pub fn as_slice(&self) -> &[Signal] {
        &self.signals
    }

    /// Count the bars whose signal differs from the previous bar's.
    /// Each sign flip or entry/exit counts once; this is the trade
    /// count reported by the metrics calculator.
    pub fn change_count(&self) -> usize {
        self.signals
            .windows(2)
            .filter(|pair| pair[0] != pair[1])
            .count()
    }

    /// Count discrete crossover events: transitions into long from flat
    /// or short, and into short from flat or long.
    pub fn crossover_counts(&self) -> (usize, usize) {
        let mut bullish = 0;
        let mut bearish = 0;
        for pair in self.signals.windows(2) {
            match (pair[0], pair[1]) {
                (Signal::Flat | Signal::Short, Signal::Long) => bullish += 1,
                (Signal::Flat | Signal::Long, Signal::Short) => bearish += 1,
                _ => {}
            }
        }
        (bullish, bearish)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Signal::{Flat, Long, Short};

    #[test]
    fn test_signal_values() {
        assert_eq!(Long.value(), 1);
        assert_eq!(Flat.value(), 0);
        assert_eq!(Short.value(), -1);
    }

    #[test]
    fn test_change_count() {
        let series = SignalSeries::new(vec![Flat, Flat, Long, Long, Short, Long]);
        // Flat->Long, Long->Short, Short->Long
        assert_eq!(series.change_count(), 3);

        let flat = SignalSeries::new(vec![Flat; 10]);
        assert_eq!(flat.change_count(), 0);

        assert_eq!(SignalSeries::new(vec![]).change_count(), 0);
        assert_eq!(SignalSeries::new(vec![Long]).change_count(), 0);
    }

    #[test]
    fn test_crossover_counts() {
        let series = SignalSeries::new(vec![Flat, Long, Short, Short, Long]);
        let (bullish, bearish) = series.crossover_counts();
        assert_eq!(bullish, 2); // Flat->Long, Short->Long
        assert_eq!(bearish, 1); // Long->Short
    }
}

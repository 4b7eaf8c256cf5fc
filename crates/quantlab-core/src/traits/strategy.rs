//! Strategy trait definition.

use crate::error::DataError;
use crate::types::{BarSeries, SignalSeries};

/// Core strategy trait: the closed polymorphic seam for signal
/// generation.
///
/// A strategy is a pure function over an immutable bar series. It
/// derives one position signal per bar, aligned index-for-index with
/// the input, and never mutates the series.
pub trait Strategy: Send + Sync {
    /// Get the unique name of this strategy.
    fn name(&self) -> &str;

    /// Human-readable description including the configured parameters.
    fn describe(&self) -> String;

    /// Generate the position-signal series for the given bars.
    ///
    /// # Errors
    /// Returns [`DataError::EmptySeries`] when the series has no bars.
    fn generate_signals(&self, series: &BarSeries) -> Result<SignalSeries, DataError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Signal;

    struct AlwaysLong;

    impl Strategy for AlwaysLong {
        fn name(&self) -> &str {
            "always-long"
        }

        fn describe(&self) -> String {
            "holds a long position on every bar".to_string()
        }

        fn generate_signals(&self, series: &BarSeries) -> Result<SignalSeries, DataError> {
            if series.is_empty() {
                return Err(DataError::EmptySeries);
            }
            Ok(SignalSeries::new(vec![Signal::Long; series.len()]))
        }
    }

    #[test]
    fn test_signals_align_with_bars() {
        let bars = (0..5)
            .map(|i| crate::types::Bar::new(i, 10.0, 11.0, 9.0, 10.0, 100.0))
            .collect();
        let series = BarSeries::new("000001.SZ", bars);

        let signals = AlwaysLong.generate_signals(&series).unwrap();
        assert_eq!(signals.len(), series.len());
    }

    #[test]
    fn test_empty_series_is_an_error() {
        let series = BarSeries::new("000001.SZ", vec![]);
        assert!(matches!(
            AlwaysLong.generate_signals(&series),
            Err(DataError::EmptySeries)
        ));
    }
}

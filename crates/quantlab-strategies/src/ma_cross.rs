//! Moving-average crossover strategy.
//!
//! Holds a long position while the short-window average sits above the
//! long-window average, a short position while it sits below, and stays
//! flat until both windows have filled or while the averages are equal.

use quantlab_core::error::{DataError, ValidationError};
use quantlab_core::traits::{Indicator, Strategy};
use quantlab_core::types::{BarSeries, Signal, SignalSeries};
use quantlab_indicators::Sma;
use serde::{Deserialize, Serialize};
use tracing::debug;

fn default_short_period() -> usize {
    5
}

fn default_long_period() -> usize {
    20
}

/// Parameters for the moving-average crossover strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaCrossParams {
    /// Short moving-average window in bars
    #[serde(default = "default_short_period")]
    pub short_period: usize,
    /// Long moving-average window in bars
    #[serde(default = "default_long_period")]
    pub long_period: usize,
}

impl Default for MaCrossParams {
    fn default() -> Self {
        Self {
            short_period: default_short_period(),
            long_period: default_long_period(),
        }
    }
}

impl MaCrossParams {
    /// Enforce `1 <= short_period < long_period < series_len`.
    ///
    /// Called by the dispatcher before any signal computation runs, so a
    /// reversed pair never reaches the generator.
    pub fn validate(&self, series_len: usize) -> Result<(), ValidationError> {
        if self.short_period == 0 || self.long_period == 0 {
            return Err(ValidationError::ZeroPeriod);
        }
        if self.short_period >= self.long_period {
            return Err(ValidationError::PeriodOrder {
                short: self.short_period,
                long: self.long_period,
            });
        }
        if self.long_period >= series_len {
            return Err(ValidationError::PeriodExceedsData {
                long: self.long_period,
                len: series_len,
            });
        }
        Ok(())
    }
}

/// Moving-average crossover strategy.
pub struct MaCrossStrategy {
    params: MaCrossParams,
}

impl MaCrossStrategy {
    /// Create a new strategy instance. Parameters are assumed to have
    /// been validated against the series length by the caller.
    pub fn new(params: MaCrossParams) -> Self {
        Self { params }
    }

    /// The configured parameters.
    pub fn params(&self) -> MaCrossParams {
        self.params
    }
}

impl Strategy for MaCrossStrategy {
    fn name(&self) -> &str {
        "MA Crossover"
    }

    fn describe(&self) -> String {
        format!(
            "long while the {}-bar average is above the {}-bar average, short while below",
            self.params.short_period, self.params.long_period
        )
    }

    fn generate_signals(&self, series: &BarSeries) -> Result<SignalSeries, DataError> {
        if series.is_empty() {
            return Err(DataError::EmptySeries);
        }

        let closes = series.closes();
        let short = Sma::new(self.params.short_period).calculate(&closes);
        let long = Sma::new(self.params.long_period).calculate(&closes);

        let signals: Vec<Signal> = short
            .iter()
            .zip(long.iter())
            .map(|pair| match pair {
                (Some(s), Some(l)) if s > l => Signal::Long,
                (Some(s), Some(l)) if s < l => Signal::Short,
                _ => Signal::Flat,
            })
            .collect();

        let signals = SignalSeries::new(signals);
        let (bullish, bearish) = signals.crossover_counts();
        debug!(
            symbol = %series.symbol,
            short_period = self.params.short_period,
            long_period = self.params.long_period,
            bullish_crossovers = bullish,
            bearish_crossovers = bearish,
            "generated crossover signals"
        );

        Ok(signals)
    }
}

//! Return simulation with one-bar execution lag.

use quantlab_core::types::{BarSeries, SignalSeries};
use serde::{Deserialize, Serialize};

/// Per-bar realized and cumulative returns for the asset and the
/// strategy. All vectors are index-aligned with the bar series that
/// produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnSeries {
    /// Per-bar asset return; `None` for the first bar
    pub asset: Vec<Option<f64>>,
    /// Per-bar strategy return, lagged one bar; `None` where undefined
    pub strategy: Vec<Option<f64>>,
    /// Running product of `(1 + asset_return)`, seeded at 1.0
    pub cumulative_asset: Vec<f64>,
    /// Running product of `(1 + strategy_return)`, seeded at 1.0
    pub cumulative_strategy: Vec<f64>,
}

impl ReturnSeries {
    /// The well-defined strategy returns, in order.
    pub fn defined_strategy_returns(&self) -> Vec<f64> {
        self.strategy.iter().filter_map(|r| *r).collect()
    }
}

/// Simulate strategy returns for a bar series and its signal series.
///
/// The strategy return at bar `i` is `signal[i-1] * asset_return[i]`: a
/// signal observed at the close of bar `i-1` can only be acted on from
/// bar `i`, which rules out look-ahead bias. Undefined returns count as
/// zero for compounding only; the underlying values stay `None`.
pub fn simulate(series: &BarSeries, signals: &SignalSeries) -> ReturnSeries {
    let n = series.len();
    debug_assert_eq!(n, signals.len(), "signals must align with bars");

    let closes = series.closes();

    let mut asset: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut strategy: Vec<Option<f64>> = Vec::with_capacity(n);
    for i in 0..n {
        if i == 0 {
            asset.push(None);
            strategy.push(None);
            continue;
        }
        let prev = closes[i - 1];
        let r = (closes[i] - prev) / prev;
        asset.push(Some(r));

        let lagged = signals.get(i - 1).map(|s| s.value() as f64).unwrap_or(0.0);
        strategy.push(Some(lagged * r));
    }

    let compound = |returns: &[Option<f64>]| {
        let mut cumulative = Vec::with_capacity(n);
        let mut acc = 1.0;
        for r in returns {
            acc *= 1.0 + r.unwrap_or(0.0);
            cumulative.push(acc);
        }
        cumulative
    };

    ReturnSeries {
        cumulative_asset: compound(&asset),
        cumulative_strategy: compound(&strategy),
        asset,
        strategy,
    }
}

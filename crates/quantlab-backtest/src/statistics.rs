//! Performance metrics reduced from a return series.

use crate::simulator::ReturnSeries;
use quantlab_core::error::ComputationError;
use quantlab_core::types::SignalSeries;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Fixed annual risk-free assumption used in the Sharpe ratio.
const RISK_FREE_RATE: f64 = 0.03;

/// Annualization assumption: 252 trading bars per year.
const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Scalar performance statistics for one backtest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    /// Last cumulative strategy return minus one
    pub final_return: f64,
    /// Geometric annualization of the final return
    pub annual_return: f64,
    /// Worst decline from a running peak of cumulative return; always <= 0
    pub max_drawdown: f64,
    /// Annualized standard deviation of per-bar strategy returns
    pub volatility: f64,
    /// Excess annual return over the risk-free rate per unit volatility
    pub sharpe_ratio: f64,
    /// Bars whose signal differs from the previous bar's
    pub total_trades: usize,
    /// Winning share of non-zero strategy-return bars
    pub win_rate: f64,
    /// Mean strategy return over all defined bars
    pub avg_return: f64,
    /// Mean over strictly-positive strategy-return bars, 0 when none
    pub avg_win: f64,
    /// Mean over strictly-negative strategy-return bars, 0 when none
    pub avg_loss: f64,
    /// Count of well-defined strategy-return observations
    pub trading_days: usize,
}

impl Metrics {
    /// Reduce a return series to scalar statistics.
    ///
    /// # Errors
    /// [`ComputationError::NoStrategyReturns`] when no well-defined
    /// strategy return exists, and [`ComputationError::NonFinite`] when
    /// a numeric edge case produces a non-finite value. The dispatcher
    /// converts both into an error message rather than propagating.
    pub fn compute(
        returns: &ReturnSeries,
        signals: &SignalSeries,
    ) -> Result<Metrics, ComputationError> {
        let strategy_returns = returns.defined_strategy_returns();
        if strategy_returns.is_empty() {
            return Err(ComputationError::NoStrategyReturns);
        }

        let trading_days = strategy_returns.len();
        let cumulative = &returns.cumulative_strategy;

        let final_return = cumulative.last().copied().unwrap_or(1.0) - 1.0;

        let annual_return =
            (1.0 + final_return).powf(TRADING_DAYS_PER_YEAR / trading_days as f64) - 1.0;

        let mut peak = f64::MIN;
        let mut max_drawdown: f64 = 0.0;
        for &c in cumulative {
            peak = peak.max(c);
            max_drawdown = max_drawdown.min((c - peak) / peak);
        }

        // Sample (n-1) standard deviation, annualized
        let volatility = if trading_days > 1 {
            strategy_returns.as_slice().std_dev() * TRADING_DAYS_PER_YEAR.sqrt()
        } else {
            0.0
        };

        let sharpe_ratio = if volatility > 0.0 {
            (annual_return - RISK_FREE_RATE) / volatility
        } else {
            0.0
        };

        let total_trades = signals.change_count();

        // Exactly-zero bars count as "no trade": excluded from both the
        // numerator and the denominator
        let winning = strategy_returns.iter().filter(|&&r| r > 0.0).count();
        let non_zero = strategy_returns.iter().filter(|&&r| r != 0.0).count();
        let win_rate = if non_zero > 0 {
            winning as f64 / non_zero as f64
        } else {
            0.0
        };

        let avg_return = strategy_returns.as_slice().mean();
        let wins: Vec<f64> = strategy_returns.iter().copied().filter(|&r| r > 0.0).collect();
        let losses: Vec<f64> = strategy_returns.iter().copied().filter(|&r| r < 0.0).collect();
        let avg_win = if wins.is_empty() { 0.0 } else { wins.as_slice().mean() };
        let avg_loss = if losses.is_empty() { 0.0 } else { losses.as_slice().mean() };

        let metrics = Metrics {
            final_return,
            annual_return,
            max_drawdown,
            volatility,
            sharpe_ratio,
            total_trades,
            win_rate,
            avg_return,
            avg_win,
            avg_loss,
            trading_days,
        };
        metrics.check_finite()?;
        Ok(metrics)
    }

    fn check_finite(&self) -> Result<(), ComputationError> {
        let fields = [
            ("final_return", self.final_return),
            ("annual_return", self.annual_return),
            ("max_drawdown", self.max_drawdown),
            ("volatility", self.volatility),
            ("sharpe_ratio", self.sharpe_ratio),
            ("win_rate", self.win_rate),
            ("avg_return", self.avg_return),
            ("avg_win", self.avg_win),
            ("avg_loss", self.avg_loss),
        ];
        for (metric, value) in fields {
            if !value.is_finite() {
                return Err(ComputationError::NonFinite { metric });
            }
        }
        Ok(())
    }
}

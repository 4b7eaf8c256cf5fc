//! Qualitative evaluation of backtest metrics.
//!
//! Pure advisory text generation with fixed thresholds; it never blocks
//! or alters the pipeline.

use crate::statistics::Metrics;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Annual-return tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnTier {
    Excellent,
    Good,
    Mediocre,
    Poor,
}

impl ReturnTier {
    fn of(annual_return: f64) -> Self {
        if annual_return > 0.15 {
            ReturnTier::Excellent
        } else if annual_return > 0.08 {
            ReturnTier::Good
        } else if annual_return > 0.0 {
            ReturnTier::Mediocre
        } else {
            ReturnTier::Poor
        }
    }
}

impl fmt::Display for ReturnTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = match self {
            ReturnTier::Excellent => "[OK] Excellent annual return, above 15%",
            ReturnTier::Good => "[OK] Good annual return, above 8%",
            ReturnTier::Mediocre => "[WARNING] Mediocre annual return, consider tuning parameters",
            ReturnTier::Poor => "[ERROR] Strategy loses money, needs a redesign",
        };
        f.write_str(line)
    }
}

/// Max-drawdown tier, judged on magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawdownTier {
    Excellent,
    Moderate,
    Elevated,
    Severe,
}

impl DrawdownTier {
    fn of(max_drawdown: f64) -> Self {
        let magnitude = max_drawdown.abs();
        if magnitude < 0.05 {
            DrawdownTier::Excellent
        } else if magnitude < 0.10 {
            DrawdownTier::Moderate
        } else if magnitude < 0.20 {
            DrawdownTier::Elevated
        } else {
            DrawdownTier::Severe
        }
    }
}

impl fmt::Display for DrawdownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = match self {
            DrawdownTier::Excellent => "[OK] Excellent risk control, max drawdown under 5%",
            DrawdownTier::Moderate => "[WARNING] Moderate risk, max drawdown between 5% and 10%",
            DrawdownTier::Elevated => "[WARNING] Elevated risk, max drawdown between 10% and 20%",
            DrawdownTier::Severe => "[ERROR] Severe risk, max drawdown above 20%",
        };
        f.write_str(line)
    }
}

/// Sharpe-ratio tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharpeTier {
    Excellent,
    Good,
    Mediocre,
    Poor,
}

impl SharpeTier {
    fn of(sharpe_ratio: f64) -> Self {
        if sharpe_ratio > 1.5 {
            SharpeTier::Excellent
        } else if sharpe_ratio > 1.0 {
            SharpeTier::Good
        } else if sharpe_ratio > 0.5 {
            SharpeTier::Mediocre
        } else {
            SharpeTier::Poor
        }
    }
}

impl fmt::Display for SharpeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = match self {
            SharpeTier::Excellent => "[OK] Excellent Sharpe ratio, strong risk-adjusted returns",
            SharpeTier::Good => "[OK] Good Sharpe ratio, decent risk-adjusted returns",
            SharpeTier::Mediocre => {
                "[WARNING] Mediocre Sharpe ratio, return/risk balance could improve"
            }
            SharpeTier::Poor => "[ERROR] Low Sharpe ratio, strategy efficiency is poor",
        };
        f.write_str(line)
    }
}

/// Win-rate tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinRateTier {
    Excellent,
    Good,
    Mediocre,
}

impl WinRateTier {
    fn of(win_rate: f64) -> Self {
        if win_rate > 0.6 {
            WinRateTier::Excellent
        } else if win_rate > 0.5 {
            WinRateTier::Good
        } else {
            WinRateTier::Mediocre
        }
    }
}

impl fmt::Display for WinRateTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = match self {
            WinRateTier::Excellent => "[OK] Excellent win rate, above 60%",
            WinRateTier::Good => "[OK] Good win rate, above 50%",
            WinRateTier::Mediocre => {
                "[WARNING] Low win rate, consider combining with other indicators"
            }
        };
        f.write_str(line)
    }
}

/// Qualitative assessment of a metrics record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub annual_return: ReturnTier,
    pub max_drawdown: DrawdownTier,
    pub sharpe_ratio: SharpeTier,
    pub win_rate: WinRateTier,
}

impl Evaluation {
    /// Tier every metric. Pure function with no failure modes.
    pub fn of(metrics: &Metrics) -> Self {
        Self {
            annual_return: ReturnTier::of(metrics.annual_return),
            max_drawdown: DrawdownTier::of(metrics.max_drawdown),
            sharpe_ratio: SharpeTier::of(metrics.sharpe_ratio),
            win_rate: WinRateTier::of(metrics.win_rate),
        }
    }

    /// Render the advisory lines.
    pub fn render(&self) -> String {
        format!(
            "  {}\n  {}\n  {}\n  {}\n",
            self.annual_return, self.max_drawdown, self.sharpe_ratio, self.win_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics_with(annual: f64, drawdown: f64, sharpe: f64, win_rate: f64) -> Metrics {
        Metrics {
            final_return: 0.0,
            annual_return: annual,
            max_drawdown: drawdown,
            volatility: 0.1,
            sharpe_ratio: sharpe,
            total_trades: 0,
            win_rate,
            avg_return: 0.0,
            avg_win: 0.0,
            avg_loss: 0.0,
            trading_days: 10,
        }
    }

    #[test]
    fn test_return_tiers() {
        assert_eq!(ReturnTier::of(0.20), ReturnTier::Excellent);
        assert_eq!(ReturnTier::of(0.15), ReturnTier::Good); // boundary is exclusive
        assert_eq!(ReturnTier::of(0.10), ReturnTier::Good);
        assert_eq!(ReturnTier::of(0.05), ReturnTier::Mediocre);
        assert_eq!(ReturnTier::of(0.0), ReturnTier::Poor);
        assert_eq!(ReturnTier::of(-0.3), ReturnTier::Poor);
    }

    #[test]
    fn test_drawdown_tiers_use_magnitude() {
        assert_eq!(DrawdownTier::of(-0.03), DrawdownTier::Excellent);
        assert_eq!(DrawdownTier::of(-0.07), DrawdownTier::Moderate);
        assert_eq!(DrawdownTier::of(-0.15), DrawdownTier::Elevated);
        assert_eq!(DrawdownTier::of(-0.25), DrawdownTier::Severe);
        assert_eq!(DrawdownTier::of(-0.20), DrawdownTier::Severe); // boundary inclusive
    }

    #[test]
    fn test_sharpe_and_win_rate_tiers() {
        assert_eq!(SharpeTier::of(2.0), SharpeTier::Excellent);
        assert_eq!(SharpeTier::of(1.2), SharpeTier::Good);
        assert_eq!(SharpeTier::of(0.7), SharpeTier::Mediocre);
        assert_eq!(SharpeTier::of(0.5), SharpeTier::Poor);

        assert_eq!(WinRateTier::of(0.65), WinRateTier::Excellent);
        assert_eq!(WinRateTier::of(0.55), WinRateTier::Good);
        assert_eq!(WinRateTier::of(0.50), WinRateTier::Mediocre);
        assert_eq!(WinRateTier::of(0.0), WinRateTier::Mediocre);
    }

    #[test]
    fn test_render_covers_all_four_axes() {
        let evaluation = Evaluation::of(&metrics_with(0.2, -0.03, 2.0, 0.65));
        let text = evaluation.render();
        assert_eq!(text.matches("[OK]").count(), 4);

        let evaluation = Evaluation::of(&metrics_with(-0.1, -0.3, 0.1, 0.2));
        let text = evaluation.render();
        assert!(text.contains("loses money"));
        assert!(text.contains("above 20%"));
    }
}

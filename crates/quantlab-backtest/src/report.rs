//! Backtest report rendering.

use crate::evaluate::Evaluation;
use crate::statistics::Metrics;
use quantlab_data::format::{number, percentage};
use quantlab_strategies::{MaCrossParams, StrategyKind};
use serde::{Deserialize, Serialize};

/// Complete result of one backtest run. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestReport {
    pub symbol: String,
    pub start_date: String,
    pub end_date: String,
    pub bar_count: usize,
    pub params: MaCrossParams,
    pub metrics: Metrics,
    pub evaluation: Evaluation,
}

impl BacktestReport {
    /// Render the human-readable text report.
    pub fn render(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str("               MA CROSSOVER BACKTEST REPORT                \n");
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str("DATA\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Symbol:              {}\n", self.symbol));
        s.push_str(&format!(
            "  Period:              {} to {}\n",
            self.start_date, self.end_date
        ));
        s.push_str(&format!("  Bars:                {}\n", self.bar_count));
        s.push_str(&format!(
            "  Trading Days:        {}\n",
            self.metrics.trading_days
        ));
        s.push('\n');

        s.push_str("STRATEGY PARAMETERS\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!(
            "  Short MA Period:     {} bars\n",
            self.params.short_period
        ));
        s.push_str(&format!(
            "  Long MA Period:      {} bars\n",
            self.params.long_period
        ));
        s.push('\n');

        s.push_str("PERFORMANCE\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!(
            "  Total Return:        {}\n",
            percentage(self.metrics.final_return, 2)
        ));
        s.push_str(&format!(
            "  Annual Return:       {}\n",
            percentage(self.metrics.annual_return, 2)
        ));
        s.push_str(&format!(
            "  Max Drawdown:        {}\n",
            percentage(self.metrics.max_drawdown, 2)
        ));
        s.push_str(&format!(
            "  Annual Volatility:   {}\n",
            percentage(self.metrics.volatility, 2)
        ));
        s.push_str(&format!(
            "  Sharpe Ratio:        {}\n",
            number(self.metrics.sharpe_ratio, 3)
        ));
        s.push_str(&format!(
            "  Total Trades:        {}\n",
            self.metrics.total_trades
        ));
        s.push_str(&format!(
            "  Win Rate:            {}\n",
            percentage(self.metrics.win_rate, 2)
        ));
        s.push_str(&format!(
            "  Avg Return:          {}\n",
            percentage(self.metrics.avg_return, 4)
        ));
        s.push_str(&format!(
            "  Avg Win:             {}\n",
            percentage(self.metrics.avg_win, 4)
        ));
        s.push_str(&format!(
            "  Avg Loss:            {}\n",
            percentage(self.metrics.avg_loss, 4)
        ));
        s.push('\n');

        s.push_str("EVALUATION\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&self.evaluation.render());
        s.push('\n');

        s.push_str("═══════════════════════════════════════════════════════════\n");

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Fixed text for recognized strategy kinds that are not yet
/// implemented.
pub fn placeholder(kind: StrategyKind, symbol: &str, start: &str, end: &str) -> String {
    format!(
        "[DEV] {} strategy is under development\n\n\
         Symbol: {}\n\
         Period: {} to {}\n\n\
         More indicator strategies are on the way.\n",
        kind.display_name(),
        symbol,
        start,
        end,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BacktestReport {
        let metrics = Metrics {
            final_return: 0.21,
            annual_return: 0.18,
            max_drawdown: -0.04,
            volatility: 0.12,
            sharpe_ratio: 1.25,
            total_trades: 4,
            win_rate: 0.62,
            avg_return: 0.001,
            avg_win: 0.01,
            avg_loss: -0.008,
            trading_days: 230,
        };
        BacktestReport {
            symbol: "000001.SZ".to_string(),
            start_date: "20240101".to_string(),
            end_date: "20241201".to_string(),
            bar_count: 231,
            params: MaCrossParams::default(),
            evaluation: Evaluation::of(&metrics),
            metrics,
        }
    }

    #[test]
    fn test_render_contains_sections_and_values() {
        let text = sample_report().render();

        assert!(text.contains("000001.SZ"));
        assert!(text.contains("20240101 to 20241201"));
        assert!(text.contains("Total Return:        21.00%"));
        assert!(text.contains("Max Drawdown:        -4.00%"));
        assert!(text.contains("Sharpe Ratio:        1.250"));
        assert!(text.contains("Win Rate:            62.00%"));
        assert!(text.contains("EVALUATION"));
        assert!(text.contains("Excellent annual return"));
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample_report();
        let json = report.to_json().unwrap();
        let parsed: BacktestReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.symbol, report.symbol);
        assert_eq!(parsed.metrics.total_trades, 4);
    }

    #[test]
    fn test_placeholder_names_the_strategy() {
        let text = placeholder(StrategyKind::Macd, "000001.SZ", "20240101", "20241201");
        assert!(text.contains("MACD"));
        assert!(text.contains("under development"));
        assert!(text.contains("000001.SZ"));
    }
}

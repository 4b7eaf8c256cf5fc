//! Backtest dispatcher.
//!
//! Stateless per invocation: validates inputs, fetches bars through the
//! injected data handle, runs the signal/return/metrics/evaluation
//! pipeline, and renders a report. `run_backtest` is the exception-free
//! boundary that converts every failure into descriptive text.

use crate::evaluate::Evaluation;
use crate::report::{self, BacktestReport};
use crate::simulator::simulate;
use crate::statistics::Metrics;
use quantlab_core::error::{DataError, QuantError, ValidationError};
use quantlab_core::traits::{MarketData, Strategy};
use quantlab_core::types::BarSeries;
use quantlab_data::validate::{
    clean_market_data, validate_date, validate_market_data, validate_symbol,
};
use quantlab_strategies::{MaCrossParams, MaCrossStrategy, StrategyKind};
use std::sync::Arc;
use tracing::{info, warn};

/// One backtest request as received on the boundary.
#[derive(Debug, Clone)]
pub struct BacktestRequest {
    /// Raw strategy tag (`ma_cross`, `macd`, `rsi`)
    pub strategy_type: String,
    /// Exchange-qualified symbol
    pub symbol: String,
    /// Inclusive start date, `YYYYMMDD`
    pub start_date: String,
    /// Inclusive end date, `YYYYMMDD`
    pub end_date: String,
    /// Strategy parameters as JSON; `null` selects the defaults
    pub params: serde_json::Value,
}

/// Successful outcome of a dispatch.
#[derive(Debug, Clone)]
pub enum BacktestOutcome {
    /// Full pipeline ran; here is the report
    Report(BacktestReport),
    /// Recognized strategy kind that is not yet implemented
    NotImplemented(String),
}

/// The backtest dispatcher, holding an injected data-access handle.
pub struct BacktestEngine {
    data: Arc<dyn MarketData>,
}

impl BacktestEngine {
    /// Create an engine around a market data provider.
    pub fn new(data: Arc<dyn MarketData>) -> Self {
        Self { data }
    }

    /// Run one backtest, returning typed results and errors.
    pub async fn execute(&self, request: &BacktestRequest) -> Result<BacktestOutcome, QuantError> {
        if !validate_symbol(&request.symbol) {
            return Err(ValidationError::Symbol(request.symbol.clone()).into());
        }
        if !validate_date(&request.start_date) {
            return Err(ValidationError::Date(request.start_date.clone()).into());
        }
        if !validate_date(&request.end_date) {
            return Err(ValidationError::Date(request.end_date.clone()).into());
        }

        let kind: StrategyKind = request.strategy_type.parse()?;

        info!(
            strategy = %kind,
            symbol = %request.symbol,
            start = %request.start_date,
            end = %request.end_date,
            provider = self.data.name(),
            "dispatching backtest"
        );

        let fetched = self
            .data
            .get_market_data(&request.symbol, &request.start_date, &request.end_date)
            .await?;
        let series = fetched.ok_or_else(|| DataError::NoData {
            symbol: request.symbol.clone(),
            start: request.start_date.clone(),
            end: request.end_date.clone(),
        })?;

        if !validate_market_data(&series) {
            return Err(DataError::InvalidFormat(request.symbol.clone()).into());
        }
        let series = clean_market_data(series);
        if series.is_empty() {
            return Err(DataError::EmptyAfterClean(request.symbol.clone()).into());
        }

        match kind {
            StrategyKind::MaCross => self
                .run_ma_cross(&series, request)
                .map(BacktestOutcome::Report),
            other => Ok(BacktestOutcome::NotImplemented(report::placeholder(
                other,
                &request.symbol,
                &request.start_date,
                &request.end_date,
            ))),
        }
    }

    fn run_ma_cross(
        &self,
        series: &BarSeries,
        request: &BacktestRequest,
    ) -> Result<BacktestReport, QuantError> {
        let params: MaCrossParams = if request.params.is_null() {
            MaCrossParams::default()
        } else {
            serde_json::from_value(request.params.clone())
                .map_err(|e| ValidationError::Params(e.to_string()))?
        };
        params.validate(series.len())?;

        let strategy = MaCrossStrategy::new(params);
        let signals = strategy.generate_signals(series)?;
        let returns = simulate(series, &signals);
        let metrics = Metrics::compute(&returns, &signals)?;
        let evaluation = Evaluation::of(&metrics);

        info!(
            symbol = %series.symbol,
            bars = series.len(),
            trades = metrics.total_trades,
            final_return = metrics.final_return,
            "backtest complete"
        );

        Ok(BacktestReport {
            symbol: series.symbol.clone(),
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
            bar_count: series.len(),
            params,
            metrics,
            evaluation,
        })
    }

    /// The exception-free boundary: every failure becomes descriptive
    /// text naming the stage that failed.
    pub async fn run_backtest(&self, request: &BacktestRequest) -> String {
        match self.execute(request).await {
            Ok(BacktestOutcome::Report(report)) => report.render(),
            Ok(BacktestOutcome::NotImplemented(text)) => text,
            Err(err) => {
                warn!(error = %err, symbol = %request.symbol, "backtest failed");
                render_error(&err, request)
            }
        }
    }
}

fn render_error(err: &QuantError, request: &BacktestRequest) -> String {
    match err {
        QuantError::Validation(e) => format!("[ERROR] Invalid input: {e}"),
        QuantError::Data(DataError::NotConnected) => {
            "[ERROR] Market data provider is not connected. Open a session before requesting a backtest."
                .to_string()
        }
        QuantError::Data(DataError::NoData { symbol, start, end }) => format!(
            "[ERROR] No data returned for {symbol} between {start} and {end}\n\n\
             [TIPS] Possible causes:\n\
             \x20  1. The stock was suspended or delisted during {start}-{end}\n\
             \x20  2. The symbol does not exist or has been renamed\n\
             \x20  3. Your data permission does not cover this stock\n\
             \x20  4. The date range is invalid or outside data coverage\n\n\
             [SUGGEST] Try:\n\
             \x20  - A symbol known to be available (e.g. 000001.SZ, 600519.SH)\n\
             \x20  - Adjusting the date range"
        ),
        QuantError::Data(e) => format!("[ERROR] Data retrieval failed: {e}"),
        QuantError::Strategy(e) => format!("[ERROR] {e}"),
        QuantError::Computation(e) => format!("[ERROR] Metrics computation failed: {e}"),
        other => format!("[ERROR] Backtest failed: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantlab_core::types::Bar;
    use quantlab_data::MemoryMarketData;

    // Days since epoch for 2024-01-01
    const JAN_1_2024: i64 = 19723;

    fn daily_series(symbol: &str, closes: &[f64]) -> BarSeries {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Bar::new(
                    (JAN_1_2024 + i as i64) * 86_400_000,
                    c,
                    c + 1.0,
                    c - 1.0,
                    c,
                    1000.0,
                )
            })
            .collect();
        BarSeries::new(symbol, bars)
    }

    async fn connected_engine(closes: &[f64]) -> BacktestEngine {
        let provider = MemoryMarketData::new().with_series(daily_series("000001.SZ", closes));
        provider.connect().await.unwrap();
        BacktestEngine::new(Arc::new(provider))
    }

    fn request(strategy_type: &str, symbol: &str, params: serde_json::Value) -> BacktestRequest {
        BacktestRequest {
            strategy_type: strategy_type.to_string(),
            symbol: symbol.to_string(),
            start_date: "20240101".to_string(),
            end_date: "20241231".to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn test_full_pipeline_on_rising_series() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let engine = connected_engine(&closes).await;

        let outcome = engine
            .execute(&request("ma_cross", "000001.SZ", serde_json::Value::Null))
            .await
            .unwrap();

        let BacktestOutcome::Report(report) = outcome else {
            panic!("expected a report");
        };
        assert_eq!(report.bar_count, 30);
        assert_eq!(report.metrics.max_drawdown, 0.0);
        assert!(report.metrics.final_return > 0.0);
    }

    #[tokio::test]
    async fn test_reversed_periods_fail_before_computation() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let engine = connected_engine(&closes).await;

        let err = engine
            .execute(&request(
                "ma_cross",
                "000001.SZ",
                serde_json::json!({"short_period": 20, "long_period": 5}),
            ))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            QuantError::Validation(ValidationError::PeriodOrder { .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_symbol_and_dates() {
        let engine = connected_engine(&[100.0; 30]).await;

        let err = engine
            .execute(&request("ma_cross", "AAPL", serde_json::Value::Null))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            QuantError::Validation(ValidationError::Symbol(_))
        ));

        let mut bad_date = request("ma_cross", "000001.SZ", serde_json::Value::Null);
        bad_date.start_date = "2024-01-01".to_string();
        assert!(matches!(
            engine.execute(&bad_date).await.unwrap_err(),
            QuantError::Validation(ValidationError::Date(_))
        ));
    }

    #[tokio::test]
    async fn test_not_connected_is_a_distinct_error() {
        let provider = MemoryMarketData::new();
        let engine = BacktestEngine::new(Arc::new(provider));

        let err = engine
            .execute(&request("ma_cross", "000001.SZ", serde_json::Value::Null))
            .await
            .unwrap_err();
        assert!(matches!(err, QuantError::Data(DataError::NotConnected)));

        let text = engine
            .run_backtest(&request("ma_cross", "000001.SZ", serde_json::Value::Null))
            .await;
        assert!(text.contains("not connected"));
    }

    #[tokio::test]
    async fn test_no_data_carries_diagnostics() {
        let engine = connected_engine(&[100.0; 30]).await;

        let text = engine
            .run_backtest(&request("ma_cross", "600519.SH", serde_json::Value::Null))
            .await;
        assert!(text.starts_with("[ERROR] No data returned for 600519.SH"));
        assert!(text.contains("[TIPS]"));
        assert!(text.contains("[SUGGEST]"));
    }

    #[tokio::test]
    async fn test_recognized_stub_returns_placeholder() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let engine = connected_engine(&closes).await;

        let outcome = engine
            .execute(&request("macd", "000001.SZ", serde_json::Value::Null))
            .await
            .unwrap();
        let BacktestOutcome::NotImplemented(text) = outcome else {
            panic!("expected a placeholder");
        };
        assert!(text.contains("under development"));
    }

    #[tokio::test]
    async fn test_unsupported_tag_enumerates_types() {
        let engine = connected_engine(&[100.0; 30]).await;

        let text = engine
            .run_backtest(&request("bollinger", "000001.SZ", serde_json::Value::Null))
            .await;
        assert!(text.contains("unsupported strategy type"));
        assert!(text.contains("ma_cross, macd, rsi"));
    }

    #[tokio::test]
    async fn test_crossing_series_counts_two_trades() {
        // Rising leg pushes the short average above the long one, the
        // falling leg pulls it back below: exactly two signal changes
        let mut closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        closes.extend((0..30).map(|i| 129.0 - i as f64 * 2.0));
        let engine = connected_engine(&closes).await;

        let outcome = engine
            .execute(&request(
                "ma_cross",
                "000001.SZ",
                serde_json::json!({"short_period": 5, "long_period": 20}),
            ))
            .await
            .unwrap();
        let BacktestOutcome::Report(report) = outcome else {
            panic!("expected a report");
        };
        assert_eq!(report.metrics.total_trades, 2);
    }

    #[tokio::test]
    async fn test_boundary_never_panics_on_bad_params() {
        let engine = connected_engine(&[100.0; 30]).await;

        let text = engine
            .run_backtest(&request(
                "ma_cross",
                "000001.SZ",
                serde_json::json!({"short_period": "five"}),
            ))
            .await;
        assert!(text.starts_with("[ERROR] Invalid input"));
    }
}

//! Error types for the backtesting system.

use thiserror::Error;

/// Top-level error covering every pipeline stage.
///
/// Nothing in this taxonomy is allowed to escape the dispatcher boundary
/// as a fault; `BacktestEngine::run_backtest` converts all of these into
/// descriptive text for its callers.
#[derive(Error, Debug)]
pub enum QuantError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("data error: {0}")]
    Data(#[from] DataError),

    #[error("strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("computation error: {0}")]
    Computation(#[from] ComputationError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Malformed input caught at the boundary, before any computation runs.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid symbol format: {0} (expected six digits with a .SZ or .SH suffix)")]
    Symbol(String),

    #[error("invalid date format: {0} (expected YYYYMMDD)")]
    Date(String),

    #[error("short period ({short}) must be less than long period ({long})")]
    PeriodOrder { short: usize, long: usize },

    #[error("long period ({long}) must be less than the series length ({len})")]
    PeriodExceedsData { long: usize, len: usize },

    #[error("moving-average periods must be at least 1")]
    ZeroPeriod,

    #[error("invalid strategy parameters: {0}")]
    Params(String),
}

/// Failures around acquiring or preparing market data.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("market data provider is not connected")]
    NotConnected,

    #[error("no data returned for {symbol} between {start} and {end}")]
    NoData {
        symbol: String,
        start: String,
        end: String,
    },

    #[error("market data for {0} is malformed or empty")]
    InvalidFormat(String),

    #[error("market data for {0} is empty after cleaning")]
    EmptyAfterClean(String),

    #[error("bar series is empty")]
    EmptySeries,

    #[error("parse error: {0}")]
    Parse(String),

    #[error("data source error: {0}")]
    Source(String),
}

/// Strategy selection failures.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("unsupported strategy type: {tag} (supported types: {supported})")]
    Unsupported { tag: String, supported: String },
}

/// Numeric edge cases inside the metrics calculator.
///
/// Always caught and rendered as an error message, never propagated
/// past the dispatcher.
#[derive(Error, Debug)]
pub enum ComputationError {
    #[error("no valid strategy return data")]
    NoStrategyReturns,

    #[error("computed {metric} is not finite")]
    NonFinite { metric: &'static str },
}

/// Result type alias for backtest operations.
pub type QuantResult<T> = Result<T, QuantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_into_top_level() {
        let err: QuantError = ValidationError::PeriodOrder { short: 20, long: 5 }.into();
        assert!(matches!(err, QuantError::Validation(_)));
        assert!(err.to_string().contains("20"));

        let err: QuantError = DataError::NotConnected.into();
        assert!(err.to_string().contains("not connected"));
    }

    #[test]
    fn test_unsupported_strategy_lists_supported_tags() {
        let err = StrategyError::Unsupported {
            tag: "bollinger".to_string(),
            supported: "ma_cross, macd, rsi".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("bollinger"));
        assert!(msg.contains("ma_cross"));
    }
}

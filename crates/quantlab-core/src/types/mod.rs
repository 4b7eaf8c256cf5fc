//! Core data types for the backtesting system.

mod ohlcv;
mod signal;

pub use ohlcv::{Bar, BarSeries};
pub use signal::{Signal, SignalSeries};

//! Core traits for the backtesting system.

mod indicator;
mod market_data;
mod strategy;

pub use indicator::Indicator;
pub use market_data::MarketData;
pub use strategy::Strategy;

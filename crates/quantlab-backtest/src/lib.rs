//! Strategy backtesting: lagged return simulation, performance metrics,
//! qualitative evaluation, report rendering, and the dispatcher that
//! orchestrates the pipeline behind one exception-free boundary.

mod engine;
mod evaluate;
mod report;
mod simulator;
mod statistics;

pub use engine::{BacktestEngine, BacktestOutcome, BacktestRequest};
pub use evaluate::{DrawdownTier, Evaluation, ReturnTier, SharpeTier, WinRateTier};
pub use report::BacktestReport;
pub use simulator::{simulate, ReturnSeries};
pub use statistics::Metrics;

//! Core types and traits for the backtesting system.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, BarSeries)
//! - Position signals (Signal, SignalSeries)
//! - Core traits for strategies, indicators, and data providers
//! - The error taxonomy shared by every stage of the pipeline

pub mod types;
pub mod traits;
pub mod error;

pub use error::{QuantError, QuantResult};
pub use types::*;
pub use traits::*;

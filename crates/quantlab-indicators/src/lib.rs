//! Rolling indicator primitives.

mod moving_average;

pub use moving_average::Sma;

//! Signal-generating strategy implementations.

mod ma_cross;
mod registry;

pub use ma_cross::{MaCrossParams, MaCrossStrategy};
pub use registry::{StrategyInfo, StrategyKind};

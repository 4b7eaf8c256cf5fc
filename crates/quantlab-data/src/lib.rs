//! Market data clients, validation/cleaning, and formatting helpers.

mod cache;
mod csv_source;
pub mod format;
mod memory;
pub mod validate;

pub use cache::BarCache;
pub use csv_source::CsvMarketData;
pub use memory::MemoryMarketData;

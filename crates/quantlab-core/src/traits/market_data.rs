//! Market data provider trait.

use crate::error::DataError;
use crate::types::BarSeries;
use async_trait::async_trait;

/// Trait for market data providers with an explicit session lifecycle.
///
/// The dispatcher receives an injected handle rather than holding a
/// process-wide client. Fetching without an active session is a
/// [`DataError::NotConnected`]; an active session that simply has no
/// rows for the request yields `Ok(None)`.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Open a session with the provider.
    async fn connect(&self) -> Result<(), DataError>;

    /// Close the session. Subsequent fetches fail until reconnected.
    async fn disconnect(&self);

    /// Check whether a session is active.
    async fn is_connected(&self) -> bool;

    /// Fetch daily bars for a symbol over an inclusive `YYYYMMDD` range.
    ///
    /// # Returns
    /// * `Ok(Some(series))` with bars ordered oldest to newest
    /// * `Ok(None)` when the provider has no rows for the request
    /// * `Err(DataError::NotConnected)` without an active session
    async fn get_market_data(
        &self,
        symbol: &str,
        start: &str,
        end: &str,
    ) -> Result<Option<BarSeries>, DataError>;

    /// Get the provider name.
    fn name(&self) -> &str;
}

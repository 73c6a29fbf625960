use std::future::Future;

use crate::domain::errors::NetworkResult;
use crate::domain::market_data::{PriceSeries, Symbol, TimeRange};

/// Read side of the tracker backend.
///
/// Futures are not `Send`: everything runs on the browser event loop.
pub trait MarketDataRepository {
    /// Symbols in server order.
    fn fetch_symbols(&self) -> impl Future<Output = NetworkResult<Vec<Symbol>>>;

    /// Price history for `symbol`; `None` asks for the full history.
    fn fetch_price_series(
        &self,
        symbol: &Symbol,
        range: Option<TimeRange>,
    ) -> impl Future<Output = NetworkResult<PriceSeries>>;
}

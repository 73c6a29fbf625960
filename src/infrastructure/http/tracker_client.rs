use crate::domain::errors::NetworkResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{MarketDataRepository, PriceSeries, Symbol, TimeRange};
use crate::infrastructure::http::{GlooHttpClient, HttpUtils};
use crate::{log_info, log_warn};

pub const SYMBOLS_ENDPOINT: &str = "/api/symbols";
pub const PRICES_ENDPOINT: &str = "/api/prices";

/// REST client for the tracker backend's two read endpoints.
#[derive(Debug, Clone, Default)]
pub struct TrackerApiClient {
    http: GlooHttpClient,
}

impl TrackerApiClient {
    pub fn new(base_url: String) -> Self {
        Self { http: GlooHttpClient::new(base_url) }
    }

    pub fn symbols_url(&self) -> String {
        self.http.url_for(SYMBOLS_ENDPOINT)
    }

    /// `range` is left out entirely when `None`; the server then returns the
    /// full history.
    pub fn prices_url(&self, symbol: &Symbol, range: Option<TimeRange>) -> String {
        let base = self.http.url_for(PRICES_ENDPOINT);
        match range {
            Some(range) => HttpUtils::build_url_with_params(
                &base,
                &[("symbol", symbol.value()), ("range", range.as_query_value())],
            ),
            None => HttpUtils::build_url_with_params(&base, &[("symbol", symbol.value())]),
        }
    }
}

/// Keep the server's order; blank tickers are dropped rather than failing
/// the whole list.
pub fn symbols_from_response(raw: Vec<String>) -> Vec<Symbol> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| match Symbol::new(value) {
            Ok(symbol) => Some(symbol),
            Err(e) => {
                log_warn!(
                    LogComponent::Infrastructure("TrackerApi"),
                    "skipping symbol #{}: {}",
                    index,
                    e
                );
                None
            }
        })
        .collect()
}

impl MarketDataRepository for TrackerApiClient {
    async fn fetch_symbols(&self) -> NetworkResult<Vec<Symbol>> {
        let raw: Vec<String> = self.http.get_json(&self.symbols_url()).await?;
        let symbols = symbols_from_response(raw);
        log_info!(
            LogComponent::Infrastructure("TrackerApi"),
            "loaded {} symbols",
            symbols.len()
        );
        Ok(symbols)
    }

    async fn fetch_price_series(
        &self,
        symbol: &Symbol,
        range: Option<TimeRange>,
    ) -> NetworkResult<PriceSeries> {
        self.http.get_json(&self.prices_url(symbol, range)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_url_relative_by_default() {
        assert_eq!(TrackerApiClient::default().symbols_url(), "/api/symbols");
    }

    #[test]
    fn test_prices_url_with_range() {
        let client = TrackerApiClient::default();
        assert_eq!(
            client.prices_url(&Symbol::new("AAPL".to_string()).unwrap(), Some(TimeRange::OneMonth)),
            "/api/prices?symbol=AAPL&range=1M"
        );
    }

    #[test]
    fn test_prices_url_without_range() {
        let client = TrackerApiClient::new("http://localhost:8000".to_string());
        assert_eq!(
            client.prices_url(&Symbol::new("MSFT".to_string()).unwrap(), None),
            "http://localhost:8000/api/prices?symbol=MSFT"
        );
    }
}

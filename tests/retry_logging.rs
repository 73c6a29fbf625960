use std::future::{Future, ready};
use std::time::Duration;

use futures::executor::block_on;
use stock_tracker_wasm::application::{RetryPolicy, Sleeper, SymbolLoader};
use stock_tracker_wasm::domain::errors::{AppError, NetworkResult};
use stock_tracker_wasm::domain::logging::{LogLevel, MemoryLogger, init_logger};
use stock_tracker_wasm::domain::market_data::{
    MarketDataRepository, PriceSeries, Symbol, TimeRange,
};

struct NoWait;

impl Sleeper for NoWait {
    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> {
        ready(())
    }
}

struct Offline;

impl MarketDataRepository for Offline {
    async fn fetch_symbols(&self) -> NetworkResult<Vec<Symbol>> {
        Err(AppError::NetworkError("HTTP error: 502 - Bad Gateway".into()))
    }

    async fn fetch_price_series(
        &self,
        _symbol: &Symbol,
        _range: Option<TimeRange>,
    ) -> NetworkResult<PriceSeries> {
        Err(AppError::NetworkError("offline".into()))
    }
}

#[test]
fn each_failed_attempt_is_logged_with_retries_left() {
    let logger: &'static MemoryLogger = Box::leak(Box::new(MemoryLogger::new()));
    init_logger(Box::new(logger));

    let loader = SymbolLoader::new(RetryPolicy::fixed(3, Duration::ZERO), NoWait);
    block_on(loader.load(&Offline));

    let warnings = logger.messages_at(LogLevel::Warn);
    assert_eq!(warnings.len(), 3);
    assert!(warnings[0].contains("retries left: 2"));
    assert!(warnings[2].contains("retries left: 0"));
    assert!(warnings[0].contains("502"));

    let errors = logger.messages_at(LogLevel::Error);
    assert_eq!(errors, vec!["giving up after 3 attempts: Network Error: HTTP error: 502 - Bad Gateway".to_string()]);
}

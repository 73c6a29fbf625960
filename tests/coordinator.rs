#![cfg(target_arch = "wasm32")]
use std::future::{Future, ready};
use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::{SignalGetUntracked, create_rw_signal};
use stock_tracker_wasm::application::{RetryPolicy, Sleeper, SymbolLoader, TrackerCoordinator};
use stock_tracker_wasm::domain::errors::{AppError, NetworkResult};
use stock_tracker_wasm::domain::market_data::{
    MarketDataRepository, PriceSeries, Symbol, TimeLabel, TimeRange,
};
use stock_tracker_wasm::domain::state::{AppEvent, AppState, PanelStatus};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn symbol(name: &str) -> Symbol {
    Symbol::new(name.to_string()).unwrap()
}

struct NoWait;

impl Sleeper for NoWait {
    fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> {
        ready(())
    }
}

struct OneSymbol;

impl MarketDataRepository for OneSymbol {
    async fn fetch_symbols(&self) -> NetworkResult<Vec<Symbol>> {
        Ok(vec![symbol("AAPL")])
    }

    async fn fetch_price_series(
        &self,
        symbol: &Symbol,
        _range: Option<TimeRange>,
    ) -> NetworkResult<PriceSeries> {
        if symbol.value() != "AAPL" {
            return Err(AppError::NetworkError("unknown".into()));
        }
        PriceSeries::new(vec![TimeLabel::from("2024-01-01")], vec![190.0])
    }
}

#[wasm_bindgen_test]
async fn start_loads_symbols_then_prices() {
    let store = create_rw_signal(AppState::default());
    let coordinator = TrackerCoordinator::new(
        OneSymbol,
        SymbolLoader::new(RetryPolicy::fixed(1, Duration::ZERO), NoWait),
        store,
    );

    coordinator.start();
    sleep(Duration::from_millis(20)).await;

    let state = store.get_untracked();
    assert_eq!(state.selected(), Some(&symbol("AAPL")));
    assert!(matches!(state.panel(), PanelStatus::Loaded(_)));
}

#[wasm_bindgen_test]
async fn dispatch_routes_fetch_failure_into_store() {
    let store = create_rw_signal(AppState::default());
    let coordinator = TrackerCoordinator::new(
        OneSymbol,
        SymbolLoader::new(RetryPolicy::default(), NoWait),
        store,
    );

    coordinator.dispatch(AppEvent::SymbolsLoaded(vec![symbol("IBM")]));
    assert_eq!(store.get_untracked().panel(), &PanelStatus::Loading);
    sleep(Duration::from_millis(20)).await;

    assert_eq!(
        store.get_untracked().panel(),
        &PanelStatus::Failed("Could not load price data for IBM.".to_string())
    );
}

use std::cell::RefCell;

use futures::executor::block_on;
use stock_tracker_wasm::application::fetch_price_series;
use stock_tracker_wasm::domain::errors::{AppError, NetworkResult};
use stock_tracker_wasm::domain::market_data::{
    MarketDataRepository, PriceSeries, Symbol, TimeLabel, TimeRange,
};
use stock_tracker_wasm::domain::state::{AppEvent, AppState, PanelStatus};

fn symbol(name: &str) -> Symbol {
    Symbol::new(name.to_string()).unwrap()
}

fn series(prices: &[f64]) -> PriceSeries {
    let times = (0..prices.len()).map(|i| TimeLabel::from(i as f64 * 60_000.0)).collect();
    PriceSeries::new(times, prices.to_vec()).unwrap()
}

/// Serves prices for the symbols it knows and records every request.
#[derive(Default)]
struct PriceBook {
    prices: Vec<(Symbol, PriceSeries)>,
    requests: RefCell<Vec<(Symbol, Option<TimeRange>)>>,
}

impl PriceBook {
    fn with(mut self, name: &str, prices: &[f64]) -> Self {
        self.prices.push((symbol(name), series(prices)));
        self
    }
}

impl MarketDataRepository for PriceBook {
    async fn fetch_symbols(&self) -> NetworkResult<Vec<Symbol>> {
        Ok(self.prices.iter().map(|(s, _)| s.clone()).collect())
    }

    async fn fetch_price_series(
        &self,
        symbol: &Symbol,
        range: Option<TimeRange>,
    ) -> NetworkResult<PriceSeries> {
        self.requests.borrow_mut().push((symbol.clone(), range));
        self.prices
            .iter()
            .find(|(known, _)| known == symbol)
            .map(|(_, series)| series.clone())
            .ok_or_else(|| AppError::NetworkError("HTTP error: 404 - Not Found".into()))
    }
}

#[test]
fn default_selection_fetches_first_symbol() {
    let book = PriceBook::default().with("AAPL", &[100.0, 101.0]).with("MSFT", &[300.0]);
    let mut state = AppState::default();

    let symbols = block_on(book.fetch_symbols()).unwrap();
    let request = state.apply(AppEvent::SymbolsLoaded(symbols)).unwrap();
    let seq = request.seq;
    let event = block_on(fetch_price_series(&book, request));

    assert_eq!(event, AppEvent::PricesLoaded { seq, series: series(&[100.0, 101.0]) });
    assert_eq!(book.requests.borrow().as_slice(), &[(symbol("AAPL"), Some(TimeRange::All))]);

    assert_eq!(state.apply(event), None);
    match state.panel() {
        PanelStatus::Loaded(shown) => assert_eq!(shown.prices(), &[100.0, 101.0]),
        other => panic!("expected loaded panel, got {:?}", other),
    }
}

#[test]
fn repository_error_becomes_failure_for_same_request() {
    let book = PriceBook::default();
    let mut state = AppState::default();
    let request = state.apply(AppEvent::SymbolsLoaded(vec![symbol("TSLA")])).unwrap();
    let seq = request.seq;

    let event = block_on(fetch_price_series(&book, request));

    assert_eq!(event, AppEvent::PricesFailed { seq, symbol: symbol("TSLA") });
    state.apply(event);
    assert_eq!(
        state.panel(),
        &PanelStatus::Failed("Could not load price data for TSLA.".to_string())
    );
}

#[test]
fn range_change_refetch_carries_new_seq() {
    let book = PriceBook::default().with("AAPL", &[1.0, 2.0, 3.0]);
    let mut state = AppState::default();
    let first = state.apply(AppEvent::SymbolsLoaded(vec![symbol("AAPL")])).unwrap();
    let refresh = state.apply(AppEvent::RangeSelected(TimeRange::OneMonth)).unwrap();
    assert!(refresh.seq > first.seq);

    let stale = block_on(fetch_price_series(&book, first));
    let fresh = block_on(fetch_price_series(&book, refresh.clone()));

    state.apply(fresh);
    state.apply(stale);

    assert_eq!(state.latest_seq(), refresh.seq);
    assert!(matches!(state.panel(), PanelStatus::Loaded(_)));
    assert_eq!(
        book.requests.borrow().last(),
        Some(&(symbol("AAPL"), Some(TimeRange::OneMonth)))
    );
}

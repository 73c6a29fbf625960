use std::sync::Arc;

use crate::domain::logging::LogComponent;
use crate::domain::market_data::{PriceSeries, Symbol, TimeRange};
use crate::{log_debug, log_info, log_warn};

/// Monotonic id of a price request. Only the latest one may change state.
pub type RequestSeq = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum SymbolsStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Price chart panel lifecycle: `Idle -> Loading -> {Loaded, Failed}`.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelStatus {
    Idle,
    Loading,
    Loaded(Arc<PriceSeries>),
    Failed(String),
}

/// Fetch the reducer asks the caller to run.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRequest {
    pub seq: RequestSeq,
    pub symbol: Symbol,
    /// `None` when the range selector is off: the server returns everything.
    pub range: Option<TimeRange>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    SymbolsLoaded(Vec<Symbol>),
    SymbolsFailed(String),
    SymbolSelected(Symbol),
    RangeSelected(TimeRange),
    PricesLoaded { seq: RequestSeq, series: PriceSeries },
    PricesFailed { seq: RequestSeq, symbol: Symbol },
}

/// All page state. Mutated only through [`AppState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    symbols: Vec<Symbol>,
    symbols_status: SymbolsStatus,
    selected: Option<Symbol>,
    range: TimeRange,
    range_selector: bool,
    panel: PanelStatus,
    /// Last successfully loaded series, kept while a newer fetch is pending or failed.
    last_series: Option<Arc<PriceSeries>>,
    latest_seq: RequestSeq,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AppState {
    pub fn new(range_selector: bool) -> Self {
        Self {
            symbols: Vec::new(),
            symbols_status: SymbolsStatus::Loading,
            selected: None,
            range: TimeRange::default(),
            range_selector,
            panel: PanelStatus::Idle,
            last_series: None,
            latest_seq: 0,
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn symbols_status(&self) -> &SymbolsStatus {
        &self.symbols_status
    }

    pub fn selected(&self) -> Option<&Symbol> {
        self.selected.as_ref()
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn panel(&self) -> &PanelStatus {
        &self.panel
    }

    pub fn last_series(&self) -> Option<&Arc<PriceSeries>> {
        self.last_series.as_ref()
    }

    pub fn latest_seq(&self) -> RequestSeq {
        self.latest_seq
    }

    pub fn selector_disabled(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols_error(&self) -> Option<&str> {
        match &self.symbols_status {
            SymbolsStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Apply one event; returns the price fetch to issue, if any.
    pub fn apply(&mut self, event: AppEvent) -> Option<PriceRequest> {
        match event {
            AppEvent::SymbolsLoaded(symbols) => {
                log_info!(
                    LogComponent::Domain("AppState"),
                    "{} symbols available",
                    symbols.len()
                );
                let first = symbols.first().cloned();
                self.symbols = symbols;
                self.symbols_status = SymbolsStatus::Ready;
                first.and_then(|symbol| self.select(symbol))
            }
            AppEvent::SymbolsFailed(message) => {
                self.symbols_status = SymbolsStatus::Failed(message);
                None
            }
            AppEvent::SymbolSelected(symbol) => self.select(symbol),
            AppEvent::RangeSelected(range) => {
                if range == self.range {
                    return None;
                }
                self.range = range;
                if !self.range_selector {
                    return None;
                }
                self.issue_request()
            }
            AppEvent::PricesLoaded { seq, series } => {
                if self.is_stale(seq) {
                    return None;
                }
                let series = Arc::new(series);
                self.last_series = Some(series.clone());
                self.panel = PanelStatus::Loaded(series);
                None
            }
            AppEvent::PricesFailed { seq, symbol } => {
                if self.is_stale(seq) {
                    return None;
                }
                log_warn!(
                    LogComponent::Domain("AppState"),
                    "price request #{} for {} failed",
                    seq,
                    symbol
                );
                self.panel = PanelStatus::Failed(format!("Could not load price data for {}.", symbol));
                None
            }
        }
    }

    fn select(&mut self, symbol: Symbol) -> Option<PriceRequest> {
        if self.selected.as_ref() == Some(&symbol) {
            return None;
        }
        self.selected = Some(symbol);
        self.issue_request()
    }

    fn issue_request(&mut self) -> Option<PriceRequest> {
        let symbol = self.selected.clone()?;
        self.latest_seq += 1;
        self.panel = PanelStatus::Loading;
        Some(PriceRequest {
            seq: self.latest_seq,
            symbol,
            range: self.range_selector.then_some(self.range),
        })
    }

    fn is_stale(&self, seq: RequestSeq) -> bool {
        let stale = seq != self.latest_seq;
        if stale {
            log_debug!(
                LogComponent::Domain("AppState"),
                "discarding response #{} (latest is #{})",
                seq,
                self.latest_seq
            );
        }
        stale
    }
}

use std::rc::Rc;

use leptos::{RwSignal, SignalUpdate, spawn_local};

use crate::application::chart_service::fetch_price_series;
use crate::application::retry::Sleeper;
use crate::application::symbol_loader::SymbolLoader;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::MarketDataRepository;
use crate::domain::state::{AppEvent, AppState, PriceRequest};
use crate::log_debug;

/// Glue between UI events, the state reducer and the network.
///
/// UI handlers call [`TrackerCoordinator::dispatch`]; any fetch the reducer
/// asks for is spawned on the event loop and its result dispatched back.
pub struct TrackerCoordinator<R, S> {
    repository: Rc<R>,
    loader: Rc<SymbolLoader<S>>,
    store: RwSignal<AppState>,
}

impl<R, S> Clone for TrackerCoordinator<R, S> {
    fn clone(&self) -> Self {
        Self {
            repository: Rc::clone(&self.repository),
            loader: Rc::clone(&self.loader),
            store: self.store,
        }
    }
}

impl<R, S> TrackerCoordinator<R, S>
where
    R: MarketDataRepository + 'static,
    S: Sleeper + 'static,
{
    pub fn new(repository: R, loader: SymbolLoader<S>, store: RwSignal<AppState>) -> Self {
        Self { repository: Rc::new(repository), loader: Rc::new(loader), store }
    }

    pub fn store(&self) -> RwSignal<AppState> {
        self.store
    }

    /// Kick off the one-time symbol load. Call once, on mount.
    pub fn start(&self) {
        let this = self.clone();
        spawn_local(async move {
            let event = this.loader.load(this.repository.as_ref()).await;
            this.dispatch(event);
        });
    }

    pub fn dispatch(&self, event: AppEvent) {
        log_debug!(LogComponent::Application("Coordinator"), "dispatch {}", event_name(&event));
        let request = self.store.try_update(|state| state.apply(event)).flatten();
        if let Some(request) = request {
            self.spawn_price_fetch(request);
        }
    }

    fn spawn_price_fetch(&self, request: PriceRequest) {
        let this = self.clone();
        spawn_local(async move {
            let event = fetch_price_series(this.repository.as_ref(), request).await;
            this.dispatch(event);
        });
    }
}

fn event_name(event: &AppEvent) -> &'static str {
    match event {
        AppEvent::SymbolsLoaded(_) => "SymbolsLoaded",
        AppEvent::SymbolsFailed(_) => "SymbolsFailed",
        AppEvent::SymbolSelected(_) => "SymbolSelected",
        AppEvent::RangeSelected(_) => "RangeSelected",
        AppEvent::PricesLoaded { .. } => "PricesLoaded",
        AppEvent::PricesFailed { .. } => "PricesFailed",
    }
}

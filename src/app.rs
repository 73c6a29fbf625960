use leptos::html::Canvas;
use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    application::{SymbolLoader, TimerSleeper, TrackerCoordinator},
    config::TrackerConfig,
    domain::{
        chart::PlotSpec,
        logging::LogComponent,
        market_data::{Symbol, TimeRange},
        state::{AppEvent, AppState},
    },
    global_state::{app_state, chart_dimensions},
    infrastructure::{http::TrackerApiClient, rendering::CanvasRenderer},
    log_error, log_info,
    view_state::{LOADING_MESSAGE, PanelView},
};

pub type AppCoordinator = TrackerCoordinator<TrackerApiClient, TimerSleeper>;

const STYLES: &str = r#"
.App {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    text-align: center;
    padding: 0 20px 20px;
}

.App-header {
    background: #282c34;
    color: white;
    padding: 12px;
    margin: 0 -20px 20px;
}

.controls {
    margin-bottom: 12px;
}

.range-selector {
    display: flex;
    justify-content: center;
    gap: 6px;
    margin-bottom: 16px;
}

.range-btn {
    border: 1px solid #1f77b4;
    background: white;
    color: #1f77b4;
    padding: 4px 12px;
    border-radius: 4px;
    cursor: pointer;
}

.range-btn.active {
    background: #1f77b4;
    color: white;
}

.chart-container {
    min-height: 400px;
}

.error {
    color: #c0392b;
}
"#;

fn window_inner_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Root component: wires config, store and network, then lays out the page.
#[component]
pub fn App() -> impl IntoView {
    let config = TrackerConfig::from_window();
    log_info!(
        LogComponent::Presentation("App"),
        "api base '{}', range selector {}",
        config.api_base_url,
        if config.range_selector { "on" } else { "off" }
    );

    let store = app_state();
    store.set(AppState::new(config.range_selector));

    let dimensions = chart_dimensions();
    let base_dimensions = config.chart;
    dimensions.set(match window_inner_width() {
        Some(width) => base_dimensions.fit_window(width),
        None => base_dimensions,
    });
    let resize = window_event_listener(ev::resize, move |_| {
        if let Some(width) = window_inner_width() {
            dimensions.set(base_dimensions.fit_window(width));
        }
    });
    on_cleanup(move || resize.remove());

    let coordinator: AppCoordinator = TrackerCoordinator::new(
        TrackerApiClient::new(config.api_base_url.clone()),
        SymbolLoader::new(config.symbol_retry, TimerSleeper),
        store,
    );
    coordinator.start();

    let range_selector = config
        .range_selector
        .then(|| view! { <RangeSelector coordinator=coordinator.clone() /> });

    view! {
        <style>{STYLES}</style>
        <div class="App">
            <header class="App-header">
                <h1>"Stock Price Tracker"</h1>
            </header>
            <SymbolControls coordinator=coordinator />
            {range_selector}
            <ChartPanel />
        </div>
    }
}

#[component]
fn SymbolControls(coordinator: AppCoordinator) -> impl IntoView {
    let store = coordinator.store();

    let on_change = move |ev: ev::Event| match Symbol::new(event_target_value(&ev)) {
        Ok(symbol) => coordinator.dispatch(AppEvent::SymbolSelected(symbol)),
        Err(e) => {
            log_error!(LogComponent::Presentation("SymbolControls"), "{}", e);
        }
    };

    view! {
        <div class="controls">
            <label for="symbol-select">"Select a Stock Symbol: "</label>
            <select
                id="symbol-select"
                on:change=on_change
                disabled=move || store.with(|s| s.selector_disabled())
            >
                <For
                    each=move || store.with(|s| s.symbols().iter().cloned().enumerate().collect::<Vec<_>>())
                    key=|(index, symbol)| (*index, symbol.clone())
                    children=move |(_, symbol): (usize, Symbol)| {
                        let value = symbol.value().to_string();
                        let is_selected = move || store.with(|s| s.selected() == Some(&symbol));
                        view! {
                            <option value=value.clone() prop:selected=is_selected>
                                {value}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

#[component]
fn RangeSelector(coordinator: AppCoordinator) -> impl IntoView {
    let store = coordinator.store();

    let buttons = TimeRange::iter()
        .map(|range| {
            let coordinator = coordinator.clone();
            view! {
                <button
                    class="range-btn"
                    class:active=move || store.with(|s| s.range() == range)
                    on:click=move |_| coordinator.dispatch(AppEvent::RangeSelected(range))
                >
                    {range.to_string()}
                </button>
            }
        })
        .collect_view();

    view! { <div class="range-selector">{buttons}</div> }
}

/// Loading indicator, error message or chart; never more than one.
#[component]
fn ChartPanel() -> impl IntoView {
    let store = app_state();
    let panel = create_memo(move |_| store.with(PanelView::from_state));
    let symbols_error = move || store.with(|s| s.symbols_error().map(str::to_string));

    view! {
        <div class="chart-container">
            {move || match panel.get() {
                PanelView::Hidden => match symbols_error() {
                    Some(message) => view! { <p class="error">{message}</p> }.into_view(),
                    None => ().into_view(),
                },
                PanelView::Loading => view! { <p>{LOADING_MESSAGE}</p> }.into_view(),
                PanelView::Error(message) => view! { <p class="error">{message}</p> }.into_view(),
                PanelView::Chart(spec) => view! { <PriceChart spec=spec /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn PriceChart(spec: PlotSpec) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();
    let dimensions = chart_dimensions();

    create_effect(move |_| {
        let renderer = CanvasRenderer::new(dimensions.get());
        if let Some(canvas) = canvas_ref.get() {
            if let Err(e) = renderer.render(&canvas, &spec) {
                log_error!(LogComponent::Presentation("PriceChart"), "render failed: {:?}", e);
            }
        }
    });

    view! { <canvas id="price-chart" node_ref=canvas_ref /> }
}

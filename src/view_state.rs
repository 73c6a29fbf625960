use crate::domain::chart::PlotSpec;
use crate::domain::state::{AppState, PanelStatus};

pub const LOADING_MESSAGE: &str = "Loading chart data...";

/// What the chart region shows. Exactly one variant at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    /// No symbol selected yet.
    Hidden,
    Loading,
    Error(String),
    Chart(PlotSpec),
}

impl PanelView {
    pub fn from_state(state: &AppState) -> Self {
        let Some(symbol) = state.selected() else {
            return Self::Hidden;
        };
        match state.panel() {
            PanelStatus::Idle => Self::Hidden,
            PanelStatus::Loading => Self::Loading,
            PanelStatus::Failed(message) => Self::Error(message.clone()),
            PanelStatus::Loaded(series) => Self::Chart(PlotSpec::price_history(symbol, series)),
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

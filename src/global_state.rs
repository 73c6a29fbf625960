use crate::domain::chart::ChartDimensions;
use crate::domain::state::AppState;
use crate::global_signals;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub app_state: RwSignal<AppState>,
    pub chart_dimensions: RwSignal<ChartDimensions>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        app_state: create_rw_signal(AppState::default()),
        chart_dimensions: create_rw_signal(ChartDimensions::default()),
    })
}

global_signals! {
    pub app_state => app_state: AppState,
    pub chart_dimensions => chart_dimensions: ChartDimensions,
}

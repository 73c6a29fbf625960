use super::value_objects::{TraceMode, TraceType};
use crate::domain::market_data::{PriceSeries, Symbol, TimeLabel};
use serde::Serialize;

pub const MARKER_COLOR: &str = "#1f77b4";
pub const X_AXIS_TITLE: &str = "Time";
pub const Y_AXIS_TITLE: &str = "Price (USD)";

/// One plotted series: `x` labels against `y` values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<TimeLabel>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub trace_type: TraceType,
    pub mode: TraceMode,
    pub marker_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotLayout {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
}

/// Domain entity - everything the renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSpec {
    pub traces: Vec<ScatterTrace>,
    pub layout: PlotLayout,
}

impl PlotSpec {
    /// Line-plus-markers chart of `series`, titled after `symbol`.
    pub fn price_history(symbol: &Symbol, series: &PriceSeries) -> Self {
        let trace = ScatterTrace {
            x: series.times().to_vec(),
            y: series.prices().to_vec(),
            trace_type: TraceType::Scatter,
            mode: TraceMode::LinesMarkers,
            marker_color: MARKER_COLOR.to_string(),
        };
        Self {
            traces: vec![trace],
            layout: PlotLayout {
                title: format!("Price History for {}", symbol),
                x_axis_title: X_AXIS_TITLE.to_string(),
                y_axis_title: Y_AXIS_TITLE.to_string(),
            },
        }
    }

    pub fn point_count(&self) -> usize {
        self.traces.iter().map(|t| t.y.len()).sum()
    }
}

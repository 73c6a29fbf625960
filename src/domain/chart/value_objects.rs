use derive_more::Display;
use serde::Serialize;
use strum::{AsRefStr, EnumString};

/// Value Object - trace kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, Serialize)]
pub enum TraceType {
    #[display(fmt = "scatter")]
    #[strum(serialize = "scatter")]
    #[serde(rename = "scatter")]
    Scatter,
}

/// Value Object - how a scatter trace draws its points: a connecting line
/// with a marker on every point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, Serialize)]
pub enum TraceMode {
    #[display(fmt = "lines+markers")]
    #[strum(serialize = "lines+markers")]
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

/// Value Object - canvas size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartDimensions {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self { width: 800, height: 400 }
    }
}

impl ChartDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const MIN_WIDTH: u32 = 320;
    pub const MAX_WIDTH: u32 = 1200;

    /// Keeps the height, follows the available width within bounds.
    pub fn with_width(self, width: u32) -> Self {
        Self { width: width.clamp(Self::MIN_WIDTH, Self::MAX_WIDTH), ..self }
    }

    /// Width for a window `inner_width` CSS pixels wide, minus page padding.
    pub fn fit_window(self, inner_width: f64) -> Self {
        const PAGE_PADDING: f64 = 40.0;
        self.with_width((inner_width - PAGE_PADDING).max(0.0) as u32)
    }
}

/// Value Object - space reserved around the plot area for titles and labels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self { left: 60.0, right: 20.0, top: 40.0, bottom: 50.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_follows_window_within_bounds() {
        let base = ChartDimensions::default();
        assert_eq!(base.fit_window(1024.0), ChartDimensions::new(984, 400));
        assert_eq!(base.fit_window(4000.0).width, 1200);
        assert_eq!(base.fit_window(10.0).width, 320);
    }

    #[test]
    fn mode_name_matches_plot_wire_format() {
        assert_eq!(TraceMode::LinesMarkers.to_string(), "lines+markers");
        assert_eq!("lines+markers".parse::<TraceMode>().unwrap(), TraceMode::LinesMarkers);
    }
}

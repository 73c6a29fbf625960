use super::entities::ScatterTrace;
use super::value_objects::{ChartDimensions, PlotMargins};
use serde::Serialize;

/// Pixel rectangle the series is drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenPoint {
    /// Position in the trace's `x`/`y` columns.
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// A trace mapped to canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedTrace {
    pub points: Vec<ScreenPoint>,
    pub min_price: f64,
    pub max_price: f64,
}

/// Maps series values to pixels. Points are spread evenly along x by
/// position, the way a category axis does; y is linear in price with the
/// highest price at the top.
#[derive(Debug, Clone, Copy)]
pub struct ChartGeometry {
    dimensions: ChartDimensions,
    margins: PlotMargins,
}

impl ChartGeometry {
    pub fn new(dimensions: ChartDimensions) -> Self {
        Self { dimensions, margins: PlotMargins::default() }
    }

    pub fn dimensions(&self) -> ChartDimensions {
        self.dimensions
    }

    pub fn plot_area(&self) -> PlotArea {
        let m = &self.margins;
        PlotArea {
            left: m.left,
            top: m.top,
            width: (self.dimensions.width as f64 - m.left - m.right).max(1.0),
            height: (self.dimensions.height as f64 - m.top - m.bottom).max(1.0),
        }
    }

    /// `None` when the trace has no finite price to place.
    pub fn project(&self, trace: &ScatterTrace) -> Option<ProjectedTrace> {
        let (mut min_price, mut max_price) = trace
            .y
            .iter()
            .copied()
            .filter(|p| p.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
            })?;

        // A flat series still needs a non-zero span to divide by.
        if max_price == min_price {
            min_price -= 1.0;
            max_price += 1.0;
        }

        let area = self.plot_area();
        let count = trace.y.len();
        let span = max_price - min_price;

        let points = trace
            .y
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_finite())
            .map(|(index, price)| ScreenPoint {
                index,
                x: x_for_index(&area, index, count),
                y: area.top + (max_price - price) / span * area.height,
            })
            .collect();

        Some(ProjectedTrace { points, min_price, max_price })
    }

    /// Indices of the x labels to draw so that at most `max_labels` appear,
    /// always starting at the first point.
    pub fn x_label_indices(&self, count: usize, max_labels: usize) -> Vec<usize> {
        if count == 0 || max_labels == 0 {
            return Vec::new();
        }
        if count <= max_labels {
            return (0..count).collect();
        }
        let step = (count - 1).div_ceil(max_labels.saturating_sub(1).max(1));
        (0..count).step_by(step).collect()
    }

    pub fn x_for_index(&self, index: usize, count: usize) -> f64 {
        x_for_index(&self.plot_area(), index, count)
    }
}

fn x_for_index(area: &PlotArea, index: usize, count: usize) -> f64 {
    if count <= 1 {
        return area.left + area.width / 2.0;
    }
    area.left + index as f64 * area.width / (count - 1) as f64
}

/// Price axis label, two decimals.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

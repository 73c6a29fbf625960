use std::f64::consts::{FRAC_PI_2, TAU};

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    chart::{ChartDimensions, ChartGeometry, PlotArea, PlotSpec, ProjectedTrace, ScatterTrace, format_price},
    logging::LogComponent,
};
use crate::{log_debug, log_warn};

const BACKGROUND: &str = "#ffffff";
const AXIS_COLOR: &str = "#444444";
const GRID_COLOR: &str = "#e5e5e5";
const TEXT_COLOR: &str = "#222222";
const MARKER_RADIUS: f64 = 3.0;
const MAX_X_LABELS: usize = 6;

/// Canvas 2D renderer for a [`PlotSpec`].
pub struct CanvasRenderer {
    geometry: ChartGeometry,
}

impl CanvasRenderer {
    pub fn new(dimensions: ChartDimensions) -> Self {
        Self { geometry: ChartGeometry::new(dimensions) }
    }

    fn context(&self, canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
        let dimensions = self.geometry.dimensions();
        canvas.set_width(dimensions.width);
        canvas.set_height(dimensions.height);

        canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))
    }

    pub fn render(&self, canvas: &HtmlCanvasElement, spec: &PlotSpec) -> Result<(), JsValue> {
        let context = self.context(canvas)?;
        let dimensions = self.geometry.dimensions();
        let area = self.geometry.plot_area();

        context.set_fill_style(&JsValue::from(BACKGROUND));
        context.fill_rect(0.0, 0.0, dimensions.width as f64, dimensions.height as f64);

        self.render_title(&context, &spec.layout.title)?;
        self.render_axes(&context, &area)?;
        self.render_axis_titles(&context, &area, &spec.layout.x_axis_title, &spec.layout.y_axis_title)?;

        let mut drawn = 0;
        for trace in &spec.traces {
            let Some(projected) = self.geometry.project(trace) else {
                continue;
            };
            self.render_price_labels(&context, &area, &projected)?;
            self.render_time_labels(&context, &area, trace)?;
            self.render_trace(&context, trace, &projected)?;
            drawn += projected.points.len();
        }

        if drawn == 0 {
            log_warn!(LogComponent::Infrastructure("CanvasRenderer"), "nothing to draw for '{}'", spec.layout.title);
            self.render_no_data_message(&context, &area)?;
        }

        log_debug!(
            LogComponent::Infrastructure("CanvasRenderer"),
            "rendered {} points at {}x{}",
            drawn,
            dimensions.width,
            dimensions.height
        );
        Ok(())
    }

    fn render_title(&self, context: &CanvasRenderingContext2d, title: &str) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from(TEXT_COLOR));
        context.set_font("16px sans-serif");
        context.set_text_align("center");
        context.fill_text(title, self.geometry.dimensions().width as f64 / 2.0, 24.0)
    }

    fn render_axes(&self, context: &CanvasRenderingContext2d, area: &PlotArea) -> Result<(), JsValue> {
        context.set_stroke_style(&JsValue::from(AXIS_COLOR));
        context.set_line_width(1.0);
        context.begin_path();
        context.move_to(area.left, area.top);
        context.line_to(area.left, area.bottom());
        context.line_to(area.right(), area.bottom());
        context.stroke();
        Ok(())
    }

    fn render_axis_titles(
        &self,
        context: &CanvasRenderingContext2d,
        area: &PlotArea,
        x_title: &str,
        y_title: &str,
    ) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from(TEXT_COLOR));
        context.set_font("12px sans-serif");
        context.set_text_align("center");
        context.fill_text(x_title, area.left + area.width / 2.0, area.bottom() + 40.0)?;

        context.save();
        context.translate(14.0, area.top + area.height / 2.0)?;
        context.rotate(-FRAC_PI_2)?;
        context.fill_text(y_title, 0.0, 0.0)?;
        context.restore();
        Ok(())
    }

    /// Min and max price on the y axis, with a light guide line for each.
    fn render_price_labels(
        &self,
        context: &CanvasRenderingContext2d,
        area: &PlotArea,
        projected: &ProjectedTrace,
    ) -> Result<(), JsValue> {
        context.set_font("11px sans-serif");
        context.set_text_align("right");
        for (price, y) in [(projected.max_price, area.top), (projected.min_price, area.bottom())] {
            context.set_stroke_style(&JsValue::from(GRID_COLOR));
            context.begin_path();
            context.move_to(area.left, y);
            context.line_to(area.right(), y);
            context.stroke();

            context.set_fill_style(&JsValue::from(TEXT_COLOR));
            context.fill_text(&format_price(price), area.left - 6.0, y + 4.0)?;
        }
        Ok(())
    }

    fn render_time_labels(
        &self,
        context: &CanvasRenderingContext2d,
        area: &PlotArea,
        trace: &ScatterTrace,
    ) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from(TEXT_COLOR));
        context.set_font("11px sans-serif");
        context.set_text_align("center");
        let count = trace.x.len();
        for index in self.geometry.x_label_indices(count, MAX_X_LABELS) {
            let x = self.geometry.x_for_index(index, count);
            context.fill_text(&trace.x[index].display_label(), x, area.bottom() + 18.0)?;
        }
        Ok(())
    }

    fn render_trace(
        &self,
        context: &CanvasRenderingContext2d,
        trace: &ScatterTrace,
        projected: &ProjectedTrace,
    ) -> Result<(), JsValue> {
        let color = JsValue::from(trace.marker_color.as_str());

        if projected.points.len() > 1 {
            context.set_stroke_style(&color);
            context.set_line_width(2.0);
            context.begin_path();
            for (i, point) in projected.points.iter().enumerate() {
                if i == 0 {
                    context.move_to(point.x, point.y);
                } else {
                    context.line_to(point.x, point.y);
                }
            }
            context.stroke();
        }

        context.set_fill_style(&color);
        for point in &projected.points {
            context.begin_path();
            context.arc(point.x, point.y, MARKER_RADIUS, 0.0, TAU)?;
            context.fill();
        }
        Ok(())
    }

    fn render_no_data_message(&self, context: &CanvasRenderingContext2d, area: &PlotArea) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from(TEXT_COLOR));
        context.set_font("14px sans-serif");
        context.set_text_align("center");
        context.fill_text("No price data for this period", area.left + area.width / 2.0, area.top + area.height / 2.0)
    }
}

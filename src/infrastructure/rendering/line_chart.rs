use super::geometry::{self, ScaleParams};
use crate::domain::{
    errors::{AppError, RenderingResult},
    logging::{LogComponent, get_logger},
    prediction::{Direction, PriceHistory},
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const LINE_WIDTH: f64 = 2.0;
const GRID_COLOR: &str = "rgba(255, 255, 255, 0.05)";
const TICK_COLOR: &str = "rgba(255, 255, 255, 0.5)";
const TICK_FONT: &str = "10px Arial";

/// The single live chart bound to the result canvas.
///
/// At most one instance exists at a time: the view replaces its handle on
/// every successful render, calling `destroy` on the old one first.
pub struct LineChart {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl LineChart {
    /// Draw the closing-price history as a filled line chart and return
    /// the handle owning the canvas contents.
    pub fn render(
        canvas_id: &str,
        history: &PriceHistory,
        direction: Direction,
    ) -> RenderingResult<Self> {
        let (canvas, context) = get_canvas_context(canvas_id)?;
        let width = canvas.width();
        let height = canvas.height();

        let prices = history.prices();
        let params = geometry::scale_params(width, height, &prices)
            .ok_or_else(|| AppError::RenderingError("Empty history".to_string()))?;

        context.clear_rect(0.0, 0.0, width as f64, height as f64);
        draw_grid(&context, &params);
        draw_series(&context, &params, &prices, direction);
        if let Err(e) = draw_price_scale(&context, &params) {
            // A failed render leaves a blank canvas, not a partial paint
            context.clear_rect(0.0, 0.0, width as f64, height as f64);
            return Err(e);
        }

        get_logger().debug(
            LogComponent::Infrastructure("LineChart"),
            &format!("Rendered {} points on #{}", prices.len(), canvas_id),
        );

        Ok(Self { canvas_id: canvas_id.to_string(), width, height })
    }

    /// Clear the canvas and consume the handle. Must run before a
    /// replacement chart is drawn; taking `self` by value makes a
    /// destroyed handle unusable, so at most one live chart can exist.
    pub fn destroy(self) {
        if let Ok((_, context)) = get_canvas_context(&self.canvas_id) {
            context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        }
        get_logger().debug(
            LogComponent::Infrastructure("LineChart"),
            &format!("Destroyed chart on #{}", self.canvas_id),
        );
    }

    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }
}

fn get_canvas_context(
    canvas_id: &str,
) -> RenderingResult<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::RenderingError("Document not available".to_string()))?;

    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| AppError::RenderingError(format!("Canvas #{} not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| AppError::RenderingError(format!("#{} is not a canvas", canvas_id)))?;

    let context = canvas
        .get_context("2d")
        .map_err(|_| AppError::RenderingError("Failed to get 2D context".to_string()))?
        .ok_or_else(|| AppError::RenderingError("2D context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| AppError::RenderingError("Failed to cast to 2D context".to_string()))?;

    Ok((canvas, context))
}

/// Light horizontal gridlines; the x-axis stays hidden for a cleaner look
fn draw_grid(context: &CanvasRenderingContext2d, params: &ScaleParams) {
    context.set_stroke_style(&JsValue::from(GRID_COLOR));
    context.set_line_width(1.0);
    for step in 0..=4 {
        let y = params.padding + (step as f64 / 4.0) * params.plot_height;
        context.begin_path();
        context.move_to(params.padding, y);
        context.line_to(params.padding + params.plot_width, y);
        context.stroke();
    }
}

fn draw_series(
    context: &CanvasRenderingContext2d,
    params: &ScaleParams,
    prices: &[f64],
    direction: Direction,
) {
    let points = geometry::line_points(params, prices);
    let baseline = geometry::fill_baseline(params);
    let color = direction.chart_color();

    // Translucent area under the line (8-digit hex, ~12.5% opacity)
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        context.set_fill_style(&JsValue::from(format!("{}20", color)));
        context.begin_path();
        context.move_to(first.0, baseline);
        for (x, y) in &points {
            context.line_to(*x, *y);
        }
        context.line_to(last.0, baseline);
        context.close_path();
        context.fill();
    }

    // The line itself
    context.set_stroke_style(&JsValue::from(color));
    context.set_line_width(LINE_WIDTH);
    context.begin_path();
    for (i, (x, y)) in points.iter().enumerate() {
        if i == 0 {
            context.move_to(*x, *y);
        } else {
            context.line_to(*x, *y);
        }
    }
    context.stroke();
}

/// Min/max price ticks to the right of the plot
fn draw_price_scale(
    context: &CanvasRenderingContext2d,
    params: &ScaleParams,
) -> RenderingResult<()> {
    let x = params.padding + params.plot_width + 8.0;
    context.set_fill_style(&JsValue::from(TICK_COLOR));
    context.set_font(TICK_FONT);

    context
        .fill_text(&format!("${:.2}", params.max_price), x, params.padding + 4.0)
        .map_err(|_| AppError::RenderingError("Failed to draw max tick".to_string()))?;
    context
        .fill_text(&format!("${:.2}", params.min_price), x, params.padding + params.plot_height)
        .map_err(|_| AppError::RenderingError("Failed to draw min tick".to_string()))?;

    Ok(())
}

#![cfg(target_arch = "wasm32")]

use alphapulse_wasm::domain::prediction::{Direction, PriceHistory, PricePoint};
use alphapulse_wasm::infrastructure::rendering::LineChart;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const CANVAS_ID: &str = "replacement-chart-canvas";

fn install_canvas() {
    let document = web_sys::window().unwrap().document().unwrap();
    if document.get_element_by_id(CANVAS_ID).is_some() {
        return;
    }
    let canvas = document.create_element("canvas").unwrap();
    canvas.set_id(CANVAS_ID);
    canvas.set_attribute("width", "200").unwrap();
    canvas.set_attribute("height", "100").unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
}

fn history() -> PriceHistory {
    PriceHistory::new(vec![
        PricePoint::new("2026-08-27", 188.1),
        PricePoint::new("2026-08-28", 190.45),
    ])
}

#[wasm_bindgen_test]
fn second_render_leaves_exactly_one_live_chart() {
    install_canvas();

    // First successful cycle
    let mut chart = Some(LineChart::render(CANVAS_ID, &history(), Direction::Up).unwrap());

    // Second successful cycle: the live handle is destroyed before the
    // replacement is drawn, exactly as the prediction view does it
    if let Some(old_chart) = chart.take() {
        old_chart.destroy();
    }
    assert!(chart.is_none());

    chart = Some(LineChart::render(CANVAS_ID, &history(), Direction::Down).unwrap());
    assert_eq!(chart.as_ref().unwrap().canvas_id(), CANVAS_ID);
}

#[wasm_bindgen_test]
fn render_on_missing_canvas_fails_without_a_handle() {
    assert!(LineChart::render("no-such-canvas", &history(), Direction::Up).is_err());
}

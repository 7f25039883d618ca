use alphapulse_wasm::infrastructure::rendering::geometry::{
    fill_baseline, index_to_x, line_points, price_to_y, scale_params,
};

const WIDTH: u32 = 680;
const HEIGHT: u32 = 320;

#[test]
fn extremes_map_to_plot_edges() {
    let params = scale_params(WIDTH, HEIGHT, &[10.0, 20.0, 30.0]).unwrap();
    assert_eq!(params.min_price, 10.0);
    assert_eq!(params.max_price, 30.0);

    // Max price at the top row, min price at the bottom
    assert!((price_to_y(&params, 30.0) - params.padding).abs() < 1e-9);
    assert!((price_to_y(&params, 10.0) - (params.padding + params.plot_height)).abs() < 1e-9);
    assert!((price_to_y(&params, 10.0) - fill_baseline(&params)).abs() < 1e-9);
}

#[test]
fn x_spans_the_plot_width() {
    let params = scale_params(WIDTH, HEIGHT, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert!((index_to_x(&params, 0, 4) - params.padding).abs() < 1e-9);
    assert!((index_to_x(&params, 3, 4) - (params.padding + params.plot_width)).abs() < 1e-9);
}

#[test]
fn x_is_strictly_increasing() {
    let prices: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let params = scale_params(WIDTH, HEIGHT, &prices).unwrap();
    let points = line_points(&params, &prices);
    assert_eq!(points.len(), prices.len());
    for pair in points.windows(2) {
        assert!(pair[0].0 < pair[1].0);
    }
}

#[test]
fn single_point_is_centered() {
    let params = scale_params(WIDTH, HEIGHT, &[42.0]).unwrap();
    let x = index_to_x(&params, 0, 1);
    assert!((x - (params.padding + params.plot_width / 2.0)).abs() < 1e-9);
    assert!(price_to_y(&params, 42.0).is_finite());
}

#[test]
fn higher_price_is_higher_on_screen() {
    let params = scale_params(WIDTH, HEIGHT, &[100.0, 150.0, 125.0]).unwrap();
    // Canvas Y grows downward
    assert!(price_to_y(&params, 150.0) < price_to_y(&params, 100.0));
}

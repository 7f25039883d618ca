//! Pure plot math for the history line chart. No browser types here so
//! everything is unit-testable off the wasm target.

/// Scaling parameters computed once per render
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleParams {
    pub padding: f64,
    pub text_space: f64,
    pub plot_width: f64,
    pub plot_height: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub price_range: f64,
}

pub const PADDING: f64 = 20.0;
pub const TEXT_SPACE: f64 = 60.0;

/// Compute scaling for a canvas of the given size. Returns None for an
/// empty series. A flat series gets its range widened so projection
/// never divides by zero.
pub fn scale_params(width: u32, height: u32, prices: &[f64]) -> Option<ScaleParams> {
    if prices.is_empty() {
        return None;
    }

    let mut min_price = f64::INFINITY;
    let mut max_price = f64::NEG_INFINITY;
    for &price in prices {
        min_price = min_price.min(price);
        max_price = max_price.max(price);
    }

    if max_price - min_price < f64::EPSILON {
        min_price -= 0.5;
        max_price += 0.5;
    }

    Some(ScaleParams {
        padding: PADDING,
        text_space: TEXT_SPACE,
        plot_width: width as f64 - (PADDING * 2.0) - TEXT_SPACE,
        plot_height: height as f64 - (PADDING * 2.0),
        min_price,
        max_price,
        price_range: max_price - min_price,
    })
}

/// Convert a price to a Y coordinate (inverted: Y grows downward)
pub fn price_to_y(params: &ScaleParams, price: f64) -> f64 {
    params.padding + ((params.max_price - price) / params.price_range) * params.plot_height
}

/// X coordinate of point `index` out of `count`, spanning the plot width
pub fn index_to_x(params: &ScaleParams, index: usize, count: usize) -> f64 {
    if count <= 1 {
        return params.padding + params.plot_width / 2.0;
    }
    params.padding + (index as f64 / (count - 1) as f64) * params.plot_width
}

/// Project the whole series into canvas coordinates
pub fn line_points(params: &ScaleParams, prices: &[f64]) -> Vec<(f64, f64)> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| (index_to_x(params, i, prices.len()), price_to_y(params, price)))
        .collect()
}

/// Baseline Y for the translucent area fill under the line
pub fn fill_baseline(params: &ScaleParams) -> f64 {
    params.padding + params.plot_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_series_keeps_finite_projection() {
        let params = scale_params(400, 200, &[100.0, 100.0, 100.0]).unwrap();
        assert!(params.price_range > 0.0);
        let y = price_to_y(&params, 100.0);
        assert!(y.is_finite());
        // Flat line sits in the vertical middle of the plot
        assert!((y - (params.padding + params.plot_height / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn empty_series_has_no_scale() {
        assert!(scale_params(400, 200, &[]).is_none());
    }
}

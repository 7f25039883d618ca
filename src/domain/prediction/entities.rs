pub use super::value_objects::{Direction, PricePoint, Ticker};
use serde::{Deserialize, Serialize};

/// Domain entity - one validated prediction cycle result
///
/// Owned by the view for exactly one render cycle and replaced wholesale
/// by the next successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub ticker: String,
    pub last_price: f64,
    pub direction: Direction,
    pub confidence: f64,
    pub accuracy: f64,
    pub history: PriceHistory,
}

impl Prediction {
    /// Price with currency prefix, as shown in the result panel
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.last_price)
    }

    pub fn formatted_confidence(&self) -> String {
        format!("{}%", self.confidence)
    }

    pub fn formatted_accuracy(&self) -> String {
        format!("{}%", self.accuracy)
    }
}

/// Domain entity - chronological closing-price series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    points: Vec<PricePoint>,
}

impl PriceHistory {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// X-axis labels, in series order
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.date.as_str()).collect()
    }

    /// Y-axis values, in series order
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// (min, max) over all prices; None for an empty series
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in &self.points {
            min = min.min(point.price);
            max = max.max(point.price);
        }
        if min.is_finite() { Some((min, max)) } else { None }
    }

    /// Dates never decrease along the series
    pub fn is_chronological(&self) -> bool {
        self.points.windows(2).all(|w| w[0].date <= w[1].date)
    }
}

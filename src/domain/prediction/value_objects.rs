use crate::domain::errors::AppError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Value Object - normalized ticker symbol
///
/// Construction trims surrounding whitespace and upper-cases the input;
/// an input that is empty after trimming is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "Ticker({})", _0)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(AppError::ValidationError("Ticker cannot be empty".to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Value Object - predicted price direction
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize,
)]
pub enum Direction {
    #[strum(serialize = "UP")]
    #[serde(rename = "UP")]
    Up,

    #[strum(serialize = "DOWN")]
    #[serde(rename = "DOWN")]
    Down,
}

impl Direction {
    /// Lower-cased CSS modifier ("up" / "down")
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Full class attribute for the result badge
    pub fn badge_class(&self) -> String {
        format!("prediction-badge {}", self.css_modifier())
    }

    /// Line color for the history chart, matching the page palette
    pub fn chart_color(&self) -> &'static str {
        match self {
            Self::Up => UP_COLOR,
            Self::Down => DOWN_COLOR,
        }
    }
}

pub const UP_COLOR: &str = "#2D5A27";
pub const DOWN_COLOR: &str = "#A63D40";

/// Value Object - one point of the closing-price history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self { date: date.into(), price }
    }
}

use crate::domain::{
    errors::{AppError, NetworkResult},
    logging::{LogComponent, get_logger},
    prediction::{Direction, Prediction, PricePoint, PriceHistory, Ticker},
};
use gloo_net::http::Request;
use serde::Deserialize;
use std::str::FromStr;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// HTTP client for the prediction endpoint
#[derive(Clone)]
pub struct PredictionApiClient {
    base_url: String,
}

impl Default for PredictionApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionApiClient {
    pub fn new() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string() }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// `GET {base_url}/predict/{TICKER}`
    pub fn predict_url(&self, ticker: &Ticker) -> String {
        format!("{}/predict/{}", self.base_url.trim_end_matches('/'), ticker.value())
    }

    /// Fetch and validate one prediction. Non-2xx statuses, transport
    /// failures, and malformed bodies all surface as a single failed cycle.
    pub async fn fetch_prediction(&self, ticker: &Ticker) -> NetworkResult<Prediction> {
        let url = self.predict_url(ticker);

        get_logger().info(
            LogComponent::Infrastructure("PredictionApiClient"),
            &format!("Fetching prediction: {}", url),
        );

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Request failed: {:?}", e)))?;

        if !response.ok() {
            return Err(AppError::NetworkError(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to read response: {:?}", e)))?;

        let dto: PredictionDto = serde_json::from_str(&body)
            .map_err(|e| AppError::ValidationError(format!("Malformed body: {}", e)))?;

        let prediction = dto.validate()?;

        get_logger().info(
            LogComponent::Infrastructure("PredictionApiClient"),
            &format!(
                "Received prediction for {} ({} history points)",
                prediction.ticker,
                prediction.history.len()
            ),
        );

        Ok(prediction)
    }
}

/// Wire shape of the prediction body. Every field is optional here so
/// validation can fail closed instead of partially rendering.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionDto {
    pub ticker: Option<String>,
    pub last_price: Option<f64>,
    pub direction: Option<String>,
    pub confidence: Option<f64>,
    pub accuracy: Option<f64>,
    pub history: Option<Vec<PricePointDto>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricePointDto {
    pub date: Option<String>,
    pub price: Option<f64>,
}

impl PredictionDto {
    /// Map onto the domain entity, rejecting any incomplete body.
    pub fn validate(self) -> Result<Prediction, AppError> {
        let ticker = require("ticker", self.ticker)?;
        let last_price = require_finite("last_price", self.last_price)?;
        let direction_raw = require("direction", self.direction)?;
        let direction = Direction::from_str(&direction_raw).map_err(|_| {
            AppError::ValidationError(format!("Unknown direction: {:?}", direction_raw))
        })?;
        let confidence = require_finite("confidence", self.confidence)?;
        let accuracy = require_finite("accuracy", self.accuracy)?;

        // Absent history is a valid body with nothing to chart
        let mut points = Vec::new();
        for dto in self.history.unwrap_or_default() {
            let date = require("history.date", dto.date)?;
            let price = require_finite("history.price", dto.price)?;
            points.push(PricePoint::new(date, price));
        }

        Ok(Prediction {
            ticker,
            last_price,
            direction,
            confidence,
            accuracy,
            history: PriceHistory::new(points),
        })
    }
}

fn require<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::ValidationError(format!("Missing field: {}", field)))
}

fn require_finite(field: &str, value: Option<f64>) -> Result<f64, AppError> {
    let value = require(field, value)?;
    if !value.is_finite() {
        return Err(AppError::ValidationError(format!("Non-finite value in field: {}", field)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_url_embeds_normalized_ticker() {
        let client = PredictionApiClient::new();
        let ticker = Ticker::new("  msft ").unwrap();
        assert_eq!(client.predict_url(&ticker), "http://localhost:8000/predict/MSFT");
    }

    #[test]
    fn predict_url_tolerates_trailing_slash() {
        let client = PredictionApiClient::with_base_url("http://api.example.com/");
        let ticker = Ticker::new("aapl").unwrap();
        assert_eq!(client.predict_url(&ticker), "http://api.example.com/predict/AAPL");
    }
}

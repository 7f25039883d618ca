use crate::domain::{
    errors::NetworkResult,
    logging::{LogComponent, get_logger},
    prediction::{Prediction, Ticker},
};
use crate::infrastructure::http::PredictionApiClient;

/// Lifecycle of one submission: `Idle -> Loading -> {Rendered | Failed}`,
/// returning to `Idle` implicitly on the next submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleState {
    #[default]
    Idle,
    Loading,
    Rendered,
    Failed,
}

impl CycleState {
    pub fn shows_loader(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn shows_result(&self) -> bool {
        matches!(self, Self::Rendered)
    }
}

/// Serializes prediction cycles: at most one request is in flight, and a
/// completion is only honored if it carries the current generation.
///
/// The submit control is disabled while `is_pending`, so overlapping
/// submissions cannot race the shared display and chart state.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGate {
    pending: bool,
    generation: u64,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Start a cycle. Returns the cycle's generation token, or None if a
    /// request is already in flight.
    pub fn begin(&mut self) -> Option<u64> {
        if self.pending {
            return None;
        }
        self.pending = true;
        self.generation += 1;
        Some(self.generation)
    }

    /// Complete a cycle. Returns whether the completion is current; a
    /// stale generation is discarded and leaves the gate untouched.
    pub fn finish(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.pending = false;
        true
    }
}

/// Application service for one fetch-and-validate prediction use case
#[derive(Clone, Default)]
pub struct PredictionService {
    client: PredictionApiClient,
}

impl PredictionService {
    pub fn new() -> Self {
        Self { client: PredictionApiClient::new() }
    }

    pub fn with_client(client: PredictionApiClient) -> Self {
        Self { client }
    }

    pub async fn predict(&self, ticker: &Ticker) -> NetworkResult<Prediction> {
        get_logger().info(
            LogComponent::Application("PredictionService"),
            &format!("Starting prediction cycle for {}", ticker.value()),
        );
        self.client.fetch_prediction(ticker).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_rejects_overlapping_begin() {
        let mut gate = SubmissionGate::new();
        let first = gate.begin().unwrap();
        assert!(gate.begin().is_none());
        assert!(gate.finish(first));
        assert!(gate.begin().is_some());
    }

    #[test]
    fn gate_discards_stale_generation() {
        let mut gate = SubmissionGate::new();
        let first = gate.begin().unwrap();
        assert!(gate.finish(first));
        let second = gate.begin().unwrap();
        assert_ne!(first, second);
        assert!(!gate.finish(first));
        assert!(gate.is_pending());
        assert!(gate.finish(second));
        assert!(!gate.is_pending());
    }
}

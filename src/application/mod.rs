pub mod prediction_service;

pub use prediction_service::{CycleState, PredictionService, SubmissionGate};

// Provider trait for per-view initial state
use crate::domain::prediction::PredictionInput;
use crate::domain::view::{ViewKind, ViewState};

pub trait ViewDataProvider: Send + Sync {
    /// Fresh initial state for a newly mounted view
    fn seed(&self, kind: ViewKind) -> ViewState;

    /// Payload sent with the prediction request
    fn prediction_input(&self) -> PredictionInput;
}

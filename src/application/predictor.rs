// Baseline forecaster served at /predict
use crate::application::prediction_service::{PredictionError, PredictionSource};
use crate::domain::prediction::{PredictionInput, PredictionResponse};
use async_trait::async_trait;

/// Persistence forecast: each target is predicted to stay at its previous
/// reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersistencePredictor;

impl PersistencePredictor {
    pub fn predict(&self, input: &PredictionInput) -> PredictionResponse {
        PredictionResponse {
            wave_height: Some(input.prev_wave_height),
            wind_speed: Some(input.prev_wind_speed),
            temperature: Some(input.prev_temp),
            system_load: Some(input.system_cpu_usage),
        }
    }
}

#[async_trait]
impl PredictionSource for PersistencePredictor {
    async fn fetch(&self, input: &PredictionInput) -> Result<PredictionResponse, PredictionError> {
        Ok(self.predict(input))
    }
}

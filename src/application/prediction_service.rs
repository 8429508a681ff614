// Prediction source trait and the one-shot merge use case
use crate::application::view_session::ViewSession;
use crate::domain::prediction::{PredictionInput, PredictionMetric, PredictionResponse};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictionError {
    /// Network-level failure talking to the prediction endpoint
    #[error("prediction request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("prediction endpoint returned status {status}: {message}")]
    Http { status: u16, message: String },

    /// Body was not JSON or did not match the expected shape
    #[error("prediction response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("prediction request timed out after {0:?}")]
    Timeout(Duration),
}

#[async_trait]
pub trait PredictionSource: Send + Sync {
    async fn fetch(&self, input: &PredictionInput) -> Result<PredictionResponse, PredictionError>;
}

/// Fetch once and merge into the session. Failures are logged and
/// swallowed; the seeded predictions stay as they are.
pub async fn refresh_predictions(
    session: &ViewSession,
    source: &dyn PredictionSource,
    input: &PredictionInput,
) -> Option<usize> {
    let response = match source.fetch(input).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Error fetching predictions for session {}: {}", session.id(), e);
            return None;
        }
    };

    let present: Vec<&str> = PredictionMetric::ALL
        .iter()
        .filter(|metric| response.value_for(**metric).is_some())
        .map(|metric| metric.response_field())
        .collect();
    tracing::debug!("Prediction response carried fields {:?}", present);

    let merged = session.merge_predictions(&response).await;
    match merged {
        Some(count) => tracing::info!("Merged {} predictions into session {}", count, session.id()),
        None => tracing::debug!("Session {} unmounted before predictions arrived", session.id()),
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::{Prediction, PredictionTrend};
    use crate::domain::view::{ViewKind, ViewState};

    struct FixedSource(Result<PredictionResponse, u16>);

    #[async_trait]
    impl PredictionSource for FixedSource {
        async fn fetch(&self, _input: &PredictionInput) -> Result<PredictionResponse, PredictionError> {
            match &self.0 {
                Ok(response) => Ok(response.clone()),
                Err(status) => Err(PredictionError::Http {
                    status: *status,
                    message: "unavailable".to_string(),
                }),
            }
        }
    }

    struct MalformedSource;

    #[async_trait]
    impl PredictionSource for MalformedSource {
        async fn fetch(&self, _input: &PredictionInput) -> Result<PredictionResponse, PredictionError> {
            Ok(serde_json::from_str::<PredictionResponse>("not json")?)
        }
    }

    fn insights_session() -> ViewSession {
        let mut state = ViewState::empty(ViewKind::Insights);
        state.predictions = vec![
            Prediction::new(PredictionMetric::WaveHeight, "1.2m", "2.4m", "Next 6h", PredictionTrend::Up),
            Prediction::new(PredictionMetric::SystemLoad, "47%", "45%", "Next 2h", PredictionTrend::Down),
        ];
        ViewSession::new(state)
    }

    #[tokio::test]
    async fn test_refresh_merges_success() {
        let session = insights_session();
        let source = FixedSource(Ok(PredictionResponse {
            wave_height: Some(2.40),
            system_load: Some(52.0),
            ..Default::default()
        }));

        let merged = refresh_predictions(&session, &source, &PredictionInput::sample()).await;
        assert_eq!(merged, Some(2));

        let state = session.snapshot().await;
        assert_eq!(state.predictions[0].predicted, "2.40m");
        assert_eq!(state.predictions[0].trend, PredictionTrend::Up);
        assert_eq!(state.predictions[1].predicted, "52%");
        assert_eq!(state.predictions[1].trend, PredictionTrend::Up);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_seeded_values() {
        let session = insights_session();
        let before = session.snapshot().await;

        let merged = refresh_predictions(&session, &FixedSource(Err(503)), &PredictionInput::sample()).await;
        assert_eq!(merged, None);
        assert_eq!(session.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_refresh_malformed_body_takes_failure_path() {
        let session = insights_session();
        let before = session.snapshot().await;

        let merged = refresh_predictions(&session, &MalformedSource, &PredictionInput::sample()).await;
        assert_eq!(merged, None);
        assert_eq!(session.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_refresh_after_unmount_is_discarded() {
        let session = insights_session();
        let before = session.snapshot().await;
        session.unmount().await;

        let source = FixedSource(Ok(PredictionResponse {
            wave_height: Some(9.9),
            ..Default::default()
        }));
        assert_eq!(refresh_predictions(&session, &source, &PredictionInput::sample()).await, None);
        assert_eq!(session.snapshot().await, before);
    }
}

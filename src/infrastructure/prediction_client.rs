// HTTP client for the remote prediction endpoint
use crate::application::prediction_service::{PredictionError, PredictionSource};
use crate::domain::prediction::{PredictionInput, PredictionResponse};
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpPredictionClient {
    pub fn new(endpoint: String, timeout: Option<Duration>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            timeout,
        }
    }

    async fn post(&self, input: &PredictionInput) -> Result<PredictionResponse, PredictionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(input)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(PredictionError::Http { status, message });
        }

        // Decode through serde_json so a bad body is a decode error, not transport
        let body = response.text().await?;
        Ok(serde_json::from_str::<PredictionResponse>(&body)?)
    }
}

#[async_trait]
impl PredictionSource for HttpPredictionClient {
    async fn fetch(&self, input: &PredictionInput) -> Result<PredictionResponse, PredictionError> {
        tracing::debug!("Requesting predictions from {}", self.endpoint);

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.post(input))
                .await
                .map_err(|_| PredictionError::Timeout(limit))?,
            None => self.post(input).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use std::net::SocketAddr;

    async fn serve(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn client(addr: SocketAddr, timeout: Option<Duration>) -> HttpPredictionClient {
        HttpPredictionClient::new(format!("http://{}/predict", addr), timeout)
    }

    #[tokio::test]
    async fn test_fetch_decodes_response_and_sends_payload() {
        let router = Router::new().route(
            "/predict",
            post(|Json(input): Json<PredictionInput>| async move {
                Json(serde_json::json!({
                    "wave_height": 2.40,
                    "wind_speed": input.prev_wind_speed,
                }))
            }),
        );
        let addr = serve(router).await;

        let response = client(addr, None).fetch(&PredictionInput::sample()).await.unwrap();
        assert_eq!(response.wave_height, Some(2.40));
        assert_eq!(response.wind_speed, Some(15.2));
        assert_eq!(response.temperature, None);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let router = Router::new().route(
            "/predict",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model not loaded") }),
        );
        let addr = serve(router).await;

        let err = client(addr, None).fetch(&PredictionInput::sample()).await.unwrap_err();
        match err {
            PredictionError::Http { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "model not loaded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_decode_error() {
        let router = Router::new().route("/predict", post(|| async { "<html>oops</html>" }));
        let addr = serve(router).await;

        let err = client(addr, None).fetch(&PredictionInput::sample()).await.unwrap_err();
        assert!(matches!(err, PredictionError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_network_error() {
        // Bind then drop to get a port nothing is listening on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(addr, None).fetch(&PredictionInput::sample()).await.unwrap_err();
        assert!(matches!(err, PredictionError::Transport(_)));
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let router = Router::new().route(
            "/predict",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(serde_json::json!({ "wave_height": 1.0 }))
            }),
        );
        let addr = serve(router).await;

        let err = client(addr, Some(Duration::from_millis(50)))
            .fetch(&PredictionInput::sample())
            .await
            .unwrap_err();
        assert!(matches!(err, PredictionError::Timeout(_)));
    }
}

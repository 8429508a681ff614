// HTTP request handlers
use crate::domain::map::{MapMarker, MapWidgetConfig};
use crate::domain::prediction::{PredictionInput, PredictionResponse};
use crate::domain::view::{ViewKind, ViewState};
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::infrastructure::update_stream::stream_from_receiver;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MountedView {
    pub session_id: Uuid,
    pub state: ViewState,
}

#[derive(Serialize)]
pub struct MapView {
    pub config: MapWidgetConfig,
    pub markers: Vec<MapMarker>,
}

async fn respond<T: Serialize>(status: StatusCode, data: &T, headers: &HeaderMap) -> Response {
    match json_response(status, data, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Fleet status cards
pub async fn list_buoys(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let buoys = state.provider.seed(ViewKind::Dashboard).buoys;
    respond(StatusCode::OK, &buoys, &headers).await
}

/// Map widget configuration and marker overlay
pub async fn map_view(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let view = MapView {
        config: state.map_config.clone(),
        markers: state.provider.seed(ViewKind::Map).markers,
    };
    respond(StatusCode::OK, &view, &headers).await
}

/// Mount a view and return its session id with the seeded state
pub async fn mount_view(
    Path(kind): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let kind: ViewKind = kind.parse()?;
    let session = state.session_service.mount(kind).await?;

    let body = MountedView {
        session_id: session.id(),
        state: session.snapshot().await,
    };
    Ok(respond(StatusCode::CREATED, &body, &headers).await)
}

/// Current snapshot of a mounted view
pub async fn get_session(
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let session = state
        .session_service
        .get(id)
        .await
        .ok_or(ApiError::SessionNotFound(id))?;

    Ok(respond(StatusCode::OK, &session.snapshot().await, &headers).await)
}

/// Stream snapshots of a mounted view as NDJSON
pub async fn stream_session(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state
        .session_service
        .get(id)
        .await
        .ok_or(ApiError::SessionNotFound(id))?;

    // Subscribe before snapshotting so no update falls in between
    let rx = session.subscribe();
    let initial = session.snapshot().await;
    Ok(stream_from_receiver(initial, rx))
}

/// Unmount a view, stopping its ticks
pub async fn unmount_session(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    if state.session_service.unmount(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::SessionNotFound(id))
    }
}

/// Baseline forecast for the given readings
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(input): Json<PredictionInput>,
) -> Json<PredictionResponse> {
    Json(state.predictor.predict(&input))
}

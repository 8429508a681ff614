// Router construction
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_session, health_check, list_buoys, map_view, mount_view, predict, stream_session,
    unmount_session,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/buoys", get(list_buoys))
        .route("/map", get(map_view))
        .route("/views/:kind", post(mount_view))
        .route("/sessions/:id", get(get_session).delete(unmount_session))
        .route("/sessions/:id/stream", get(stream_session))
        .route("/predict", post(predict))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

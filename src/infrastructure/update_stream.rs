// Chunked NDJSON streaming of session snapshots
use crate::domain::view::ViewState;
use axum::body::Body;
use axum::http::{Response, StatusCode, header};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;
use tokio::sync::broadcast;

/// Serialize one snapshot as a newline-terminated JSON line
fn serialize_line(state: &ViewState) -> Result<Bytes, std::io::Error> {
    let json = serde_json::to_vec(state)?;
    let mut line = BytesMut::with_capacity(json.len() + 1);
    line.put_slice(&json);
    line.put_u8(b'\n');
    Ok(line.freeze())
}

/// Snapshots from `initial` onward. The stream ends when the session's
/// sender is dropped; lagged receivers skip what they missed.
pub fn snapshot_stream(
    initial: ViewState,
    mut rx: broadcast::Receiver<ViewState>,
) -> impl Stream<Item = ViewState> + Send + 'static {
    async_stream::stream! {
        yield initial;
        loop {
            match rx.recv().await {
                Ok(state) => yield state,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::debug!("Update stream lagged, skipped {} snapshots", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }
}

fn ndjson_response<S>(stream: S) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = ViewState> + Send + 'static,
{
    let byte_stream = stream.map(|state| serialize_line(&state));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/x-ndjson")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from_stream(byte_stream))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Stream a session's snapshots, starting with `initial`
pub fn stream_from_receiver(
    initial: ViewState,
    rx: broadcast::Receiver<ViewState>,
) -> impl IntoResponse {
    match ndjson_response(snapshot_stream(initial, rx)) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

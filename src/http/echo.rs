//! The echo handler.
//!
//! Accepts any method on any path, drains the request body, logs one
//! structured record, and replies with a JSON description of the request.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
};
use futures_util::StreamExt;
use serde::Serialize;

use crate::http::server::AppState;

/// JSON body returned for every request: the service name and an echo of
/// the received headers.
#[derive(Debug, Serialize)]
pub struct EchoPayload {
    pub service: String,
    pub headers: BTreeMap<String, String>,
}

/// Handle one request.
pub(crate) async fn echo_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Response {
    let (parts, body) = request.into_parts();

    // The exchange only counts as complete once the request body has been
    // consumed; an undrained body can stall the connection.
    drain_body(body).await;

    let user_agent = parts
        .headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());

    tracing::info!(
        method = %parts.method,
        url = %parts.uri,
        userAgent = user_agent,
        "HTTP request processed"
    );

    let payload = EchoPayload {
        service: state.service_name.as_ref().to_owned(),
        headers: echo_headers(&parts.headers),
    };

    match serde_json::to_string_pretty(&payload) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(error) => {
            // Isolated to this request; the process keeps serving.
            tracing::error!(error = %error, "Failed to serialize echo payload");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Read and discard the request body to completion. Read errors end the
/// drain; the response is sent regardless.
async fn drain_body(body: Body) {
    let mut stream = body.into_data_stream();
    while let Some(chunk) = stream.next().await {
        if chunk.is_err() {
            break;
        }
    }
}

/// Fold the header map into a string map with lower-cased keys; repeated
/// headers are joined with ", ".
fn echo_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        match map.entry(name.as_str().to_owned()) {
            Entry::Vacant(slot) => {
                slot.insert(value.into_owned());
            }
            Entry::Occupied(mut slot) => {
                let joined = slot.get_mut();
                joined.push_str(", ");
                joined.push_str(&value);
            }
        }
    }
    map
}

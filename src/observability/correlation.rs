//! Request-ID based log correlation.
//!
//! Every request gets a UUID v4 in `x-request-id` (generated unless the
//! client already sent one) and a tracing span carrying that ID, so all log
//! records emitted while handling the request can be joined by an external
//! log processor. The ID is propagated onto the response for the client.

use axum::{
    body::Body,
    http::{HeaderMap, HeaderName, HeaderValue, Request},
};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Header carrying the correlation ID.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// UUID v4 generator for the set-request-id layer.
#[derive(Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build the per-request span for the trace layer.
///
/// Runs after the set-request-id layer, so the header is always present.
pub fn make_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id_from(request.headers()),
    )
}

/// Extract the correlation ID from a header map.
pub fn request_id_from(headers: &HeaderMap) -> &str {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_parseable_uuid() {
        let request = Request::builder().body(()).unwrap();
        let id = UuidRequestId.make_request_id(&request).unwrap();
        let value = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(value).is_ok());
    }

    #[test]
    fn missing_header_falls_back_to_unknown() {
        let headers = HeaderMap::new();
        assert_eq!(request_id_from(&headers), "unknown");
    }

    #[test]
    fn present_header_is_returned_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));
        assert_eq!(request_id_from(&headers), "abc-123");
    }
}

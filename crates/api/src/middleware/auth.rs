use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::dto::ErrorResponse;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Constant-time comparison of two secrets.
pub fn timing_safe_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}

pub fn is_read_only_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Rejects mutating requests without the configured `X-Api-Key`.
///
/// Read-only methods always pass; with no key configured every request passes.
pub async fn require_api_key(
    State(expected): State<Option<Arc<str>>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = expected else {
        return next.run(request).await;
    };
    if is_read_only_method(request.method()) {
        return next.run(request).await;
    }

    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .map(|v| v.as_bytes())
        .unwrap_or_default();

    if timing_safe_eq(presented, expected.as_bytes()) {
        return next.run(request).await;
    }

    warn!(
        method = %request.method(),
        path = request.uri().path(),
        "Rejected request with missing or invalid API key"
    );
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: "Missing or invalid API key".to_string(),
        }),
    )
        .into_response()
}

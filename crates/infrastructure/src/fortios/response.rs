//! Decoding of FortiOS JSON payloads into domain values.

use gatewarden_domain::{ApiResponse, DomainError, VdomStatus};
use serde_json::Value;
use std::sync::Arc;

use super::HttpReply;

/// Maps a write reply to an [`ApiResponse`].
///
/// * object with a truthy `result` or `status == "success"` → `Success`
/// * HTTP 404 or `http_status == 404` → `NotFound`
/// * list of per-VDOM objects → `PartialSuccess`
/// * anything else → `PermissionDenied`
pub fn decode(reply: &HttpReply) -> ApiResponse {
    match &reply.body {
        Value::Object(map) => {
            if map.get("result").is_some_and(is_truthy)
                || map.get("status").and_then(Value::as_str) == Some("success")
            {
                return ApiResponse::Success;
            }
            if reply.status == 404 || map.get("http_status").and_then(Value::as_u64) == Some(404)
            {
                return ApiResponse::NotFound;
            }
            ApiResponse::PermissionDenied
        }
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            ApiResponse::PartialSuccess(
                items
                    .iter()
                    .map(|item| VdomStatus {
                        vdom: item.get("vdom").and_then(Value::as_str).map(str::to_string),
                        success: item.get("status").and_then(Value::as_str) == Some("success"),
                    })
                    .collect(),
            )
        }
        _ if reply.status == 404 => ApiResponse::NotFound,
        _ => ApiResponse::PermissionDenied,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Error for a read that did not come back with a usable payload.
pub fn read_error(reply: &HttpReply, what: &str) -> DomainError {
    match reply.status {
        401 | 403 => DomainError::PermissionDenied(format!("{} (HTTP {})", what, reply.status)),
        status if status >= 500 => {
            DomainError::Transport(format!("{} failed with HTTP {}", what, status))
        }
        _ if reply.body.get("results").is_none() => {
            DomainError::PermissionDenied(format!("{} returned no results", what))
        }
        status => DomainError::InvalidResponse(format!("{} returned HTTP {}", what, status)),
    }
}

/// The `results` array of a successful read.
pub fn results<'a>(reply: &'a HttpReply, what: &str) -> Result<&'a [Value], DomainError> {
    if !reply.is_success() {
        return Err(read_error(reply, what));
    }
    match reply.body.get("results") {
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(single @ Value::Object(_)) => Ok(std::slice::from_ref(single)),
        _ => Err(read_error(reply, what)),
    }
}

/// Names out of a `[{"name": ...}, ...]` field.
pub fn names(record: &Value, field: &str) -> Vec<Arc<str>> {
    record
        .get(field)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|i| i.get("name").and_then(Value::as_str))
                .map(Arc::from)
                .collect()
        })
        .unwrap_or_default()
}

/// `[{"name": ...}, ...]` payload for member lists.
pub fn name_list(names: &[Arc<str>]) -> Value {
    Value::Array(
        names
            .iter()
            .map(|n| serde_json::json!({ "name": &**n }))
            .collect(),
    )
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use gatewarden_domain::DomainError;
use tracing::{error, warn};

use crate::dto::ErrorResponse;

/// A domain error on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(err)
    }
}

pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::Validation(_) | DomainError::InvalidIpAddress(_) => StatusCode::BAD_REQUEST,
        DomainError::PermissionDenied(_) => StatusCode::FORBIDDEN,
        DomainError::PolicyNotFound(_)
        | DomainError::GroupNotInPolicy { .. }
        | DomainError::NotInGroup { .. }
        | DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::GroupCapacityExceeded { .. } => StatusCode::CONFLICT,
        DomainError::MutationFailed(_)
        | DomainError::Transport(_)
        | DomainError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            warn!(error = %self.0, status = status.as_u16(), "Request rejected");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

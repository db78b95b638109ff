use axum::{extract::State, response::Json};
use tracing::{debug, info};

use crate::{dto::HealthResponse, errors::ApiError, state::AppState};

pub async fn health_check() -> &'static str {
    debug!("Health check requested");
    "OK"
}

/// Confirms the appliance answers policy reads for every configured VDOM.
pub async fn firewall_health(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    let healthy = state.check_health.execute().await?;
    info!(healthy, "Firewall health checked");
    Ok(Json(HealthResponse { healthy }))
}

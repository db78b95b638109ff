use axum::{
    extract::{Query, State},
    response::Json,
};
use gatewarden_domain::{BlockReport, BlockedIpListing, UnblockReport};
use tracing::info;

use crate::{
    dto::{BlockIpRequest, BlockedIpsParams, UnblockIpRequest},
    errors::ApiError,
    state::AppState,
};

pub async fn block_ip(
    State(state): State<AppState>,
    Json(body): Json<BlockIpRequest>,
) -> Result<Json<BlockReport>, ApiError> {
    let request = body.into_domain(state.default_method)?;
    let report = state.block_ip.execute(&request).await?;

    info!(
        newly_blocked = report.newly_blocked.len(),
        already_blocked = report.already_blocked.len(),
        errors = report.error_with_block.len(),
        "Block request completed"
    );
    Ok(Json(report))
}

pub async fn unblock_ip(
    State(state): State<AppState>,
    Json(body): Json<UnblockIpRequest>,
) -> Result<Json<UnblockReport>, ApiError> {
    let request = body.into_domain(state.default_method)?;
    let report = state.unblock_ip.execute(&request).await?;

    info!(
        newly_unblocked = report.newly_unblocked.len(),
        not_exist = report.not_exist.len(),
        errors = report.error_with_unblock.len(),
        "Unblock request completed"
    );
    Ok(Json(report))
}

pub async fn get_blocked_ips(
    State(state): State<AppState>,
    Query(params): Query<BlockedIpsParams>,
) -> Result<Json<BlockedIpListing>, ApiError> {
    let query = params.into_domain(state.default_method)?;
    Ok(Json(state.get_blocked_ips.execute(&query).await?))
}

use crate::handlers;
use crate::middleware::require_api_key;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    let api = Router::new()
        .route("/firewall/health", get(handlers::firewall_health))
        .route("/block", post(handlers::block_ip))
        .route("/unblock", post(handlers::unblock_ip))
        .route("/blocked", get(handlers::get_blocked_ips))
        .route_layer(middleware::from_fn_with_state(
            state.api_key.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .with_state(state)
}

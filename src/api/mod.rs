pub mod health;
pub mod invite;

use axum::Router;
use tower::limit::ConcurrencyLimitLayer;

use crate::state::AppState;

/// Create the router with all routes.
///
/// At most `max_instances` invitations are in flight at once; further calls
/// wait for a free slot. Health checks bypass the limit.
pub fn create_router(state: AppState) -> Router {
    let max_instances = state.config.max_instances;

    Router::new()
        .merge(invite::invite_routes().layer(ConcurrencyLimitLayer::new(max_instances)))
        .merge(health::health_routes())
        .with_state(state)
}

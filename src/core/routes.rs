// HTTP routes configuration

use crate::core::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(crate::handlers::health::health_handler))
        // Everything else is a navigation attempt to be guarded
        .fallback(crate::handlers::navigate::navigate_handler)
        .with_state(state)
}

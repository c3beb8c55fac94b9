//! Route table.

use std::sync::Arc;

use axum::{Router, routing::post};
use tower_http::trace::TraceLayer;

use super::{handler::send_chat, state::AppState};

/// Build the router with the given state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/sendChat", post(send_chat))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the router wired with the upper-casing transformer.
pub fn build_app() -> Router {
    build_router(Arc::new(AppState::default()))
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::letter::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/identities", get(handlers::handle_list_identities))
        .route("/api/v1/letters", post(handlers::handle_create_letter))
        .with_state(state)
}

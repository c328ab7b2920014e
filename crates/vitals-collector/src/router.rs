//! Axum router wiring for the collector API.

use axum::routing::{get, post};
use axum::Router;

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/update", post(handlers::update_json))
        .route("/updates", post(handlers::updates_json))
        .route("/update/:kind/:name/:value", post(handlers::update_path))
        .route("/value", post(handlers::value_json))
        .route("/value/:kind/:name", get(handlers::value_path))
        .with_state(state)
}

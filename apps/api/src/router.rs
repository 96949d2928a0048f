use std::sync::Arc;

use axum::{routing::get, Router};

use booking_cell::router::booking_routes;
use careers_cell::router::careers_routes;
use contact_cell::router::contact_routes;
use prediction_cell::router::prediction_routes;
use shared_store::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Insurance API is running!" }))
        .merge(booking_routes(state.clone()))
        .merge(prediction_routes(state.clone()))
        .merge(contact_routes(state.clone()))
        .merge(careers_routes(state))
}

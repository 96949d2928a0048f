use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_store::AppState;
use shared_utils::extractor::session_middleware;

use crate::handlers;

pub fn prediction_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/predict-charges", post(handlers::predict_charges))
        .route("/prediction-history", get(handlers::prediction_history))
        .layer(middleware::from_fn(session_middleware))
        .with_state(state)
}

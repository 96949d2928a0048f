use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_store::AppState;
use shared_utils::extractor::staff_guard;

use crate::handlers;

pub fn careers_routes(state: Arc<AppState>) -> Router {
    let staff_routes = Router::new()
        .route("/jobs/create", post(handlers::create_job))
        .layer(middleware::from_fn_with_state(state.clone(), staff_guard));

    Router::new()
        .route("/jobs", get(handlers::list_jobs))
        .route("/apply", post(handlers::apply))
        .merge(staff_routes)
        .with_state(state)
}

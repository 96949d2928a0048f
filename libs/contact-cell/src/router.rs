use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_store::AppState;
use shared_utils::extractor::staff_guard;

use crate::handlers;

pub fn contact_routes(state: Arc<AppState>) -> Router {
    let staff_routes = Router::new()
        .route("/messages", get(handlers::list_messages))
        .route("/messages/{message_id}/solve", post(handlers::solve_message))
        .layer(middleware::from_fn_with_state(state.clone(), staff_guard));

    Router::new()
        .route("/contact", post(handlers::submit_contact))
        .merge(staff_routes)
        .with_state(state)
}

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use shared_store::AppState;
use shared_utils::extractor::{session_middleware, staff_guard};

use crate::handlers;

pub fn booking_routes(state: Arc<AppState>) -> Router {
    // Booking and listings require a session; slot queries are public so
    // the form can populate before login completes.
    let protected_routes = Router::new()
        .route("/book-appointment", post(handlers::book_appointment))
        .route("/my-appointments", get(handlers::my_appointments))
        .layer(middleware::from_fn(session_middleware));

    let staff_routes = Router::new()
        .route("/availability", put(handlers::configure_availability))
        .layer(middleware::from_fn_with_state(state.clone(), staff_guard));

    Router::new()
        .route("/open-slots", get(handlers::open_slots))
        .merge(protected_routes)
        .merge(staff_routes)
        .with_state(state)
}

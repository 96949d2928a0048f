use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

use shared_models::auth::SessionUser;
use shared_models::error::AppError;
use shared_store::AppState;

/// Middleware for session identity.
///
/// Session issuance and token verification live in the external identity
/// subsystem; by the time a request reaches this service the bearer token
/// is the caller's user id. This middleware is the seam where a real
/// verifier would plug in.
pub async fn session_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request)?;

    let user_id = Uuid::parse_str(token)
        .map_err(|_| AppError::Auth("Invalid session token".to_string()))?;

    request.extensions_mut().insert(SessionUser { id: user_id });

    Ok(next.run(request).await)
}

/// Middleware for the back-office surface: the bearer token must match the
/// configured staff API token.
pub async fn staff_guard(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request)?;

    if !state.config.is_staff_configured() || token != state.config.staff_api_token {
        debug!("Rejected staff request to {}", request.uri().path());
        return Err(AppError::Auth("Staff access denied".to_string()));
    }

    Ok(next.run(request).await)
}

fn bearer_token<B>(request: &Request<B>) -> Result<&str, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))?;

    let auth_value = auth_header
        .to_str()
        .map_err(|_| AppError::Auth("Invalid authorization header format".to_string()))?;

    auth_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Auth("Invalid authorization header format".to_string()))
}

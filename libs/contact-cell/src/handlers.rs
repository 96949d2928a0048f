use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use shared_models::error::AppError;
use shared_store::{AppState, StoreError};

use crate::models::{ContactError, ContactForm};

#[axum::debug_handler]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> Result<Json<Value>, AppError> {
    form.validate().map_err(|e| match e {
        ContactError::Invalid(msg) => AppError::ValidationError(msg),
        ContactError::NotFound => AppError::NotFound(e.to_string()),
    })?;

    let message = state
        .stores
        .messages
        .create(form.name, form.email, form.message)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    info!("Contact message {} received from {}", message.id, message.email);

    Ok(Json(json!({
        "success": true,
        "id": message.id
    })))
}

/// Staff inbox, newest first.
#[axum::debug_handler]
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let messages = state
        .stores
        .messages
        .list()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({ "messages": messages })))
}

/// A solved message is simply deleted from the inbox.
#[axum::debug_handler]
pub async fn solve_message(
    State(state): State<Arc<AppState>>,
    Path(message_id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    state
        .stores
        .messages
        .delete(message_id)
        .await
        .map_err(|e| match e {
            StoreError::NotFound => AppError::NotFound("Message not found".to_string()),
            other => AppError::Internal(other.to_string()),
        })?;

    info!("Contact message {} resolved", message_id);

    Ok(Json(json!({ "success": true })))
}

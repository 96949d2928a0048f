use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::info;

use shared_models::error::AppError;
use shared_store::{AppState, StoreError};

use crate::models::{ApplicationForm, CreateJobRequest};

#[axum::debug_handler]
pub async fn list_jobs(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let jobs = state
        .stores
        .jobs
        .list_jobs()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({ "jobs": jobs })))
}

/// Staff-created listing.
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateJobRequest>,
) -> Result<Json<Value>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::ValidationError("title must not be empty".to_string()));
    }

    let job = state
        .stores
        .jobs
        .create_job(request.title, request.description, request.location, request.experience)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    info!("Job {} posted: {}", job.job_id, job.title);

    Ok(Json(json!({ "success": true, "job": job })))
}

#[axum::debug_handler]
pub async fn apply(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ApplicationForm>,
) -> Result<Json<Value>, AppError> {
    form.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let application = state
        .stores
        .jobs
        .create_application(form.name, form.email, form.job_id, form.cover_letter)
        .await
        .map_err(|e| match e {
            StoreError::NotFound => AppError::NotFound("Job not found".to_string()),
            other => AppError::Internal(other.to_string()),
        })?;

    info!("Application {} received for job {}", application.id, application.job_id);

    Ok(Json(json!({
        "success": true,
        "message": "Application submitted successfully"
    })))
}

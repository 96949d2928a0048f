use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::auth::SessionUser;
use shared_models::error::AppError;
use shared_models::prediction::PredictionRecord;
use shared_store::AppState;

use crate::models::{PredictionError, PredictionInput, PredictionResponse};
use crate::services::scoring::ChargesScoringService;

#[axum::debug_handler]
pub async fn predict_charges(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
    Json(input): Json<PredictionInput>,
) -> Result<Json<PredictionResponse>, AppError> {
    let service = ChargesScoringService::new(&state.config);

    let prediction = service.predict(&input).await.map_err(|e| match e {
        PredictionError::Invalid(msg) => AppError::ValidationError(msg),
        PredictionError::Upstream(msg) => AppError::ExternalService(msg),
        PredictionError::StorageError(msg) => AppError::Internal(msg),
    })?;

    let record = PredictionRecord {
        id: Uuid::new_v4(),
        owner_id: user.id,
        timestamp: Utc::now(),
        age: input.age,
        height: input.height,
        weight: input.weight,
        num_children: input.num_children,
        smoker: input.smoker,
        region: input.region,
        sex: input.sex,
        predicted_charges: prediction,
    };
    state
        .stores
        .predictions
        .record(record)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(PredictionResponse { prediction }))
}

#[axum::debug_handler]
pub async fn prediction_history(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
) -> Result<Json<Value>, AppError> {
    let records = state
        .stores
        .predictions
        .list_for_owner(user.id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({ "predictions": records })))
}

use std::sync::Arc;

use axum::{
    extract::{Extension, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde_json::{json, Value};

use shared_models::auth::SessionUser;
use shared_models::booking::format_slot;
use shared_models::error::AppError;

use crate::models::{
    BookAppointmentRequest, BookingError, ConfigureAvailabilityRequest, OpenSlotsQuery,
    OpenSlotsResponse,
};
use crate::services::availability::AvailabilityAdminService;
use crate::services::booking::BookingService;
use crate::services::slots::SlotQueryService;
use shared_store::AppState;

/// Open slots for a date, as the booking form polls while the user picks.
/// A missing or unparsable date is a normal empty result, not an error.
#[axum::debug_handler]
pub async fn open_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OpenSlotsQuery>,
) -> Result<Json<OpenSlotsResponse>, AppError> {
    let Some(date) = query.date.as_deref().and_then(|d| d.parse::<NaiveDate>().ok()) else {
        return Ok(Json(OpenSlotsResponse { times: Vec::new() }));
    };

    let service = SlotQueryService::new(&state);
    let times = service
        .open_slots(date)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .into_iter()
        .map(format_slot)
        .collect();

    Ok(Json(OpenSlotsResponse { times }))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let service = BookingService::new(&state);

    let appointment = service.book(user.id, request).await.map_err(|e| match e {
        BookingError::SlotUnavailable => AppError::Conflict(e.to_string()),
        BookingError::PastDate => AppError::BadRequest(e.to_string()),
        BookingError::InvalidDate(_)
        | BookingError::InvalidTime(_)
        | BookingError::InvalidReason(_) => AppError::ValidationError(e.to_string()),
        BookingError::StorageError(msg) => AppError::Internal(msg),
    })?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment,
        "message": "Appointment booked successfully"
    })))
}

#[axum::debug_handler]
pub async fn my_appointments(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<SessionUser>,
) -> Result<Json<Value>, AppError> {
    let service = BookingService::new(&state);

    let appointments = service
        .list_for_owner(user.id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({ "appointments": appointments })))
}

/// Staff upsert of a date's slot configuration.
#[axum::debug_handler]
pub async fn configure_availability(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConfigureAvailabilityRequest>,
) -> Result<Json<Value>, AppError> {
    let service = AvailabilityAdminService::new(&state);

    let availability = service.configure(request).await.map_err(|e| match e {
        BookingError::InvalidDate(_) | BookingError::InvalidTime(_) => {
            AppError::ValidationError(e.to_string())
        }
        other => AppError::Internal(other.to_string()),
    })?;

    Ok(Json(json!({
        "success": true,
        "date": availability.date,
        "slots": availability.slots.iter().copied().map(format_slot).collect::<Vec<_>>()
    })))
}

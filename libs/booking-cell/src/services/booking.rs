use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_models::booking::{parse_slot, Appointment, AppointmentReason};
use shared_store::{AppState, AppointmentStore, StoreError};

use crate::models::{BookAppointmentRequest, BookingError};
use crate::services::slots::SlotQueryService;

/// Validates a booking request against current availability and creates
/// the appointment, or rejects with the specific failed precondition.
pub struct BookingService {
    appointments: Arc<dyn AppointmentStore>,
    slot_query: SlotQueryService,
}

impl BookingService {
    pub fn new(state: &AppState) -> Self {
        Self {
            appointments: Arc::clone(&state.stores.appointments),
            slot_query: SlotQueryService::new(state),
        }
    }

    /// Book a slot for `owner_id`.
    ///
    /// The open-slot check reads a snapshot that can go stale before the
    /// write; the appointment store's atomic `create` is what actually
    /// prevents a double booking. A race lost there surfaces as the same
    /// `SlotUnavailable` rejection as a stale read, since the caller cannot
    /// tell them apart and need not.
    pub async fn book(
        &self,
        owner_id: Uuid,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, BookingError> {
        let (date, time, reason) = validate_request(&request)?;

        // Policy: today or later, "today" being the current UTC date.
        if date < Utc::now().date_naive() {
            return Err(BookingError::PastDate);
        }

        let open = self.slot_query.open_slots(date).await?;
        if !open.contains(&time) {
            debug!("Slot {} {} not open for booking", date, request.time);
            return Err(BookingError::SlotUnavailable);
        }

        let appointment = self
            .appointments
            .create(owner_id, date, time, reason)
            .await
            .map_err(|e| match e {
                StoreError::SlotTaken => {
                    warn!("Lost booking race for {} {}", date, request.time);
                    BookingError::SlotUnavailable
                }
                other => BookingError::StorageError(other.to_string()),
            })?;

        info!(
            "Appointment {} booked for {} at {} ({})",
            appointment.id, appointment.date, request.time, reason
        );
        Ok(appointment)
    }

    /// The owner's appointments, newest first.
    pub async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Appointment>, BookingError> {
        self.appointments
            .list_for_owner(owner_id)
            .await
            .map_err(|e| BookingError::StorageError(e.to_string()))
    }
}

fn validate_request(
    request: &BookAppointmentRequest,
) -> Result<(NaiveDate, NaiveTime, AppointmentReason), BookingError> {
    let date = request
        .date
        .parse::<NaiveDate>()
        .map_err(|_| BookingError::InvalidDate(request.date.clone()))?;

    let time = parse_slot(&request.time)
        .ok_or_else(|| BookingError::InvalidTime(request.time.clone()))?;

    let reason = request
        .reason
        .parse::<AppointmentReason>()
        .map_err(|_| BookingError::InvalidReason(request.reason.clone()))?;

    Ok((date, time, reason))
}

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use shared_store::{AppState, AppointmentStore, AvailabilityStore};

use crate::models::BookingError;

/// Read-only view over the availability and appointment stores.
///
/// Called every time a user picks a date in the booking form, so it must be
/// a pure read: no side effects, and an unconfigured date is an empty
/// result rather than an error.
pub struct SlotQueryService {
    availability: Arc<dyn AvailabilityStore>,
    appointments: Arc<dyn AppointmentStore>,
}

impl SlotQueryService {
    pub fn new(state: &AppState) -> Self {
        Self {
            availability: Arc::clone(&state.stores.availability),
            appointments: Arc::clone(&state.stores.appointments),
        }
    }

    /// Configured slots for `date` minus those already consumed by an
    /// appointment, in the configured display order.
    pub async fn open_slots(&self, date: NaiveDate) -> Result<Vec<NaiveTime>, BookingError> {
        let Some(availability) = self
            .availability
            .get(date)
            .await
            .map_err(|e| BookingError::StorageError(e.to_string()))?
        else {
            debug!("No availability configured for {}", date);
            return Ok(Vec::new());
        };

        let mut open = Vec::with_capacity(availability.slots.len());
        for slot in availability.slots {
            let taken = self
                .appointments
                .exists(date, slot)
                .await
                .map_err(|e| BookingError::StorageError(e.to_string()))?;
            if !taken {
                open.push(slot);
            }
        }

        Ok(open)
    }
}

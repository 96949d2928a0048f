use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tracing::info;

use shared_models::booking::{parse_slot, standard_slots, Availability};
use shared_store::{AppState, AvailabilityStore};

use crate::models::{BookingError, ConfigureAvailabilityRequest};

/// Staff-facing upsert of a date's slot configuration. The back-office UI
/// that drives this lives elsewhere; this is the seam it writes through.
pub struct AvailabilityAdminService {
    availability: Arc<dyn AvailabilityStore>,
}

impl AvailabilityAdminService {
    pub fn new(state: &AppState) -> Self {
        Self {
            availability: Arc::clone(&state.stores.availability),
        }
    }

    pub async fn configure(
        &self,
        request: ConfigureAvailabilityRequest,
    ) -> Result<Availability, BookingError> {
        let date = request
            .date
            .parse::<NaiveDate>()
            .map_err(|_| BookingError::InvalidDate(request.date.clone()))?;

        let vocabulary = standard_slots();
        let mut slots: Vec<NaiveTime> = Vec::with_capacity(request.slots.len());
        for raw in &request.slots {
            let slot = parse_slot(raw)
                .filter(|t| vocabulary.contains(t))
                .ok_or_else(|| BookingError::InvalidTime(raw.clone()))?;
            slots.push(slot);
        }

        let stored = self
            .availability
            .set(date, slots)
            .await
            .map_err(|e| BookingError::StorageError(e.to_string()))?;

        info!("Availability for {} configured with {} slots", date, stored.slots.len());
        Ok(stored)
    }
}

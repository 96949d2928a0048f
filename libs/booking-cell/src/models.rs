use serde::{Deserialize, Serialize};

use shared_models::booking::Appointment;

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

/// Booking form fields. Date, time and reason arrive as the strings the
/// form submitted; the service parses them so rejections can name the
/// offending field instead of surfacing a body-deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub date: String,
    pub time: String,
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub struct OpenSlotsQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenSlotsResponse {
    pub times: Vec<String>,
}

/// Staff upsert of a date's slot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigureAvailabilityRequest {
    pub date: String,
    pub slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub success: bool,
    pub appointment: Appointment,
    pub message: String,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid reason: {0}")]
    InvalidReason(String),

    #[error("Appointments must be for today or a future date")]
    PastDate,

    #[error("Slot no longer available, please pick another")]
    SlotUnavailable,

    #[error("Storage error: {0}")]
    StorageError(String),
}

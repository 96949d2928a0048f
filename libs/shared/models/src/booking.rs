use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hours offered for booking, on the hour. Shared by availability
/// configuration and booking validation so the vocabulary cannot drift.
pub const STANDARD_SLOT_HOURS: RangeInclusive<u32> = 9..=18;

/// The full slot vocabulary as time-of-day values, in display order.
pub fn standard_slots() -> Vec<NaiveTime> {
    STANDARD_SLOT_HOURS
        .filter_map(|h| NaiveTime::from_hms_opt(h, 0, 0))
        .collect()
}

/// Serialize slot times as "HH:MM", the form the booking UI exchanges.
pub mod slot_time {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Format a slot time the way the API presents it ("09:00").
pub fn format_slot(time: NaiveTime) -> String {
    time.format(slot_time::FORMAT).to_string()
}

/// Parse a client-supplied "HH:MM" value.
pub fn parse_slot(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, slot_time::FORMAT).ok()
}

/// The set of bookable slots configured for one calendar date.
///
/// At most one record exists per date; `slots` keeps the staff-configured
/// display order with duplicates removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Availability {
    pub date: NaiveDate,
    pub slots: Vec<NaiveTime>,
}

/// A booked appointment. Create-only: never mutated after creation,
/// removed only by an administrative action or an owner cascade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub date: NaiveDate,
    #[serde(with = "slot_time")]
    pub time: NaiveTime,
    pub reason: AppointmentReason,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AppointmentReason {
    Consultation,
    #[serde(rename = "Insurance Claim")]
    InsuranceClaim,
    #[serde(rename = "Policy Inquiry")]
    PolicyInquiry,
}

impl AppointmentReason {
    pub const ALL: [AppointmentReason; 3] = [
        AppointmentReason::Consultation,
        AppointmentReason::InsuranceClaim,
        AppointmentReason::PolicyInquiry,
    ];
}

impl fmt::Display for AppointmentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentReason::Consultation => write!(f, "Consultation"),
            AppointmentReason::InsuranceClaim => write!(f, "Insurance Claim"),
            AppointmentReason::PolicyInquiry => write!(f, "Policy Inquiry"),
        }
    }
}

impl FromStr for AppointmentReason {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Consultation" => Ok(AppointmentReason::Consultation),
            "Insurance Claim" => Ok(AppointmentReason::InsuranceClaim),
            "Policy Inquiry" => Ok(AppointmentReason::PolicyInquiry),
            _ => Err(()),
        }
    }
}

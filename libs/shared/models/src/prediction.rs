use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One charge-prediction run for a user, kept so the profile page can show
/// past estimates newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub age: u32,
    pub height: u32,
    pub weight: u32,
    pub num_children: u32,
    pub smoker: Smoker,
    pub region: Region,
    pub sex: Sex,
    pub predicted_charges: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Smoker {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Region {
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

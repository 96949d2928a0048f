use serde::{Deserialize, Serialize};

use shared_models::prediction::{Region, Sex, Smoker};

/// Scoring record for a charge estimate: the fixed feature set the
/// scoring function accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionInput {
    pub age: u32,
    /// Height in centimeters.
    pub height: u32,
    /// Weight in kilograms.
    pub weight: u32,
    pub num_children: u32,
    pub smoker: Smoker,
    pub region: Region,
    pub sex: Sex,
}

impl PredictionInput {
    /// BMI with zero-division protection, rounded to one decimal.
    pub fn bmi(&self) -> f64 {
        if self.height == 0 {
            return 0.0;
        }
        let meters = self.height as f64 / 100.0;
        let bmi = self.weight as f64 / (meters * meters);
        (bmi * 10.0).round() / 10.0
    }

    /// Field-level validation; a well-formed record never fails scoring.
    pub fn validate(&self) -> Result<(), PredictionError> {
        if self.age == 0 || self.age > 120 {
            return Err(PredictionError::Invalid("age must be between 1 and 120".to_string()));
        }
        if self.height == 0 {
            return Err(PredictionError::Invalid("height must be positive".to_string()));
        }
        if self.weight == 0 {
            return Err(PredictionError::Invalid("weight must be positive".to_string()));
        }
        if self.num_children > 20 {
            return Err(PredictionError::Invalid("num_children is implausibly large".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    #[error("Invalid scoring input: {0}")]
    Invalid(String),

    #[error("Scoring service error: {0}")]
    Upstream(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

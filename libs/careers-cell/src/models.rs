use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_experience")]
    pub experience: String,
}

fn default_location() -> String {
    "Remote".to_string()
}

fn default_experience() -> String {
    "Not specified".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub job_id: u64,
    #[serde(default)]
    pub cover_letter: String,
}

impl ApplicationForm {
    pub fn validate(&self) -> Result<(), CareersError> {
        if self.name.trim().is_empty() {
            return Err(CareersError::Invalid("name must not be empty".to_string()));
        }
        if !self.email.contains('@') {
            return Err(CareersError::Invalid("email is not valid".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CareersError {
    #[error("Invalid application: {0}")]
    Invalid(String),

    #[error("Job not found")]
    JobNotFound,
}

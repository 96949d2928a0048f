use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::Invalid("name must not be empty".to_string()));
        }
        if !self.email.contains('@') {
            return Err(ContactError::Invalid("email is not valid".to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::Invalid("message must not be empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Invalid contact form: {0}")]
    Invalid(String),

    #[error("Message not found")]
    NotFound,
}

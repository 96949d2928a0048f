use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message submitted through the public contact form. Staff read the
/// inbox and delete a message once it is dealt with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

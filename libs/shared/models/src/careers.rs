use serde::{Deserialize, Serialize};

/// A published job listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Job {
    pub job_id: u64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub experience: String,
}

/// An application submitted for a listing. Resume upload is handled by
/// a separate document service and is not part of this record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobApplication {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub job_id: u64,
    pub cover_letter: String,
}

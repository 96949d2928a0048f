pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::booking::{Appointment, AppointmentReason, Availability};
use shared_models::careers::{Job, JobApplication};
use shared_models::contact::ContactMessage;
use shared_models::prediction::PredictionRecord;

use crate::memory::{
    InMemoryAppointmentStore, InMemoryAvailabilityStore, InMemoryContactMessageStore,
    InMemoryJobStore, InMemoryPredictionStore,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The (date, time) slot already holds an appointment.
    #[error("slot already booked")]
    SlotTaken,

    #[error("record not found")]
    NotFound,

    #[error("invalid record: {0}")]
    Invalid(String),
}

/// Per-date slot configuration. `set` is an idempotent upsert keyed by
/// date; replacing with an empty list is the only form of removal.
#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    async fn get(&self, date: NaiveDate) -> Result<Option<Availability>, StoreError>;
    async fn set(&self, date: NaiveDate, slots: Vec<NaiveTime>) -> Result<Availability, StoreError>;
}

/// Booked appointments. `create` must be atomic with respect to the
/// uniqueness of (date, time): of two concurrent calls for the same slot,
/// exactly one succeeds and the other sees `StoreError::SlotTaken`.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn create(
        &self,
        owner_id: Uuid,
        date: NaiveDate,
        time: NaiveTime,
        reason: AppointmentReason,
    ) -> Result<Appointment, StoreError>;

    /// The owner's appointments, newest first.
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Appointment>, StoreError>;

    async fn exists(&self, date: NaiveDate, time: NaiveTime) -> Result<bool, StoreError>;

    /// Cascade used when a user account is removed. Returns how many
    /// appointments were deleted.
    async fn delete_for_owner(&self, owner_id: Uuid) -> Result<usize, StoreError>;
}

#[async_trait]
pub trait ContactMessageStore: Send + Sync {
    async fn create(
        &self,
        name: String,
        email: String,
        message: String,
    ) -> Result<ContactMessage, StoreError>;

    /// The inbox, newest first.
    async fn list(&self) -> Result<Vec<ContactMessage>, StoreError>;

    async fn delete(&self, id: u64) -> Result<(), StoreError>;
}

#[async_trait]
pub trait JobStore: Send + Sync {
    async fn create_job(
        &self,
        title: String,
        description: String,
        location: String,
        experience: String,
    ) -> Result<Job, StoreError>;

    async fn list_jobs(&self) -> Result<Vec<Job>, StoreError>;

    async fn get_job(&self, job_id: u64) -> Result<Option<Job>, StoreError>;

    async fn create_application(
        &self,
        name: String,
        email: String,
        job_id: u64,
        cover_letter: String,
    ) -> Result<JobApplication, StoreError>;
}

#[async_trait]
pub trait PredictionStore: Send + Sync {
    async fn record(&self, record: PredictionRecord) -> Result<(), StoreError>;

    /// The owner's prediction history, newest first.
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<PredictionRecord>, StoreError>;
}

/// The storage tables behind the application, behind trait objects so the
/// in-memory engine can be swapped for a database-backed one.
#[derive(Clone)]
pub struct Stores {
    pub availability: Arc<dyn AvailabilityStore>,
    pub appointments: Arc<dyn AppointmentStore>,
    pub messages: Arc<dyn ContactMessageStore>,
    pub jobs: Arc<dyn JobStore>,
    pub predictions: Arc<dyn PredictionStore>,
}

impl Stores {
    pub fn in_memory() -> Self {
        Self {
            availability: Arc::new(InMemoryAvailabilityStore::new()),
            appointments: Arc::new(InMemoryAppointmentStore::new()),
            messages: Arc::new(InMemoryContactMessageStore::new()),
            jobs: Arc::new(InMemoryJobStore::new()),
            predictions: Arc::new(InMemoryPredictionStore::new()),
        }
    }
}

/// Shared axum state: configuration plus the storage tables.
pub struct AppState {
    pub config: AppConfig,
    pub stores: Stores,
}

impl AppState {
    pub fn new(config: AppConfig, stores: Stores) -> Self {
        Self { config, stores }
    }
}

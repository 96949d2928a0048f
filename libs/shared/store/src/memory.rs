use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

use shared_models::booking::{Appointment, AppointmentReason, Availability};
use shared_models::careers::{Job, JobApplication};
use shared_models::contact::ContactMessage;
use shared_models::prediction::PredictionRecord;

use crate::{
    AppointmentStore, AvailabilityStore, ContactMessageStore, JobStore, PredictionStore,
    StoreError,
};

// ==============================================================================
// AVAILABILITY
// ==============================================================================

pub struct InMemoryAvailabilityStore {
    records: RwLock<BTreeMap<NaiveDate, Vec<NaiveTime>>>,
}

impl InMemoryAvailabilityStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryAvailabilityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AvailabilityStore for InMemoryAvailabilityStore {
    async fn get(&self, date: NaiveDate) -> Result<Option<Availability>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .get(&date)
            .map(|slots| Availability { date, slots: slots.clone() }))
    }

    async fn set(&self, date: NaiveDate, slots: Vec<NaiveTime>) -> Result<Availability, StoreError> {
        // Duplicates are meaningless in a slot set; keep first-seen order.
        let mut deduped = Vec::with_capacity(slots.len());
        for slot in slots {
            if !deduped.contains(&slot) {
                deduped.push(slot);
            }
        }

        let mut records = self.records.write().await;
        records.insert(date, deduped.clone());
        debug!("Availability for {} set to {} slots", date, deduped.len());

        Ok(Availability { date, slots: deduped })
    }
}

// ==============================================================================
// APPOINTMENTS
// ==============================================================================

struct AppointmentTable {
    /// Uniqueness index over (date, time). Checked and updated under the
    /// same lock as `rows`, which is what makes `create` atomic.
    by_slot: HashMap<(NaiveDate, NaiveTime), Uuid>,
    /// Insertion order; newest entries at the back.
    rows: Vec<Appointment>,
}

pub struct InMemoryAppointmentStore {
    table: Mutex<AppointmentTable>,
}

impl InMemoryAppointmentStore {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(AppointmentTable {
                by_slot: HashMap::new(),
                rows: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryAppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppointmentStore for InMemoryAppointmentStore {
    async fn create(
        &self,
        owner_id: Uuid,
        date: NaiveDate,
        time: NaiveTime,
        reason: AppointmentReason,
    ) -> Result<Appointment, StoreError> {
        let mut table = self.table.lock().await;

        if table.by_slot.contains_key(&(date, time)) {
            debug!("Slot {} {} already booked", date, time.format("%H:%M"));
            return Err(StoreError::SlotTaken);
        }

        let appointment = Appointment {
            id: Uuid::new_v4(),
            owner_id,
            date,
            time,
            reason,
            created_at: Utc::now(),
        };

        table.by_slot.insert((date, time), appointment.id);
        table.rows.push(appointment.clone());

        Ok(appointment)
    }

    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Appointment>, StoreError> {
        let table = self.table.lock().await;
        Ok(table
            .rows
            .iter()
            .rev()
            .filter(|apt| apt.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn exists(&self, date: NaiveDate, time: NaiveTime) -> Result<bool, StoreError> {
        let table = self.table.lock().await;
        Ok(table.by_slot.contains_key(&(date, time)))
    }

    async fn delete_for_owner(&self, owner_id: Uuid) -> Result<usize, StoreError> {
        let mut table = self.table.lock().await;
        let removed: Vec<(NaiveDate, NaiveTime)> = table
            .rows
            .iter()
            .filter(|apt| apt.owner_id == owner_id)
            .map(|apt| (apt.date, apt.time))
            .collect();
        for key in &removed {
            table.by_slot.remove(key);
        }
        table.rows.retain(|apt| apt.owner_id != owner_id);
        Ok(removed.len())
    }
}

// ==============================================================================
// CONTACT MESSAGES
// ==============================================================================

struct MessageTable {
    next_id: u64,
    rows: Vec<ContactMessage>,
}

pub struct InMemoryContactMessageStore {
    table: Mutex<MessageTable>,
}

impl InMemoryContactMessageStore {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(MessageTable { next_id: 1, rows: Vec::new() }),
        }
    }
}

impl Default for InMemoryContactMessageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactMessageStore for InMemoryContactMessageStore {
    async fn create(
        &self,
        name: String,
        email: String,
        message: String,
    ) -> Result<ContactMessage, StoreError> {
        let mut table = self.table.lock().await;
        let record = ContactMessage {
            id: table.next_id,
            name,
            email,
            message,
            submitted_at: Utc::now(),
        };
        table.next_id += 1;
        table.rows.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, StoreError> {
        let table = self.table.lock().await;
        Ok(table.rows.iter().rev().cloned().collect())
    }

    async fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut table = self.table.lock().await;
        let before = table.rows.len();
        table.rows.retain(|msg| msg.id != id);
        if table.rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

// ==============================================================================
// JOBS AND APPLICATIONS
// ==============================================================================

struct JobTable {
    next_job_id: u64,
    next_application_id: u64,
    jobs: Vec<Job>,
    applications: Vec<JobApplication>,
}

pub struct InMemoryJobStore {
    table: Mutex<JobTable>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(JobTable {
                next_job_id: 1,
                next_application_id: 1,
                jobs: Vec::new(),
                applications: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryJobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn create_job(
        &self,
        title: String,
        description: String,
        location: String,
        experience: String,
    ) -> Result<Job, StoreError> {
        let mut table = self.table.lock().await;
        let job = Job {
            job_id: table.next_job_id,
            title,
            description,
            location,
            experience,
        };
        table.next_job_id += 1;
        table.jobs.push(job.clone());
        Ok(job)
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, StoreError> {
        let table = self.table.lock().await;
        Ok(table.jobs.clone())
    }

    async fn get_job(&self, job_id: u64) -> Result<Option<Job>, StoreError> {
        let table = self.table.lock().await;
        Ok(table.jobs.iter().find(|job| job.job_id == job_id).cloned())
    }

    async fn create_application(
        &self,
        name: String,
        email: String,
        job_id: u64,
        cover_letter: String,
    ) -> Result<JobApplication, StoreError> {
        let mut table = self.table.lock().await;
        if !table.jobs.iter().any(|job| job.job_id == job_id) {
            return Err(StoreError::NotFound);
        }
        let application = JobApplication {
            id: table.next_application_id,
            name,
            email,
            job_id,
            cover_letter,
        };
        table.next_application_id += 1;
        table.applications.push(application.clone());
        Ok(application)
    }
}

// ==============================================================================
// PREDICTION HISTORY
// ==============================================================================

pub struct InMemoryPredictionStore {
    rows: Mutex<Vec<PredictionRecord>>,
}

impl InMemoryPredictionStore {
    pub fn new() -> Self {
        Self { rows: Mutex::new(Vec::new()) }
    }
}

impl Default for InMemoryPredictionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionStore for InMemoryPredictionStore {
    async fn record(&self, record: PredictionRecord) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().await;
        rows.push(record);
        Ok(())
    }

    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<PredictionRecord>, StoreError> {
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .rev()
            .filter(|rec| rec.owner_id == owner_id)
            .cloned()
            .collect())
    }
}

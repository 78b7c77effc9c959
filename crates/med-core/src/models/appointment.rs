//! Appointment entity - a booked timeslot between a patient and a doctor.

use crate::AppointmentStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A booking made by a patient against a doctor. Both sides must reference
/// existing users; the store's foreign keys enforce that. Once created, the
/// booking itself is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    /// Scheduled point in time, passed through verbatim from the client
    pub timeslot: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Create a new appointment in the default PENDING status
    pub fn new(patient_id: Uuid, doctor_id: Uuid, timeslot: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            patient_id,
            doctor_id,
            timeslot,
            status: AppointmentStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

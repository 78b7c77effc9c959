//! Read model for a doctor's schedule listing.

use crate::AppointmentStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An appointment joined with the referenced patient's display name, most
/// recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorAppointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub timeslot: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub patient_name: String,
}

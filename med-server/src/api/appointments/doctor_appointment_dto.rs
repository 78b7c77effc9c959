use med_core::DoctorAppointment;

use serde::Serialize;

/// Schedule entry DTO: an appointment plus the patient's display name
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorAppointmentDto {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub timeslot: String,
    pub status: String,
    pub created_at: i64,
    pub patient_name: String,
}

impl From<DoctorAppointment> for DoctorAppointmentDto {
    fn from(a: DoctorAppointment) -> Self {
        Self {
            id: a.id.to_string(),
            patient_id: a.patient_id.to_string(),
            doctor_id: a.doctor_id.to_string(),
            timeslot: a.timeslot,
            status: a.status.as_str().to_string(),
            created_at: a.created_at.timestamp(),
            patient_name: a.patient_name,
        }
    }
}

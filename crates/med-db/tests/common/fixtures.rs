#![allow(dead_code)]

use chrono::{Duration, Utc};
use med_core::{Appointment, AppointmentStatus, Medicine, Prescription};
use uuid::Uuid;

/// Creates a test Appointment with sensible defaults
pub fn create_test_appointment(patient_id: Uuid, doctor_id: Uuid) -> Appointment {
    Appointment::new(patient_id, doctor_id, "2024-05-01T10:00Z".to_string())
}

/// Creates a test Appointment with a custom creation-time offset, for
/// ordering assertions
pub fn create_test_appointment_at(
    patient_id: Uuid,
    doctor_id: Uuid,
    seconds_offset: i64,
) -> Appointment {
    let at = Utc::now() + Duration::seconds(seconds_offset);
    Appointment {
        id: Uuid::new_v4(),
        patient_id,
        doctor_id,
        timeslot: "2024-05-01T10:00Z".to_string(),
        status: AppointmentStatus::Pending,
        created_at: at,
        updated_at: at,
    }
}

/// A single-entry medicine list
pub fn create_test_medicines() -> Vec<Medicine> {
    vec![Medicine {
        name: "Paracetamol".to_string(),
        dosage: Some("500mg".to_string()),
        frequency: Some("twice daily".to_string()),
        duration: Some("5 days".to_string()),
        instructions: Some("after food".to_string()),
    }]
}

/// Creates a test Prescription with sensible defaults
pub fn create_test_prescription(
    appointment_id: Uuid,
    patient_id: Uuid,
    doctor_id: Uuid,
) -> Prescription {
    Prescription::new(
        appointment_id,
        patient_id,
        doctor_id,
        create_test_medicines(),
        "Plenty of fluids".to_string(),
    )
}

/// Creates a test Prescription with a custom creation-time offset
pub fn create_test_prescription_at(
    appointment_id: Uuid,
    patient_id: Uuid,
    doctor_id: Uuid,
    seconds_offset: i64,
) -> Prescription {
    let at = Utc::now() + Duration::seconds(seconds_offset);
    let mut prescription = create_test_prescription(appointment_id, patient_id, doctor_id);
    prescription.created_at = at;
    prescription.updated_at = at;
    prescription
}

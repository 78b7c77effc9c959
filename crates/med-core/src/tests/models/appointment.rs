use crate::{Appointment, AppointmentStatus};

use uuid::Uuid;

#[test]
fn test_new_appointment_defaults() {
    let patient_id = Uuid::new_v4();
    let doctor_id = Uuid::new_v4();

    let appointment = Appointment::new(
        patient_id,
        doctor_id,
        "2024-05-01T10:00Z".to_string(),
    );

    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert_eq!(appointment.patient_id, patient_id);
    assert_eq!(appointment.doctor_id, doctor_id);
    assert_eq!(appointment.created_at, appointment.updated_at);
}

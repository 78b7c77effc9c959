use crate::AppointmentStatus;

use std::str::FromStr;

#[test]
fn test_appointment_status_as_str() {
    assert_eq!(AppointmentStatus::Pending.as_str(), "PENDING");
    assert_eq!(AppointmentStatus::Completed.as_str(), "COMPLETED");
    assert_eq!(AppointmentStatus::Cancelled.as_str(), "CANCELLED");
}

#[test]
fn test_appointment_status_from_str() {
    assert_eq!(
        AppointmentStatus::from_str("PENDING").unwrap(),
        AppointmentStatus::Pending
    );
    assert_eq!(
        AppointmentStatus::from_str("COMPLETED").unwrap(),
        AppointmentStatus::Completed
    );
    assert_eq!(
        AppointmentStatus::from_str("CANCELLED").unwrap(),
        AppointmentStatus::Cancelled
    );
    assert!(AppointmentStatus::from_str("invalid").is_err());
}

#[test]
fn test_appointment_status_default() {
    assert_eq!(AppointmentStatus::default(), AppointmentStatus::Pending);
}

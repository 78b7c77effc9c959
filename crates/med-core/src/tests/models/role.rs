use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Unknown.as_str(), "UNKNOWN");
    assert_eq!(Role::Patient.as_str(), "PATIENT");
    assert_eq!(Role::Doctor.as_str(), "DOCTOR");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("UNKNOWN").unwrap(), Role::Unknown);
    assert_eq!(Role::from_str("PATIENT").unwrap(), Role::Patient);
    assert_eq!(Role::from_str("DOCTOR").unwrap(), Role::Doctor);
    assert!(Role::from_str("ADMIN").is_err());
    assert!(Role::from_str("patient").is_err());
}

#[test]
fn test_role_default() {
    assert_eq!(Role::default(), Role::Unknown);
}

#[test]
fn test_role_assignability() {
    assert!(!Role::Unknown.is_assignable());
    assert!(Role::Patient.is_assignable());
    assert!(Role::Doctor.is_assignable());
}

use crate::{Role, User};

#[test]
fn test_new_user_starts_unknown() {
    let user = User::new("+15551234567".to_string(), "New User".to_string());

    assert_eq!(user.role, Role::Unknown);
    assert_eq!(user.phone_number, "+15551234567");
    assert_eq!(user.name, "New User");
    assert!(!user.is_onboarded());
}

#[test]
fn test_onboarded_after_role_assignment() {
    let mut user = User::new("+15551234567".to_string(), "New User".to_string());
    user.role = Role::Patient;

    assert!(user.is_onboarded());
}

#[test]
fn test_new_users_get_distinct_ids() {
    let a = User::new("+15550000001".to_string(), "New User".to_string());
    let b = User::new("+15550000002".to_string(), "New User".to_string());

    assert_ne!(a.id, b.id);
}

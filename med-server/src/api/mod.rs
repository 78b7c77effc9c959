pub mod appointments;
pub mod auth;
pub mod doctors;
pub mod error;
pub mod prescriptions;

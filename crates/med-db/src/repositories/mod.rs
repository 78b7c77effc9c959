pub mod appointment_repository;
pub mod doctor_repository;
pub mod prescription_repository;
pub mod user_repository;

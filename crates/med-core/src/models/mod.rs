pub mod appointment;
pub mod appointment_status;
pub mod doctor;
pub mod doctor_appointment;
pub mod medicine;
pub mod prescription;
pub mod role;
pub mod user;

pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::appointment::Appointment;
pub use models::appointment_status::AppointmentStatus;
pub use models::doctor::Doctor;
pub use models::doctor_appointment::DoctorAppointment;
pub use models::medicine::Medicine;
pub use models::prescription::Prescription;
pub use models::role::Role;
pub use models::user::User;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;

pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::appointment_repository::AppointmentRepository;
pub use repositories::doctor_repository::DoctorRepository;
pub use repositories::prescription_repository::PrescriptionRepository;
pub use repositories::user_repository::UserRepository;

pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    appointments::{
        appointment_dto::AppointmentDto,
        appointment_response::AppointmentResponse,
        appointments::{book_appointment, list_doctor_appointments},
        book_appointment_request::BookAppointmentRequest,
        doctor_appointment_dto::DoctorAppointmentDto,
    },
    auth::{
        auth::{set_role, verify_otp},
        set_role_request::SetRoleRequest,
        set_role_response::SetRoleResponse,
        user_dto::UserDto,
        verify_otp_request::VerifyOtpRequest,
        verify_otp_response::VerifyOtpResponse,
    },
    doctors::{doctor_dto::DoctorDto, doctors::list_doctors},
    error::ApiError,
    error::Result as ApiResult,
    prescriptions::{
        create_prescription_request::CreatePrescriptionRequest,
        prescription_dto::PrescriptionDto,
        prescription_response::PrescriptionResponse,
        prescriptions::{create_prescription, list_patient_prescriptions},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;

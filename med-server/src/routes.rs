use crate::health;
use crate::{
    AppState, book_appointment, create_prescription, list_doctor_appointments, list_doctors,
    list_patient_prescriptions, set_role, verify_otp,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Identity gateway
        .route("/api/auth/verify-otp", post(verify_otp))
        .route("/api/auth/set-role", post(set_role))
        // Scheduling
        .route("/api/doctors", get(list_doctors))
        .route(
            "/api/appointments/doctor/{doctor_id}",
            get(list_doctor_appointments),
        )
        .route("/api/appointments/book", post(book_appointment))
        // Prescriptions
        .route("/api/prescriptions/create", post(create_prescription))
        .route(
            "/api/prescriptions/patient/{patient_id}",
            get(list_patient_prescriptions),
        )
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware (the mobile client is cross-origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

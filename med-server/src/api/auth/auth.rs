//! Identity REST API handlers
//!
//! The login gateway: OTP token verification with first-time-user
//! detection, and the one-shot role assignment that finishes onboarding.

use crate::{
    ApiError, ApiResult, AppState, SetRoleRequest, SetRoleResponse, VerifyOtpRequest,
    VerifyOtpResponse,
};

use med_core::Role;
use med_db::UserRepository;

use std::panic::Location;
use std::str::FromStr;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// Placeholder name for users created by their first login
const NEW_USER_NAME: &str = "New User";

/// POST /api/auth/verify-otp
///
/// Verify an ID token with the oracle and resolve the user it identifies,
/// creating the row on first contact.
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(req): Json<VerifyOtpRequest>,
) -> ApiResult<Json<VerifyOtpResponse>> {
    // 1. Validate before touching the oracle or storage
    if req.id_token.is_empty() {
        return Err(ApiError::missing_field("idToken"));
    }

    // 2. The oracle is the only trusted source of phone numbers
    let identity = state.verifier.verify(&req.id_token).await?;

    // 3. Resolve or create; the store's unique constraint arbitrates
    //    concurrent first logins
    let repo = UserRepository::new(state.pool.clone());
    let (user, is_new_user) = repo
        .find_or_create_by_phone(&identity.phone_number, NEW_USER_NAME)
        .await?;

    log::info!(
        "Login: user {} (role {}, new: {})",
        user.id,
        user.role,
        is_new_user
    );

    Ok(Json(VerifyOtpResponse {
        user: user.into(),
        is_new_user,
    }))
}

/// POST /api/auth/set-role
///
/// Overwrite the user's role and name. Re-invocation is permitted; absence
/// of the user is an error, never a silent no-op.
pub async fn set_role(
    State(state): State<AppState>,
    Json(req): Json<SetRoleRequest>,
) -> ApiResult<Json<SetRoleResponse>> {
    // 1. Validate all fields before any storage call
    if req.phone_number.is_empty() {
        return Err(ApiError::missing_field("phoneNumber"));
    }
    if req.role.is_empty() {
        return Err(ApiError::missing_field("role"));
    }
    if req.name.is_empty() {
        return Err(ApiError::missing_field("name"));
    }

    let role = Role::from_str(&req.role).map_err(|_| ApiError::Validation {
        message: format!("Invalid role: {}", req.role),
        field: Some("role".into()),
        location: ErrorLocation::from(Location::caller()),
    })?;
    if !role.is_assignable() {
        return Err(ApiError::Validation {
            message: "Role must be PATIENT or DOCTOR".to_string(),
            field: Some("role".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 2. Update by phone number
    let repo = UserRepository::new(state.pool.clone());
    let rows = repo
        .update_role_and_name(&req.phone_number, role, &req.name)
        .await?;
    if rows == 0 {
        return Err(ApiError::NotFound {
            message: "No user with that phone number".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 3. Return the updated record as confirmation
    let user = repo
        .find_by_phone(&req.phone_number)
        .await?
        .ok_or_else(|| ApiError::Internal {
            message: "User missing after role update".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::info!("Role assigned: user {} is now {}", user.id, user.role);

    Ok(Json(SetRoleResponse { user: user.into() }))
}

//! Authentication handlers
//!
//! Phone number OTP login endpoints.

use axum::{extract::State, Json};
use tube_service::{AuthResponse, AuthService, OtpResponse, SendOtpRequest, VerifyOtpRequest};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Request an OTP code for a phone number
///
/// POST /api/v1/auth/send-otp
pub async fn send_otp(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SendOtpRequest>,
) -> ApiResult<Json<OtpResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.send_otp(request).await?;
    Ok(Json(response))
}

/// Verify an OTP code and receive a bearer token
///
/// POST /api/v1/auth/verify-otp
pub async fn verify_otp(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VerifyOtpRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.verify_otp(request).await?;
    Ok(Json(response))
}

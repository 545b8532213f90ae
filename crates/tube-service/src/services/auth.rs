//! Authentication service
//!
//! Phone/OTP sign-in. Requesting a code replaces any previous one for the
//! phone; verifying consumes the code atomically, creates the account on
//! first sight, and issues a bearer token.

use chrono::Utc;
use tracing::{info, instrument, warn};

use tube_core::{generate_otp_code, OtpEntry, PhoneNumber};

use crate::dto::{AuthResponse, OtpResponse, SendOtpRequest, UserResponse, VerifyOtpRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a fresh one-time code and attempt SMS delivery.
    ///
    /// Delivery failure is never fatal: the stored code stays valid and
    /// issuance still succeeds. In development the code is additionally
    /// surfaced in the response so local flows work without a provider.
    #[instrument(skip(self, request))]
    pub async fn send_otp(&self, request: SendOtpRequest) -> ServiceResult<OtpResponse> {
        let phone = PhoneNumber::parse(&request.phone_number)?;

        let code = generate_otp_code();
        let entry = OtpEntry::new(
            phone.clone(),
            code.clone(),
            Utc::now(),
            self.ctx.otp_ttl_secs(),
        );
        self.ctx.otp_repo().replace(&entry).await?;

        let sent = match self.ctx.notifier().send_otp(&phone, &code).await {
            Ok(sent) => sent,
            Err(e) => {
                warn!(error = %e, "SMS delivery failed, stored code remains valid");
                false
            }
        };

        let dev_otp = (!sent && self.ctx.is_dev_mode()).then_some(code);

        info!(sent, "OTP issued");
        Ok(OtpResponse { sent, dev_otp })
    }

    /// Verify a code and sign the user in.
    ///
    /// Wrong code, expired code, and already-used code are all the same
    /// rejection; the caller learns nothing about which it was.
    #[instrument(skip(self, request))]
    pub async fn verify_otp(&self, request: VerifyOtpRequest) -> ServiceResult<AuthResponse> {
        let phone = PhoneNumber::parse(&request.phone_number)?;

        let consumed = self
            .ctx
            .otp_repo()
            .consume(&phone, &request.code, Utc::now())
            .await?;

        if !consumed {
            return Err(ServiceError::from(tube_core::DomainError::OtpRejected));
        }

        let user = self.ctx.user_repo().find_or_create(&phone).await?;
        let token = self.ctx.jwt_service().issue_token(user.id, user.role)?;

        info!(user_id = %user.id, "user signed in");
        Ok(AuthResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.ctx.jwt_service().token_expiry(),
            user: UserResponse::from(user),
        })
    }

    /// Delete expired and consumed codes. Returns how many went away.
    #[instrument(skip(self))]
    pub async fn sweep_expired_otps(&self) -> ServiceResult<u64> {
        let removed = self.ctx.otp_repo().sweep(Utc::now()).await?;
        if removed > 0 {
            info!(removed, "swept stale OTP entries");
        }
        Ok(removed)
    }
}

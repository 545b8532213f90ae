//! Fast2SMS client
//!
//! Delivery is best-effort: without an API key the client reports the
//! send as skipped (`Ok(false)`) so development environments work with
//! no provider account. The code is then surfaced through the dev-only
//! response field instead.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use tube_core::traits::Notifier;
use tube_core::{DomainError, PhoneNumber};

const FAST2SMS_URL: &str = "https://www.fast2sms.com/dev/bulkV2";

#[derive(Debug, Deserialize)]
struct Fast2SmsResponse {
    #[serde(rename = "return")]
    accepted: bool,
    #[serde(default)]
    message: Vec<String>,
}

/// Fast2SMS implementation of Notifier
#[derive(Clone)]
pub struct Fast2SmsClient {
    http: Client,
    api_key: Option<String>,
}

impl Fast2SmsClient {
    /// Create a new client. With `api_key` unset, sends are skipped.
    #[must_use]
    pub fn new(http: Client, api_key: Option<String>) -> Self {
        Self { http, api_key }
    }
}

#[async_trait]
impl Notifier for Fast2SmsClient {
    #[instrument(skip(self, code), fields(phone = %phone))]
    async fn send_otp(&self, phone: &PhoneNumber, code: &str) -> Result<bool, DomainError> {
        let Some(api_key) = &self.api_key else {
            warn!("no SMS API key configured, skipping delivery");
            return Ok(false);
        };

        // Fast2SMS wants the bare national number
        let number = phone.as_str().trim_start_matches('+');

        let response = self
            .http
            .post(FAST2SMS_URL)
            .header("authorization", api_key)
            .form(&[
                ("route", "otp"),
                ("variables_values", code),
                ("numbers", number),
            ])
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("fast2sms request failed: {e}")))?;

        let status = response.status();
        let body: Fast2SmsResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Upstream(format!("fast2sms response invalid: {e}")))?;

        if !status.is_success() || !body.accepted {
            return Err(DomainError::Upstream(format!(
                "fast2sms rejected send: {}",
                body.message.join("; ")
            )));
        }

        info!("OTP delivered via SMS");
        Ok(true)
    }
}

impl std::fmt::Debug for Fast2SmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fast2SmsClient")
            .field("configured", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

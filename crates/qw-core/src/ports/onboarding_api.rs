//! Onboarding API port
//!
//! The remote authority for onboarding progress. Every mutation is validated
//! server side; the client only mirrors the step the API reports.

use async_trait::async_trait;
use thiserror::Error;

use crate::onboarding::{
    AccessToken, ClaimReceipt, OnboardingStatus, OnboardingToken, Password, VerificationCode,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Credential missing, invalid, or expired.
    #[error("unauthorized")]
    Unauthorized { detail: Option<String> },

    /// The API refused the request (validation, wrong step, wrong code, ...).
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Human-readable detail supplied by the API, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { detail } | ApiError::Rejected { detail, .. } => {
                detail.as_deref()
            }
            _ => None,
        }
    }

    pub fn into_detail(self) -> Option<String> {
        match self {
            ApiError::Unauthorized { detail } | ApiError::Rejected { detail, .. } => detail,
            _ => None,
        }
    }
}

#[async_trait]
pub trait OnboardingApiPort: Send + Sync {
    /// Claim a pre-created account by name. Unauthenticated.
    async fn claim(&self, first_name: &str, last_name: &str) -> Result<ClaimReceipt, ApiError>;

    /// Current step and known profile fields.
    async fn status(&self, token: &OnboardingToken) -> Result<OnboardingStatus, ApiError>;

    /// Store the email and send a verification code to it.
    async fn submit_email(&self, token: &OnboardingToken, email: &str) -> Result<(), ApiError>;

    async fn verify_code(
        &self,
        token: &OnboardingToken,
        code: &VerificationCode,
    ) -> Result<(), ApiError>;

    async fn resend_code(&self, token: &OnboardingToken) -> Result<(), ApiError>;

    /// Finish onboarding; returns the long-lived session credential.
    async fn set_password(
        &self,
        token: &OnboardingToken,
        password: &Password,
    ) -> Result<AccessToken, ApiError>;
}

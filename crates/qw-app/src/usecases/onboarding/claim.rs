use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use qw_core::onboarding::validation::normalize_claim_name;
use qw_core::ports::OnboardingApiPort;
use qw_core::{OnboardingError, OnboardingToken, Route};

use crate::session::SessionContext;

const CLAIM_FALLBACK: &str = "No account found with that name";

#[derive(Debug, thiserror::Error)]
pub enum ClaimAccountError {
    /// Shown inline on the claim form.
    #[error(transparent)]
    Rejected(#[from] OnboardingError),
    #[error("credential store failed: {0}")]
    Store(#[source] anyhow::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimedAccount {
    pub first_name: String,
    /// Where to go next; always the onboarding wizard.
    pub next: Route,
}

/// Claim a pre-created account by name and open an onboarding session.
///
/// 按姓名认领预创建账户，并开启引导会话。
pub struct ClaimAccount {
    api: Arc<dyn OnboardingApiPort>,
    session: Arc<SessionContext>,
}

impl ClaimAccount {
    pub fn new(api: Arc<dyn OnboardingApiPort>, session: Arc<SessionContext>) -> Self {
        Self { api, session }
    }

    pub async fn execute(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<ClaimedAccount, ClaimAccountError> {
        let span = info_span!("usecase.claim_account.execute");
        async {
            let (first_name, last_name) = normalize_claim_name(first_name, last_name)?;

            let receipt = self
                .api
                .claim(&first_name, &last_name)
                .await
                .map_err(|err| {
                    warn!(error = %err, "claim account failed");
                    OnboardingError::remote(err.into_detail(), CLAIM_FALLBACK)
                })?;

            let token = OnboardingToken::new(receipt.onboarding_token);
            if token.is_empty() {
                warn!("claim response carried no onboarding token");
                return Err(OnboardingError::remote(None, CLAIM_FALLBACK).into());
            }

            self.session
                .begin_onboarding(&token)
                .await
                .map_err(ClaimAccountError::Store)?;
            info!("account claimed, onboarding session opened");

            Ok(ClaimedAccount {
                first_name: receipt.first_name.unwrap_or(first_name),
                next: Route::Onboarding,
            })
        }
        .instrument(span)
        .await
    }
}

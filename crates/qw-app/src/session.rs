//! Session credentials.
//!
//! 会话凭据：引导令牌仅在本次运行内有效，访问令牌持久化保存。

use std::sync::Arc;

use qw_core::ports::{AccessTokenStorePort, OnboardingTokenStorePort};
use qw_core::{AccessToken, OnboardingToken};
use tracing::debug;

/// Access to the two credentials the onboarding flow deals with.
pub struct SessionContext {
    onboarding_tokens: Arc<dyn OnboardingTokenStorePort>,
    access_tokens: Arc<dyn AccessTokenStorePort>,
}

impl SessionContext {
    pub fn new(
        onboarding_tokens: Arc<dyn OnboardingTokenStorePort>,
        access_tokens: Arc<dyn AccessTokenStorePort>,
    ) -> Self {
        Self {
            onboarding_tokens,
            access_tokens,
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Remember the token issued by a successful claim, replacing any older one.
    pub async fn begin_onboarding(&self, token: &OnboardingToken) -> anyhow::Result<()> {
        self.onboarding_tokens.save(token).await?;
        debug!("onboarding token stored");
        Ok(())
    }

    pub async fn onboarding_token(&self) -> anyhow::Result<Option<OnboardingToken>> {
        let token = self.onboarding_tokens.load().await?;
        Ok(token.filter(|token| !token.is_empty()))
    }

    /// Forget the onboarding token. Safe to call when none is stored.
    pub async fn end_onboarding(&self) -> anyhow::Result<()> {
        self.onboarding_tokens.clear().await?;
        debug!("onboarding token cleared");
        Ok(())
    }

    pub async fn store_access_token(&self, token: &AccessToken) -> anyhow::Result<()> {
        self.access_tokens.save(token).await?;
        debug!("access token stored");
        Ok(())
    }

    pub async fn access_token(&self) -> anyhow::Result<Option<AccessToken>> {
        self.access_tokens.load().await
    }

    pub async fn sign_out(&self) -> anyhow::Result<()> {
        self.access_tokens.clear().await?;
        self.onboarding_tokens.clear().await?;
        debug!("session credentials cleared");
        Ok(())
    }
}

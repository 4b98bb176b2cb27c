//! Credential storage ports
//!
//! Two stores with different lifetimes. The onboarding token must not outlive
//! the running session, so an interrupted onboarding leaves no durable
//! half-authenticated credential behind. The access token persists across runs.

use async_trait::async_trait;

use crate::onboarding::{AccessToken, OnboardingToken};

#[async_trait]
pub trait OnboardingTokenStorePort: Send + Sync {
    async fn load(&self) -> anyhow::Result<Option<OnboardingToken>>;

    async fn save(&self, token: &OnboardingToken) -> anyhow::Result<()>;

    /// Remove the token. Clearing an empty store is not an error.
    async fn clear(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait AccessTokenStorePort: Send + Sync {
    async fn load(&self) -> anyhow::Result<Option<AccessToken>>;

    async fn save(&self, token: &AccessToken) -> anyhow::Result<()>;

    async fn clear(&self) -> anyhow::Result<()>;
}

use async_trait::async_trait;
use tokio::sync::RwLock;

use qw_core::ports::OnboardingTokenStorePort;
use qw_core::OnboardingToken;

/// Session-scoped onboarding token store. Dies with the process.
///
/// 会话级存储：进程退出即丢失，中断的引导不会留下持久凭据。
#[derive(Default)]
pub struct MemoryOnboardingTokenStore {
    token: RwLock<Option<OnboardingToken>>,
}

impl MemoryOnboardingTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OnboardingTokenStorePort for MemoryOnboardingTokenStore {
    async fn load(&self) -> anyhow::Result<Option<OnboardingToken>> {
        Ok(self.token.read().await.clone())
    }

    async fn save(&self, token: &OnboardingToken) -> anyhow::Result<()> {
        *self.token.write().await = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        self.token.write().await.take();
        Ok(())
    }
}

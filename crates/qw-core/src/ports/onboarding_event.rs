use crate::onboarding::OnboardingState;

/// Receives every state the onboarding flow settles in, for rendering.
#[async_trait::async_trait]
pub trait OnboardingEventPort: Send + Sync {
    async fn emit_onboarding_state_changed(&self, state: OnboardingState);
}

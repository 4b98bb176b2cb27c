pub mod onboarding;

pub use onboarding::{
    ClaimAccount, ClaimAccountError, ClaimedAccount, OnboardingOrchestrator, OrchestratorError,
};

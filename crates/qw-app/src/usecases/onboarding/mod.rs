//! Onboarding use cases.
//!
//! This module exposes the account-claim use case and the onboarding orchestrator.

pub mod claim;
mod context;
pub mod orchestrator;

pub use claim::{ClaimAccount, ClaimAccountError, ClaimedAccount};
pub use orchestrator::{OnboardingOrchestrator, OrchestratorError};

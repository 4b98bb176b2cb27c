//! # qw-app
//!
//! Application layer for the Qwiz Me onboarding client.
//!
//! Use cases here drive the `qw-core` state machine and talk to the outside
//! world only through the ports declared in `qw_core::ports`.

pub mod session;
pub mod usecases;

pub use session::SessionContext;
pub use usecases::{
    ClaimAccount, ClaimAccountError, ClaimedAccount, OnboardingOrchestrator, OrchestratorError,
};

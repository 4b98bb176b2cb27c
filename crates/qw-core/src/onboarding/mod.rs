//! Onboarding domain models
//!
//! This module defines the account-claiming flow: a claimed account walks
//! through email collection, code verification and password setup, with the
//! remote API as the single source of truth for the current step.

pub mod code_input;
pub mod cooldown;
pub mod credential;
pub mod error;
pub mod route;
pub mod state_machine;
pub mod status;
pub mod step;
pub mod validation;

pub use code_input::{CodeInput, VerificationCode, CODE_LENGTH};
pub use cooldown::{Cooldown, RESEND_COOLDOWN_SECS};
pub use credential::{AccessToken, OnboardingToken, Password};
pub use error::OnboardingError;
pub use route::Route;
pub use state_machine::{
    OnboardingAction, OnboardingEvent, OnboardingState, OnboardingStateMachine, Screen,
};
pub use status::{ClaimReceipt, OnboardingStatus, Profile};
pub use step::{Phase, Step, StepTarget};

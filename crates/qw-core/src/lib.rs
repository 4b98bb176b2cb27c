//! # qw-core
//!
//! Core domain models and business logic for the Qwiz Me onboarding client.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod onboarding;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use onboarding::{
    AccessToken, CodeInput, Cooldown, OnboardingAction, OnboardingError, OnboardingEvent,
    OnboardingState, OnboardingStateMachine, OnboardingStatus, OnboardingToken, Password, Phase,
    Route, Screen, Step, VerificationCode,
};

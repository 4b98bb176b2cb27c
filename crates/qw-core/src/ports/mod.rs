//! Port interfaces for the application layer
//!
//! Ports define the contract between the onboarding use cases and the
//! infrastructure that talks to the API, stores credentials, and schedules
//! timers. Use cases depend only on these traits.

pub mod countdown;
pub mod credential_store;
pub mod onboarding_api;
pub mod onboarding_event;

pub use countdown::{CountdownHandle, CountdownPort, CountdownSink};
pub use credential_store::{AccessTokenStorePort, OnboardingTokenStorePort};
pub use onboarding_api::{ApiError, OnboardingApiPort};
pub use onboarding_event::OnboardingEventPort;

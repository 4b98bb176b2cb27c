//! Credential stores
//!
//! The onboarding token lives in memory only; the access token is written to
//! a JSON file in the data directory.

mod file;
mod memory;

pub use file::{FileAccessTokenStore, DEFAULT_ACCESS_TOKEN_FILE};
pub use memory::MemoryOnboardingTokenStore;

//! Qwiz Me terminal client
//!
//! Bootstrap (config, tracing, dependency wiring) and the terminal adapters
//! that render the onboarding flow.

pub mod adapters;
pub mod bootstrap;

pub use bootstrap::{load_config, run_app, CliCommand};

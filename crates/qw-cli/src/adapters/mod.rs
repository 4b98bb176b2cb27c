pub mod terminal;

pub use terminal::{render, TerminalOnboardingEventEmitter};

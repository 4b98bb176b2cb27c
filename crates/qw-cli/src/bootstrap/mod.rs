pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{default_data_dir, load_config, resolve_config};
pub use run::{run_app, CliCommand, PasswordEntry};
pub use wiring::{wire_dependencies, AppRuntime};

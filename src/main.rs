use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use qw_cli::bootstrap::tracing::init_tracing_subscriber;
use qw_cli::bootstrap::{default_data_dir, resolve_config};
use qw_cli::{run_app, CliCommand};

#[derive(Parser, Debug)]
#[command(name = "qwizme")]
#[command(about = "Claim your Qwiz Me account and finish onboarding", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML config file ([api] base_url, [storage] data_dir, [logging] dir)
    #[arg(long, env = "QWIZME_CONFIG")]
    config: Option<PathBuf>,

    /// API base URL, overrides the config file
    #[arg(long, env = "QWIZME_API_BASE")]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Claim an account and complete onboarding (default)
    Onboard {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },
    /// Show whether a session credential is stored
    Session,
    /// Remove the stored session credential
    SignOut,
}

impl From<Commands> for CliCommand {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Onboard {
                first_name,
                last_name,
            } => CliCommand::Onboard {
                first_name,
                last_name,
            },
            Commands::Session => CliCommand::Session,
            Commands::SignOut => CliCommand::SignOut,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first so clap sees QWIZME_* variables
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref(), cli.api_base, default_data_dir())?;

    if let Err(err) = init_tracing_subscriber(&config.log_dir) {
        eprintln!("Failed to initialize tracing: {err}");
    }
    info!(version = env!("CARGO_PKG_VERSION"), "qwizme starting");

    let command = cli
        .command
        .map(CliCommand::from)
        .unwrap_or(CliCommand::Onboard {
            first_name: None,
            last_name: None,
        });

    run_app(config, command).await
}

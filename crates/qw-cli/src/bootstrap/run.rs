//! Command execution and the interactive onboarding loop.

use std::io::{IsTerminal, Write};
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::{info, info_span, Instrument};

use qw_app::{ClaimAccount, ClaimAccountError, ClaimedAccount, OnboardingOrchestrator};
use qw_core::config::AppConfig;
use qw_core::onboarding::CODE_LENGTH;
use qw_core::{CodeInput, Route, Screen};

use super::wiring::wire_dependencies;
use crate::adapters::terminal::{read_hidden_line, resend_hint};
use crate::adapters::TerminalOnboardingEventEmitter;

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Claim an account and walk through onboarding.
    Onboard {
        first_name: Option<String>,
        last_name: Option<String>,
    },
    /// Report whether a session credential is stored.
    Session,
    /// Delete the stored session credential.
    SignOut,
}

/// How password prompts read their answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordEntry {
    /// Read from the controlling terminal with echo turned off.
    Hidden,
    /// Read the next line of regular input, e.g. when stdin is piped.
    Echoed,
}

impl PasswordEntry {
    pub fn for_stdin() -> Self {
        if std::io::stdin().is_terminal() {
            PasswordEntry::Hidden
        } else {
            PasswordEntry::Echoed
        }
    }
}

pub async fn run_app(config: AppConfig, command: CliCommand) -> anyhow::Result<()> {
    let runtime = wire_dependencies(
        config,
        Arc::new(TerminalOnboardingEventEmitter::stdout()),
    );
    let mut out = std::io::stdout();

    match command {
        CliCommand::Session => match runtime.session.access_token().await? {
            Some(_) => writeln!(
                out,
                "Signed in (credential stored at {})",
                runtime.config.access_token_path().display()
            )?,
            None => writeln!(out, "Not signed in")?,
        },
        CliCommand::SignOut => {
            runtime.session.sign_out().await?;
            writeln!(out, "Signed out")?;
        }
        CliCommand::Onboard {
            first_name,
            last_name,
        } => {
            let mut input = BufReader::new(tokio::io::stdin()).lines();
            let span = info_span!("cli.onboard");
            async {
                let Some(claimed) = claim_interactively(
                    &runtime.claim_account,
                    first_name.zip(last_name),
                    &mut input,
                    &mut out,
                )
                .await?
                else {
                    return Ok(());
                };
                writeln!(
                    out,
                    "Hi {}! Let's finish setting up your account.",
                    claimed.first_name
                )?;

                let route = drive_onboarding(
                    &runtime.orchestrator,
                    &mut input,
                    &mut out,
                    PasswordEntry::for_stdin(),
                )
                .await?;
                info!(route = ?route.map(Route::path), "onboarding session ended");
                anyhow::Ok(())
            }
            .instrument(span)
            .await?;
        }
    }

    Ok(())
}

async fn prompt<R, W>(input: &mut Lines<R>, out: &mut W, label: &str) -> anyhow::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{label}")?;
    out.flush()?;
    Ok(input.next_line().await?)
}

async fn prompt_password<R, W>(
    input: &mut Lines<R>,
    out: &mut W,
    label: &str,
    entry: PasswordEntry,
) -> anyhow::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match entry {
        PasswordEntry::Echoed => prompt(input, out, label).await,
        PasswordEntry::Hidden => {
            out.flush()?;
            let label = label.to_string();
            tokio::task::spawn_blocking(move || read_hidden_line(&label)).await?
        }
    }
}

/// Ask for names until a claim succeeds. `None` when input ends first.
pub async fn claim_interactively<R, W>(
    claim_account: &ClaimAccount,
    mut names: Option<(String, String)>,
    input: &mut Lines<R>,
    out: &mut W,
) -> anyhow::Result<Option<ClaimedAccount>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        let (first_name, last_name) = match names.take() {
            Some(names) => names,
            None => {
                let Some(first_name) = prompt(input, out, "First name: ").await? else {
                    return Ok(None);
                };
                let Some(last_name) = prompt(input, out, "Last name: ").await? else {
                    return Ok(None);
                };
                (first_name, last_name)
            }
        };

        match claim_account.execute(&first_name, &last_name).await {
            Ok(claimed) => return Ok(Some(claimed)),
            Err(ClaimAccountError::Rejected(err)) => writeln!(out, "Error: {err}")?,
            Err(err) => return Err(err.into()),
        }
    }
}

/// Prompt for whatever the current step needs until the flow ends.
///
/// Returns where the user should go next, or `None` if input ran out.
pub async fn drive_onboarding<R, W>(
    orchestrator: &OnboardingOrchestrator,
    input: &mut Lines<R>,
    out: &mut W,
    passwords: PasswordEntry,
) -> anyhow::Result<Option<Route>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let result = drive_steps(orchestrator, input, out, passwords).await;
    orchestrator.teardown().await;
    result
}

async fn drive_steps<R, W>(
    orchestrator: &OnboardingOrchestrator,
    input: &mut Lines<R>,
    out: &mut W,
    passwords: PasswordEntry,
) -> anyhow::Result<Option<Route>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut state = orchestrator.bootstrap().await?;
    loop {
        state = match &state.screen {
            Screen::Completed | Screen::Redirect { .. } => return Ok(state.route()),
            Screen::Loading => anyhow::bail!("onboarding status was never loaded"),
            Screen::CollectEmail { .. } => {
                let Some(email) = prompt(input, out, "Email: ").await? else {
                    return Ok(None);
                };
                orchestrator.submit_email(email).await?
            }
            Screen::VerifyCode { .. } => {
                let label = format!("Code ({}): ", resend_hint(&state));
                let Some(line) = prompt(input, out, &label).await? else {
                    return Ok(None);
                };
                let line = line.trim();
                if line.eq_ignore_ascii_case("r") {
                    orchestrator.resend_code().await?
                } else if line.chars().filter(char::is_ascii_digit).count() < CODE_LENGTH {
                    writeln!(out, "Enter all {CODE_LENGTH} digits")?;
                    orchestrator.get_state().await
                } else {
                    let typed = orchestrator.input_digit(0, line.to_string()).await?;
                    if typed.code_input().is_some_and(CodeInput::is_complete) {
                        orchestrator.submit_code().await?
                    } else {
                        typed
                    }
                }
            }
            Screen::SetPassword => {
                let Some(password) =
                    prompt_password(input, out, "Password: ", passwords).await?
                else {
                    return Ok(None);
                };
                let Some(confirm) =
                    prompt_password(input, out, "Confirm password: ", passwords).await?
                else {
                    return Ok(None);
                };
                orchestrator.submit_password(password, confirm).await?
            }
        };
    }
}

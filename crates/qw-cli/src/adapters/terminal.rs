//! Terminal rendering of onboarding state.

use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::warn;

use qw_core::ports::OnboardingEventPort;
use qw_core::{OnboardingState, Phase, Route, Screen};

/// Render the three-step progress bar, e.g. `✓ Welcome ─ ● Verify ─ ○ Password`.
fn progress(current: Phase) -> String {
    Phase::ALL
        .iter()
        .map(|phase| {
            let mark = if phase.position() < current.position() {
                '✓'
            } else if *phase == current {
                '●'
            } else {
                '○'
            };
            format!("{mark} {}", phase.label())
        })
        .collect::<Vec<_>>()
        .join(" ─ ")
}

/// Text shown for a state. The resend countdown is left out so that ticks do
/// not redraw the screen; prompts show it instead.
pub fn render(state: &OnboardingState) -> String {
    let first_name = state
        .profile
        .as_ref()
        .map(|p| p.first_name.as_str())
        .filter(|name| !name.is_empty());

    let mut lines = Vec::new();
    if let Some(phase) = state.phase() {
        lines.push(progress(phase));
    }

    match &state.screen {
        Screen::Loading => lines.push("Loading your account...".to_string()),
        Screen::CollectEmail { .. } => {
            lines.push(match first_name {
                Some(name) => format!("Welcome, {name}! What email should we use?"),
                None => "Welcome! What email should we use?".to_string(),
            });
        }
        Screen::VerifyCode { code } => {
            let target = state
                .profile
                .as_ref()
                .and_then(|p| p.email.as_deref())
                .unwrap_or("your email");
            lines.push(format!("Enter the 6-digit code sent to {target}"));
            lines.push(format!("Code: {}", code.masked()));
        }
        Screen::SetPassword => lines.push("Choose a password to finish setting up.".to_string()),
        Screen::Completed => lines.push(format!(
            "You're all set! Continue at {}",
            Route::Dashboard.path()
        )),
        Screen::Redirect { to } => lines.push(match to {
            Route::ClaimAccount => format!(
                "No onboarding in progress. Claim your account at {}",
                to.path()
            ),
            Route::Login => format!("This account is already set up. Sign in at {}", to.path()),
            other => format!("Continue at {}", other.path()),
        }),
    }

    if state.submitting {
        lines.push("Working...".to_string());
    }
    if let Some(err) = &state.error {
        lines.push(format!("Error: {err}"));
    }
    lines.join("\n")
}

/// Countdown hint for the verify prompt.
pub fn resend_hint(state: &OnboardingState) -> String {
    if state.cooldown.is_ready() {
        "type 'r' to resend".to_string()
    } else {
        format!("resend in {}s", state.cooldown.remaining())
    }
}

/// Prompt on the controlling terminal without echoing what is typed.
/// `None` when input is closed before a line is entered.
pub fn read_hidden_line(label: &str) -> anyhow::Result<Option<String>> {
    match rpassword::prompt_password(label) {
        Ok(line) => Ok(Some(line)),
        Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => Ok(None),
        Err(err) => Err(anyhow::Error::new(err).context("failed to read password from terminal")),
    }
}

/// `OnboardingEventPort` that prints each distinct rendering once.
pub struct TerminalOnboardingEventEmitter<W: Write + Send> {
    out: Mutex<W>,
    last: Mutex<Option<String>>,
}

impl<W: Write + Send> TerminalOnboardingEventEmitter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            last: Mutex::new(None),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl TerminalOnboardingEventEmitter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

#[async_trait]
impl<W: Write + Send> OnboardingEventPort for TerminalOnboardingEventEmitter<W> {
    async fn emit_onboarding_state_changed(&self, state: OnboardingState) {
        let text = render(&state);
        {
            let Ok(mut last) = self.last.lock() else {
                return;
            };
            if last.as_deref() == Some(text.as_str()) {
                return;
            }
            *last = Some(text.clone());
        }

        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(err) = writeln!(out, "\n{text}").and_then(|_| out.flush()) {
            warn!(error = %err, "failed to write onboarding state to terminal");
        }
    }
}

//! Onboarding state machine.
//!
//! Defines a pure state transition function for the account onboarding flow.
//! The rendered phase only ever follows the step reported by the API: a
//! successful mutation asks for a status re-fetch instead of advancing locally.

use serde::Serialize;

use super::code_input::CodeInput;
use super::cooldown::Cooldown;
use super::credential::{AccessToken, Password};
use super::error::OnboardingError;
use super::route::Route;
use super::status::{OnboardingStatus, Profile};
use super::step::{Phase, StepTarget};
use super::validation::{validate_email, validate_password};
use crate::onboarding::VerificationCode;

const EMAIL_FALLBACK: &str = "Failed to set email";
const CODE_FALLBACK: &str = "Invalid code";
const RESEND_FALLBACK: &str = "Failed to resend code";
const PASSWORD_FALLBACK: &str = "Failed to set password";

/// What the flow is currently showing.
///
/// 当前展示的界面。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Screen {
    /// Waiting for the first status query.
    ///
    /// 等待首次状态查询。
    Loading,
    /// Step 0/1: ask for an email address.
    ///
    /// 输入邮箱。
    CollectEmail { email: String },
    /// Step 2: enter the six-digit code.
    ///
    /// 输入六位验证码。
    VerifyCode { code: CodeInput },
    /// Step 3: choose a password.
    ///
    /// 设置密码。
    SetPassword,
    /// Password set and session credential issued.
    ///
    /// 引导完成。
    Completed,
    /// Session-fatal exit, e.g. missing or expired onboarding token.
    ///
    /// 会话失效，跳转离开。
    Redirect { to: Route },
}

impl Screen {
    /// Variant name without form contents; safe to log.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Loading => "Loading",
            Screen::CollectEmail { .. } => "CollectEmail",
            Screen::VerifyCode { .. } => "VerifyCode",
            Screen::SetPassword => "SetPassword",
            Screen::Completed => "Completed",
            Screen::Redirect { .. } => "Redirect",
        }
    }

    fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::CollectEmail => Screen::CollectEmail {
                email: String::new(),
            },
            Phase::VerifyCode => Screen::VerifyCode {
                code: CodeInput::new(),
            },
            Phase::SetPassword => Screen::SetPassword,
        }
    }
}

/// Full onboarding flow state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingState {
    pub screen: Screen,
    pub profile: Option<Profile>,
    pub cooldown: Cooldown,
    /// A request triggered by the current form is in flight.
    pub submitting: bool,
    pub error: Option<OnboardingError>,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            screen: Screen::Loading,
            profile: None,
            cooldown: Cooldown::default(),
            submitting: false,
            error: None,
        }
    }
}

impl OnboardingState {
    pub fn phase(&self) -> Option<Phase> {
        match self.screen {
            Screen::CollectEmail { .. } => Some(Phase::CollectEmail),
            Screen::VerifyCode { .. } => Some(Phase::VerifyCode),
            Screen::SetPassword => Some(Phase::SetPassword),
            _ => None,
        }
    }

    /// Where the caller should navigate once the flow has ended.
    pub fn route(&self) -> Option<Route> {
        match self.screen {
            Screen::Completed => Some(Route::Dashboard),
            Screen::Redirect { to } => Some(to),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.route().is_some()
    }

    pub fn code_input(&self) -> Option<&CodeInput> {
        match &self.screen {
            Screen::VerifyCode { code } => Some(code),
            _ => None,
        }
    }

    pub fn can_submit_code(&self) -> bool {
        !self.submitting && self.code_input().is_some_and(CodeInput::is_complete)
    }

    pub fn can_resend(&self) -> bool {
        !self.submitting && self.cooldown.is_ready() && self.phase() == Some(Phase::VerifyCode)
    }
}

/// Events that drive the onboarding flow.
///
/// 驱动引导流程的事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingEvent {
    /// Flow mounted; whether a stored onboarding token exists.
    Bootstrap { has_token: bool },
    /// Status query resolved.
    StatusLoaded { status: OnboardingStatus },
    /// Status query failed; the session is unusable.
    StatusFailed,
    SubmitEmail { email: String },
    EmailAccepted,
    SubmitCode,
    CodeAccepted,
    RequestResend,
    ResendAccepted,
    ResendFailed { detail: Option<String> },
    SubmitPassword { password: Password, confirm: Password },
    PasswordAccepted { access_token: AccessToken },
    /// The request issued by the current form failed.
    RequestFailed { detail: Option<String> },
    DigitInput { index: usize, text: String },
    DigitBackspace { index: usize },
    /// One second of resend cooldown elapsed.
    CooldownTick,
}

impl OnboardingEvent {
    /// Variant name, safe to log (no user input).
    pub fn name(&self) -> &'static str {
        match self {
            OnboardingEvent::Bootstrap { .. } => "Bootstrap",
            OnboardingEvent::StatusLoaded { .. } => "StatusLoaded",
            OnboardingEvent::StatusFailed => "StatusFailed",
            OnboardingEvent::SubmitEmail { .. } => "SubmitEmail",
            OnboardingEvent::EmailAccepted => "EmailAccepted",
            OnboardingEvent::SubmitCode => "SubmitCode",
            OnboardingEvent::CodeAccepted => "CodeAccepted",
            OnboardingEvent::RequestResend => "RequestResend",
            OnboardingEvent::ResendAccepted => "ResendAccepted",
            OnboardingEvent::ResendFailed { .. } => "ResendFailed",
            OnboardingEvent::SubmitPassword { .. } => "SubmitPassword",
            OnboardingEvent::PasswordAccepted { .. } => "PasswordAccepted",
            OnboardingEvent::RequestFailed { .. } => "RequestFailed",
            OnboardingEvent::DigitInput { .. } => "DigitInput",
            OnboardingEvent::DigitBackspace { .. } => "DigitBackspace",
            OnboardingEvent::CooldownTick => "CooldownTick",
        }
    }
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingAction {
    FetchStatus,
    SendEmail { email: String },
    VerifyCode { code: VerificationCode },
    ResendCode,
    SetPassword { password: Password },
    /// Schedule cooldown ticks for the interval just started.
    StartCooldown,
    StoreAccessToken { access_token: AccessToken },
    ClearOnboardingToken,
}

impl OnboardingAction {
    pub fn name(&self) -> &'static str {
        match self {
            OnboardingAction::FetchStatus => "FetchStatus",
            OnboardingAction::SendEmail { .. } => "SendEmail",
            OnboardingAction::VerifyCode { .. } => "VerifyCode",
            OnboardingAction::ResendCode => "ResendCode",
            OnboardingAction::SetPassword { .. } => "SetPassword",
            OnboardingAction::StartCooldown => "StartCooldown",
            OnboardingAction::StoreAccessToken { .. } => "StoreAccessToken",
            OnboardingAction::ClearOnboardingToken => "ClearOnboardingToken",
        }
    }
}

/// Pure onboarding state machine.
///
/// 纯状态机：不包含副作用。
pub struct OnboardingStateMachine;

impl OnboardingStateMachine {
    pub fn transition(
        mut state: OnboardingState,
        event: OnboardingEvent,
    ) -> (OnboardingState, Vec<OnboardingAction>) {
        use OnboardingAction as A;
        use OnboardingEvent as E;

        if state.is_terminal() {
            return (state, Vec::new());
        }

        match event {
            E::Bootstrap { has_token } => {
                if state.screen != Screen::Loading {
                    return (state, Vec::new());
                }
                if has_token {
                    (state, vec![A::FetchStatus])
                } else {
                    state.screen = Screen::Redirect {
                        to: Route::ClaimAccount,
                    };
                    (state, Vec::new())
                }
            }
            E::StatusLoaded { status } => {
                state.submitting = false;
                state.profile = Some(Profile::from(&status));
                match status.onboarding_step.target() {
                    StepTarget::Phase(phase) => {
                        if state.phase() != Some(phase) {
                            state.screen = Screen::for_phase(phase);
                            state.error = None;
                        }
                        (state, Vec::new())
                    }
                    StepTarget::Completed => {
                        state.screen = Screen::Redirect { to: Route::Login };
                        state.error = None;
                        (state, vec![A::ClearOnboardingToken])
                    }
                }
            }
            E::StatusFailed => {
                state.screen = Screen::Redirect {
                    to: Route::ClaimAccount,
                };
                state.profile = None;
                state.submitting = false;
                (state, vec![A::ClearOnboardingToken])
            }
            E::SubmitEmail { email } => {
                if state.submitting || state.phase() != Some(Phase::CollectEmail) {
                    return (state, Vec::new());
                }
                let email = email.trim().to_string();
                state.screen = Screen::CollectEmail {
                    email: email.clone(),
                };
                if let Err(err) = validate_email(&email) {
                    state.error = Some(err);
                    return (state, Vec::new());
                }
                state.error = None;
                state.submitting = true;
                (state, vec![A::SendEmail { email }])
            }
            E::EmailAccepted => {
                if state.phase() != Some(Phase::CollectEmail) {
                    return (state, Vec::new());
                }
                state.cooldown.start();
                (state, vec![A::FetchStatus, A::StartCooldown])
            }
            E::SubmitCode => {
                if state.submitting {
                    return (state, Vec::new());
                }
                let Some(code) = state.code_input().and_then(CodeInput::code) else {
                    return (state, Vec::new());
                };
                state.error = None;
                state.submitting = true;
                (state, vec![A::VerifyCode { code }])
            }
            E::CodeAccepted => {
                if state.phase() != Some(Phase::VerifyCode) {
                    return (state, Vec::new());
                }
                (state, vec![A::FetchStatus])
            }
            E::RequestResend => {
                if !state.can_resend() {
                    return (state, Vec::new());
                }
                state.submitting = true;
                (state, vec![A::ResendCode])
            }
            E::ResendAccepted => {
                if let Screen::VerifyCode { code } = &mut state.screen {
                    code.clear();
                    state.cooldown.start();
                    state.error = None;
                    state.submitting = false;
                    return (state, vec![A::StartCooldown]);
                }
                (state, Vec::new())
            }
            E::ResendFailed { detail } => {
                if state.phase() != Some(Phase::VerifyCode) {
                    return (state, Vec::new());
                }
                state.error = Some(OnboardingError::remote(detail, RESEND_FALLBACK));
                state.submitting = false;
                (state, Vec::new())
            }
            E::SubmitPassword { password, confirm } => {
                if state.submitting || state.phase() != Some(Phase::SetPassword) {
                    return (state, Vec::new());
                }
                if let Err(err) = validate_password(&password, &confirm) {
                    state.error = Some(err);
                    return (state, Vec::new());
                }
                state.error = None;
                state.submitting = true;
                (state, vec![A::SetPassword { password }])
            }
            E::PasswordAccepted { access_token } => {
                if state.phase() != Some(Phase::SetPassword) {
                    return (state, Vec::new());
                }
                state.screen = Screen::Completed;
                state.submitting = false;
                state.error = None;
                (
                    state,
                    vec![
                        A::StoreAccessToken { access_token },
                        A::ClearOnboardingToken,
                    ],
                )
            }
            E::RequestFailed { detail } => {
                let fallback = match state.phase() {
                    Some(Phase::CollectEmail) => EMAIL_FALLBACK,
                    Some(Phase::VerifyCode) => CODE_FALLBACK,
                    Some(Phase::SetPassword) => PASSWORD_FALLBACK,
                    None => return (state, Vec::new()),
                };
                state.error = Some(OnboardingError::remote(detail, fallback));
                state.submitting = false;
                (state, Vec::new())
            }
            E::DigitInput { index, text } => {
                if let Screen::VerifyCode { code } = &mut state.screen {
                    code.input(index, &text);
                }
                (state, Vec::new())
            }
            E::DigitBackspace { index } => {
                if let Screen::VerifyCode { code } = &mut state.screen {
                    code.backspace(index);
                }
                (state, Vec::new())
            }
            E::CooldownTick => {
                state.cooldown.tick();
                (state, Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::step::Step;
    use crate::onboarding::RESEND_COOLDOWN_SECS;

    fn status(step: i32) -> OnboardingStatus {
        OnboardingStatus {
            onboarding_step: Step(step),
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            email: (step >= 2).then(|| "ada@example.com".to_string()),
        }
    }

    fn at_step(step: i32) -> OnboardingState {
        let (state, _) = OnboardingStateMachine::transition(
            OnboardingState::default(),
            OnboardingEvent::StatusLoaded {
                status: status(step),
            },
        );
        state
    }

    fn filled_code_state() -> OnboardingState {
        let (state, _) = OnboardingStateMachine::transition(
            at_step(2),
            OnboardingEvent::DigitInput {
                index: 0,
                text: "123456".into(),
            },
        );
        state
    }

    #[test]
    fn bootstrap_without_token_redirects_to_claim_without_actions() {
        let (next, actions) = OnboardingStateMachine::transition(
            OnboardingState::default(),
            OnboardingEvent::Bootstrap { has_token: false },
        );
        assert_eq!(next.route(), Some(Route::ClaimAccount));
        assert!(actions.is_empty());
    }

    #[test]
    fn bootstrap_with_token_fetches_status() {
        let (next, actions) = OnboardingStateMachine::transition(
            OnboardingState::default(),
            OnboardingEvent::Bootstrap { has_token: true },
        );
        assert_eq!(next.screen, Screen::Loading);
        assert_eq!(actions, vec![OnboardingAction::FetchStatus]);
    }

    #[test]
    fn status_step_selects_phase() {
        assert_eq!(at_step(0).phase(), Some(Phase::CollectEmail));
        assert_eq!(at_step(1).phase(), Some(Phase::CollectEmail));
        assert_eq!(at_step(2).phase(), Some(Phase::VerifyCode));
        assert_eq!(at_step(3).phase(), Some(Phase::SetPassword));
        assert_eq!(at_step(1).profile.unwrap().first_name, "Ada");
    }

    #[test]
    fn completed_step_sends_user_to_login_and_drops_token() {
        let (next, actions) = OnboardingStateMachine::transition(
            OnboardingState::default(),
            OnboardingEvent::StatusLoaded { status: status(5) },
        );
        assert_eq!(next.route(), Some(Route::Login));
        assert_eq!(actions, vec![OnboardingAction::ClearOnboardingToken]);
    }

    #[test]
    fn status_failure_is_session_fatal() {
        let (next, actions) =
            OnboardingStateMachine::transition(at_step(2), OnboardingEvent::StatusFailed);
        assert_eq!(next.route(), Some(Route::ClaimAccount));
        assert_eq!(next.profile, None);
        assert_eq!(actions, vec![OnboardingAction::ClearOnboardingToken]);
    }

    #[test]
    fn submit_email_requests_send_and_marks_submitting() {
        let (next, actions) = OnboardingStateMachine::transition(
            at_step(1),
            OnboardingEvent::SubmitEmail {
                email: " ada@example.com ".into(),
            },
        );
        assert!(next.submitting);
        assert_eq!(
            actions,
            vec![OnboardingAction::SendEmail {
                email: "ada@example.com".into()
            }]
        );
    }

    #[test]
    fn submit_email_twice_while_in_flight_is_ignored() {
        let (state, _) = OnboardingStateMachine::transition(
            at_step(1),
            OnboardingEvent::SubmitEmail {
                email: "ada@example.com".into(),
            },
        );
        let (next, actions) = OnboardingStateMachine::transition(
            state.clone(),
            OnboardingEvent::SubmitEmail {
                email: "ada@example.com".into(),
            },
        );
        assert_eq!(next, state);
        assert!(actions.is_empty());
    }

    #[test]
    fn invalid_email_is_rejected_locally() {
        let (next, actions) = OnboardingStateMachine::transition(
            at_step(1),
            OnboardingEvent::SubmitEmail {
                email: "nope".into(),
            },
        );
        assert_eq!(next.error, Some(OnboardingError::InvalidEmail));
        assert!(!next.submitting);
        assert!(actions.is_empty());
    }

    #[test]
    fn accepted_email_refetches_status_and_starts_cooldown_without_advancing() {
        let (state, _) = OnboardingStateMachine::transition(
            at_step(1),
            OnboardingEvent::SubmitEmail {
                email: "ada@example.com".into(),
            },
        );
        let (next, actions) =
            OnboardingStateMachine::transition(state, OnboardingEvent::EmailAccepted);

        assert_eq!(next.phase(), Some(Phase::CollectEmail));
        assert_eq!(next.cooldown.remaining(), 60);
        assert_eq!(
            actions,
            vec![OnboardingAction::FetchStatus, OnboardingAction::StartCooldown]
        );
    }

    #[test]
    fn email_failure_uses_detail_or_fallback() {
        let (state, _) = OnboardingStateMachine::transition(
            at_step(1),
            OnboardingEvent::SubmitEmail {
                email: "ada@example.com".into(),
            },
        );
        let (next, _) = OnboardingStateMachine::transition(
            state.clone(),
            OnboardingEvent::RequestFailed {
                detail: Some("Email already in use".into()),
            },
        );
        assert_eq!(next.error.as_ref().unwrap().to_string(), "Email already in use");
        assert!(!next.submitting);
        assert_eq!(next.phase(), Some(Phase::CollectEmail));

        let (next, _) = OnboardingStateMachine::transition(
            state,
            OnboardingEvent::RequestFailed { detail: None },
        );
        assert_eq!(next.error.unwrap().to_string(), "Failed to set email");
    }

    #[test]
    fn incomplete_code_cannot_be_submitted() {
        let (state, _) = OnboardingStateMachine::transition(
            at_step(2),
            OnboardingEvent::DigitInput {
                index: 0,
                text: "12345".into(),
            },
        );
        assert!(!state.can_submit_code());
        let (next, actions) =
            OnboardingStateMachine::transition(state.clone(), OnboardingEvent::SubmitCode);
        assert_eq!(next, state);
        assert!(actions.is_empty());
    }

    #[test]
    fn complete_code_is_submitted() {
        let state = filled_code_state();
        assert!(state.can_submit_code());
        let (next, actions) = OnboardingStateMachine::transition(state, OnboardingEvent::SubmitCode);
        assert!(next.submitting);
        assert_eq!(
            actions,
            vec![OnboardingAction::VerifyCode {
                code: VerificationCode::parse("123456").unwrap()
            }]
        );
    }

    #[test]
    fn accepted_code_waits_for_status_before_set_password() {
        let (state, _) =
            OnboardingStateMachine::transition(filled_code_state(), OnboardingEvent::SubmitCode);
        let (state, actions) =
            OnboardingStateMachine::transition(state, OnboardingEvent::CodeAccepted);
        assert_eq!(state.phase(), Some(Phase::VerifyCode));
        assert_eq!(actions, vec![OnboardingAction::FetchStatus]);

        let (state, _) = OnboardingStateMachine::transition(
            state,
            OnboardingEvent::StatusLoaded { status: status(3) },
        );
        assert_eq!(state.phase(), Some(Phase::SetPassword));
        assert!(!state.submitting);
    }

    #[test]
    fn failed_verify_keeps_digits() {
        let (state, _) =
            OnboardingStateMachine::transition(filled_code_state(), OnboardingEvent::SubmitCode);
        let (next, _) = OnboardingStateMachine::transition(
            state,
            OnboardingEvent::RequestFailed { detail: None },
        );
        assert_eq!(next.error.as_ref().unwrap().to_string(), "Invalid code");
        assert_eq!(next.code_input().unwrap().masked(), "123456");
        assert_eq!(next.phase(), Some(Phase::VerifyCode));
    }

    #[test]
    fn resend_during_cooldown_is_a_no_op() {
        let mut state = filled_code_state();
        state.cooldown.start();
        state.cooldown.tick();

        let (next, actions) =
            OnboardingStateMachine::transition(state.clone(), OnboardingEvent::RequestResend);
        assert_eq!(next, state);
        assert!(actions.is_empty());
    }

    #[test]
    fn resend_at_zero_resets_cooldown_clears_digits_and_error() {
        let (state, _) =
            OnboardingStateMachine::transition(filled_code_state(), OnboardingEvent::SubmitCode);
        let (state, _) = OnboardingStateMachine::transition(
            state,
            OnboardingEvent::RequestFailed { detail: None },
        );
        assert!(state.cooldown.is_ready());

        let (state, actions) =
            OnboardingStateMachine::transition(state, OnboardingEvent::RequestResend);
        assert_eq!(actions, vec![OnboardingAction::ResendCode]);

        let (next, actions) =
            OnboardingStateMachine::transition(state, OnboardingEvent::ResendAccepted);
        assert_eq!(next.cooldown.remaining(), 60);
        assert!(next.code_input().unwrap().is_empty());
        assert_eq!(next.error, None);
        assert!(!next.submitting);
        assert_eq!(actions, vec![OnboardingAction::StartCooldown]);
    }

    #[test]
    fn resend_failure_keeps_cooldown_and_reports_error() {
        let (state, _) =
            OnboardingStateMachine::transition(filled_code_state(), OnboardingEvent::RequestResend);
        let (next, _) = OnboardingStateMachine::transition(
            state,
            OnboardingEvent::ResendFailed { detail: None },
        );
        assert_eq!(next.error.as_ref().unwrap().to_string(), "Failed to resend code");
        assert_eq!(next.cooldown.remaining(), 0);
        assert_eq!(next.code_input().unwrap().masked(), "123456");
    }

    #[test]
    fn password_mismatch_sets_error_without_actions() {
        let (next, actions) = OnboardingStateMachine::transition(
            at_step(3),
            OnboardingEvent::SubmitPassword {
                password: Password::new("abc123"),
                confirm: Password::new("abc124"),
            },
        );
        assert_eq!(next.error, Some(OnboardingError::PasswordMismatch));
        assert_eq!(next.error.unwrap().to_string(), "Passwords do not match");
        assert!(actions.is_empty());
    }

    #[test]
    fn matching_password_is_sent() {
        let (next, actions) = OnboardingStateMachine::transition(
            at_step(3),
            OnboardingEvent::SubmitPassword {
                password: Password::new("abc123"),
                confirm: Password::new("abc123"),
            },
        );
        assert!(next.submitting);
        assert_eq!(
            actions,
            vec![OnboardingAction::SetPassword {
                password: Password::new("abc123")
            }]
        );
    }

    #[test]
    fn accepted_password_completes_and_swaps_credentials() {
        let (next, actions) = OnboardingStateMachine::transition(
            at_step(3),
            OnboardingEvent::PasswordAccepted {
                access_token: AccessToken::new("access"),
            },
        );
        assert_eq!(next.screen, Screen::Completed);
        assert_eq!(next.route(), Some(Route::Dashboard));
        assert_eq!(
            actions,
            vec![
                OnboardingAction::StoreAccessToken {
                    access_token: AccessToken::new("access")
                },
                OnboardingAction::ClearOnboardingToken,
            ]
        );
    }

    #[test]
    fn terminal_states_ignore_further_events() {
        let (done, _) = OnboardingStateMachine::transition(
            at_step(3),
            OnboardingEvent::PasswordAccepted {
                access_token: AccessToken::new("access"),
            },
        );
        let (next, actions) = OnboardingStateMachine::transition(
            done.clone(),
            OnboardingEvent::StatusLoaded { status: status(1) },
        );
        assert_eq!(next, done);
        assert!(actions.is_empty());
    }

    #[test]
    fn cooldown_ticks_do_not_touch_terminal_states() {
        let mut running = at_step(3);
        running.cooldown.start();
        let (done, _) = OnboardingStateMachine::transition(
            running,
            OnboardingEvent::PasswordAccepted {
                access_token: AccessToken::new("access"),
            },
        );
        let (next, actions) =
            OnboardingStateMachine::transition(done.clone(), OnboardingEvent::CooldownTick);
        assert_eq!(next, done);
        assert_eq!(next.cooldown.remaining(), RESEND_COOLDOWN_SECS);
        assert!(actions.is_empty());
    }

    #[test]
    fn screen_name_hides_form_contents() {
        let code = filled_code_state().screen;
        let email = Screen::CollectEmail {
            email: "ada@example.com".into(),
        };

        assert_eq!(code.name(), "VerifyCode");
        assert!(!code.name().chars().any(|c| c.is_ascii_digit()));
        assert_eq!(email.name(), "CollectEmail");
        assert_eq!(Screen::Redirect { to: Route::Login }.name(), "Redirect");
    }

    #[test]
    fn cooldown_ticks_saturate_at_zero() {
        let mut state = at_step(2);
        state.cooldown.start();
        for _ in 0..65 {
            state = OnboardingStateMachine::transition(state, OnboardingEvent::CooldownTick).0;
        }
        assert_eq!(state.cooldown.remaining(), 0);
    }

    #[test]
    fn same_phase_status_keeps_form_input() {
        let state = filled_code_state();
        let (next, _) = OnboardingStateMachine::transition(
            state,
            OnboardingEvent::StatusLoaded { status: status(2) },
        );
        assert_eq!(next.code_input().unwrap().masked(), "123456");
    }
}

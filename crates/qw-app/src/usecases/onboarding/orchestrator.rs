//! Onboarding orchestrator.
//!
//! This module coordinates the onboarding state machine and side effects.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use qw_core::ports::{
    CountdownHandle, CountdownPort, CountdownSink, OnboardingApiPort, OnboardingEventPort,
};
use qw_core::{
    OnboardingAction, OnboardingEvent, OnboardingState, OnboardingToken, Password,
};

use crate::session::SessionContext;
use crate::usecases::onboarding::context::OnboardingContext;

/// Errors produced by the onboarding orchestrator.
///
/// Remote rejections are not errors here: they land in `OnboardingState::error`.
#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error("another onboarding request is still in flight")]
    Busy,
    #[error("onboarding flow has been torn down")]
    Unmounted,
    #[error("credential store failed: {0}")]
    Store(#[source] anyhow::Error),
}

/// Orchestrator that drives onboarding state and side effects.
pub struct OnboardingOrchestrator {
    context: Arc<OnboardingContext>,
    mounted: Arc<AtomicBool>,
    countdown: Mutex<Option<CountdownHandle>>,

    api: Arc<dyn OnboardingApiPort>,
    session: Arc<SessionContext>,
    countdown_port: Arc<dyn CountdownPort>,
    event_port: Arc<dyn OnboardingEventPort>,
}

impl OnboardingOrchestrator {
    pub fn new(
        api: Arc<dyn OnboardingApiPort>,
        session: Arc<SessionContext>,
        countdown_port: Arc<dyn CountdownPort>,
        event_port: Arc<dyn OnboardingEventPort>,
    ) -> Self {
        Self {
            context: OnboardingContext::default().arc(),
            mounted: Arc::new(AtomicBool::new(true)),
            countdown: Mutex::new(None),
            api,
            session,
            countdown_port,
            event_port,
        }
    }

    /// Enter the flow: redirect to the claim page without a token, otherwise
    /// load the current step from the API.
    pub async fn bootstrap(&self) -> Result<OnboardingState, OrchestratorError> {
        let has_token = self
            .session
            .onboarding_token()
            .await
            .map_err(OrchestratorError::Store)?
            .is_some();
        if !has_token {
            info!("no onboarding token in session, redirecting to claim");
        }
        self.dispatch(OnboardingEvent::Bootstrap { has_token }).await
    }

    pub async fn submit_email(&self, email: String) -> Result<OnboardingState, OrchestratorError> {
        self.dispatch(OnboardingEvent::SubmitEmail { email }).await
    }

    /// Type or paste into digit slot `index`.
    pub async fn input_digit(
        &self,
        index: usize,
        text: String,
    ) -> Result<OnboardingState, OrchestratorError> {
        self.apply_local(OnboardingEvent::DigitInput { index, text })
            .await
    }

    pub async fn backspace(&self, index: usize) -> Result<OnboardingState, OrchestratorError> {
        self.apply_local(OnboardingEvent::DigitBackspace { index })
            .await
    }

    pub async fn submit_code(&self) -> Result<OnboardingState, OrchestratorError> {
        self.dispatch(OnboardingEvent::SubmitCode).await
    }

    pub async fn resend_code(&self) -> Result<OnboardingState, OrchestratorError> {
        self.dispatch(OnboardingEvent::RequestResend).await
    }

    pub async fn submit_password(
        &self,
        password: String,
        confirm: String,
    ) -> Result<OnboardingState, OrchestratorError> {
        self.dispatch(OnboardingEvent::SubmitPassword {
            password: Password::new(password),
            confirm: Password::new(confirm),
        })
        .await
    }

    pub async fn get_state(&self) -> OnboardingState {
        self.context.get_state().await
    }

    /// Leave the flow. Stops the countdown; results of requests still in
    /// flight are dropped without touching state.
    ///
    /// 离开流程：停止倒计时，之后返回的请求结果一律丢弃。
    pub async fn teardown(&self) {
        if !self.mounted.swap(false, Ordering::SeqCst) {
            return;
        }
        self.stop_countdown().await;
        info!("onboarding orchestrator torn down");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    fn ensure_mounted(&self) -> Result<(), OrchestratorError> {
        if self.is_mounted() {
            Ok(())
        } else {
            Err(OrchestratorError::Unmounted)
        }
    }

    /// Edits that never reach the API skip the dispatch lock, so typing stays
    /// responsive while a request is in flight.
    async fn apply_local(
        &self,
        event: OnboardingEvent,
    ) -> Result<OnboardingState, OrchestratorError> {
        self.ensure_mounted()?;
        let event_name = event.name();
        let (_, next, actions) = self.context.transition(event).await;
        debug!(event = %event_name, "onboarding local edit");
        debug_assert!(actions.is_empty());
        self.event_port
            .emit_onboarding_state_changed(next.clone())
            .await;
        Ok(next)
    }

    async fn dispatch(&self, event: OnboardingEvent) -> Result<OnboardingState, OrchestratorError> {
        self.ensure_mounted()?;
        // A second remote-bound event while one is in flight is refused rather
        // than queued, so a double submit never becomes a double request.
        let Some(_dispatch_guard) = self.context.try_acquire_dispatch_lock() else {
            debug!(event = %event.name(), "onboarding dispatch rejected, busy");
            return Err(OrchestratorError::Busy);
        };

        let span = info_span!("usecase.onboarding_orchestrator.dispatch", event = %event.name());
        async {
            let mut current = self.context.get_state().await;
            let mut pending_events = VecDeque::from([event]);

            while let Some(event) = pending_events.pop_front() {
                self.ensure_mounted()?;
                let event_name = event.name();
                let (from, next, actions) = self.context.transition(event).await;
                info!(
                    from = %from.screen.name(),
                    to = %next.screen.name(),
                    event = %event_name,
                    "onboarding state transition"
                );
                if next.is_terminal() && !from.is_terminal() {
                    self.stop_countdown().await;
                }
                self.event_port
                    .emit_onboarding_state_changed(next.clone())
                    .await;
                current = next;
                let follow_up_events = self.execute_actions(actions).await?;
                pending_events.extend(follow_up_events);
            }

            Ok(current)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(
        &self,
        actions: Vec<OnboardingAction>,
    ) -> Result<Vec<OnboardingEvent>, OrchestratorError> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(action = %action.name(), "onboarding executing action");
            match action {
                OnboardingAction::FetchStatus => {
                    let event = match self.current_token().await? {
                        Some(token) => match self.api.status(&token).await {
                            Ok(status) => OnboardingEvent::StatusLoaded { status },
                            Err(err) => {
                                warn!(error = %err, "onboarding status fetch failed");
                                OnboardingEvent::StatusFailed
                            }
                        },
                        None => OnboardingEvent::StatusFailed,
                    };
                    self.ensure_mounted()?;
                    follow_up_events.push(event);
                }
                OnboardingAction::SendEmail { email } => {
                    let Some(token) = self.current_token().await? else {
                        follow_up_events.push(OnboardingEvent::StatusFailed);
                        continue;
                    };
                    let result = self.api.submit_email(&token, &email).await;
                    self.ensure_mounted()?;
                    follow_up_events.push(match result {
                        Ok(()) => OnboardingEvent::EmailAccepted,
                        Err(err) => {
                            warn!(error = %err, "onboarding submit email failed");
                            OnboardingEvent::RequestFailed {
                                detail: err.into_detail(),
                            }
                        }
                    });
                }
                OnboardingAction::VerifyCode { code } => {
                    let Some(token) = self.current_token().await? else {
                        follow_up_events.push(OnboardingEvent::StatusFailed);
                        continue;
                    };
                    let result = self.api.verify_code(&token, &code).await;
                    self.ensure_mounted()?;
                    follow_up_events.push(match result {
                        Ok(()) => OnboardingEvent::CodeAccepted,
                        Err(err) => {
                            warn!(error = %err, "onboarding verify code failed");
                            OnboardingEvent::RequestFailed {
                                detail: err.into_detail(),
                            }
                        }
                    });
                }
                OnboardingAction::ResendCode => {
                    let Some(token) = self.current_token().await? else {
                        follow_up_events.push(OnboardingEvent::StatusFailed);
                        continue;
                    };
                    let result = self.api.resend_code(&token).await;
                    self.ensure_mounted()?;
                    follow_up_events.push(match result {
                        Ok(()) => OnboardingEvent::ResendAccepted,
                        Err(err) => {
                            warn!(error = %err, "onboarding resend code failed");
                            OnboardingEvent::ResendFailed {
                                detail: err.into_detail(),
                            }
                        }
                    });
                }
                OnboardingAction::SetPassword { password } => {
                    let Some(token) = self.current_token().await? else {
                        follow_up_events.push(OnboardingEvent::StatusFailed);
                        continue;
                    };
                    let result = self.api.set_password(&token, &password).await;
                    self.ensure_mounted()?;
                    follow_up_events.push(match result {
                        Ok(access_token) => OnboardingEvent::PasswordAccepted { access_token },
                        Err(err) => {
                            warn!(error = %err, "onboarding set password failed");
                            OnboardingEvent::RequestFailed {
                                detail: err.into_detail(),
                            }
                        }
                    });
                }
                OnboardingAction::StartCooldown => {
                    self.start_countdown().await;
                }
                OnboardingAction::StoreAccessToken { access_token } => {
                    self.session
                        .store_access_token(&access_token)
                        .await
                        .map_err(OrchestratorError::Store)?;
                }
                OnboardingAction::ClearOnboardingToken => {
                    self.session
                        .end_onboarding()
                        .await
                        .map_err(OrchestratorError::Store)?;
                }
            }
        }

        Ok(follow_up_events)
    }

    async fn current_token(&self) -> Result<Option<OnboardingToken>, OrchestratorError> {
        let token = self
            .session
            .onboarding_token()
            .await
            .map_err(OrchestratorError::Store)?;
        if token.is_none() {
            warn!("onboarding token missing from session");
        }
        Ok(token)
    }

    /// `teardown` clears `mounted` before taking the slot lock, so checking
    /// it under the lock means no timer is installed after teardown.
    async fn start_countdown(&self) {
        let mut slot = self.countdown.lock().await;
        if !self.is_mounted() {
            debug!("onboarding unmounted, resend cooldown not started");
            return;
        }
        let remaining = self.context.get_state().await.cooldown.remaining();
        let sink = Arc::new(CooldownTicker {
            context: self.context.clone(),
            mounted: self.mounted.clone(),
            event_port: self.event_port.clone(),
        });
        let handle = self.countdown_port.start(remaining, sink);
        if let Some(previous) = slot.replace(handle) {
            previous.cancel();
        }
        debug!(remaining, "resend cooldown started");
    }

    async fn stop_countdown(&self) {
        if let Some(handle) = self.countdown.lock().await.take() {
            handle.cancel();
            debug!("resend cooldown stopped");
        }
    }
}

/// Feeds countdown ticks into the state machine.
struct CooldownTicker {
    context: Arc<OnboardingContext>,
    mounted: Arc<AtomicBool>,
    event_port: Arc<dyn OnboardingEventPort>,
}

#[async_trait]
impl CountdownSink for CooldownTicker {
    async fn on_tick(&self, remaining: u32) {
        if !self.mounted.load(Ordering::SeqCst) {
            return;
        }
        let (from, next, _) = self.context.transition(OnboardingEvent::CooldownTick).await;
        if from == next {
            return;
        }
        if next.cooldown.remaining() != remaining {
            debug!(
                state = next.cooldown.remaining(),
                timer = remaining,
                "cooldown drifted from timer"
            );
        }
        self.event_port.emit_onboarding_state_changed(next).await;
    }
}

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use qw_core::{OnboardingAction, OnboardingEvent, OnboardingState, OnboardingStateMachine};

/// Shared onboarding context containing state and dispatch lock.
///
/// Shared between `OnboardingOrchestrator` and the cooldown ticker so both
/// apply transitions to the same state.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: held for a whole remote round-trip, never by local edits.
/// - `state`: held only for the duration of a single transition.
#[derive(Clone)]
pub(crate) struct OnboardingContext {
    state: Arc<Mutex<OnboardingState>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl OnboardingContext {
    pub fn new(initial_state: OnboardingState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn get_state(&self) -> OnboardingState {
        self.state.lock().await.clone()
    }

    /// Returns `None` while another dispatch is in flight.
    pub fn try_acquire_dispatch_lock(&self) -> Option<MutexGuard<'_, ()>> {
        self.dispatch_lock.try_lock().ok()
    }

    /// Run one transition against the latest state and store the result.
    ///
    /// Returns `(from, to, actions)`.
    pub async fn transition(
        &self,
        event: OnboardingEvent,
    ) -> (OnboardingState, OnboardingState, Vec<OnboardingAction>) {
        let mut guard = self.state.lock().await;
        let from = guard.clone();
        let (next, actions) = OnboardingStateMachine::transition(from.clone(), event);
        *guard = next.clone();
        (from, next, actions)
    }
}

impl Default for OnboardingContext {
    fn default() -> Self {
        Self::new(OnboardingState::default())
    }
}

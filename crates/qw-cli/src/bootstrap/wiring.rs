//! Dependency wiring: concrete adapters behind the application ports.

use std::sync::Arc;

use tracing::info;

use qw_app::{ClaimAccount, OnboardingOrchestrator, SessionContext};
use qw_core::config::AppConfig;
use qw_core::ports::{CountdownPort, OnboardingApiPort, OnboardingEventPort};
use qw_infra::{FileAccessTokenStore, HttpOnboardingApi, MemoryOnboardingTokenStore, TokioCountdown};

/// Everything a command needs, fully assembled.
pub struct AppRuntime {
    pub config: AppConfig,
    pub session: Arc<SessionContext>,
    pub claim_account: ClaimAccount,
    pub orchestrator: Arc<OnboardingOrchestrator>,
}

pub fn wire_dependencies(
    config: AppConfig,
    event_port: Arc<dyn OnboardingEventPort>,
) -> AppRuntime {
    let api: Arc<dyn OnboardingApiPort> = Arc::new(HttpOnboardingApi::new(&config.api_base_url));
    let session = SessionContext::new(
        Arc::new(MemoryOnboardingTokenStore::new()),
        Arc::new(FileAccessTokenStore::with_defaults(config.data_dir.clone())),
    )
    .arc();
    let countdown: Arc<dyn CountdownPort> = Arc::new(TokioCountdown::new());

    let claim_account = ClaimAccount::new(api.clone(), session.clone());
    let orchestrator = Arc::new(OnboardingOrchestrator::new(
        api,
        session.clone(),
        countdown,
        event_port,
    ));

    info!(
        api_base_url = %config.api_base_url,
        data_dir = %config.data_dir.display(),
        "dependencies wired"
    );

    AppRuntime {
        config,
        session,
        claim_account,
        orchestrator,
    }
}

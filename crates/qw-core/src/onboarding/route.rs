use serde::{Deserialize, Serialize};

/// Navigation targets the onboarding flow can hand control to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Name-based claim entry point.
    ClaimAccount,
    /// The onboarding wizard itself.
    Onboarding,
    /// Regular sign-in, for accounts that already finished onboarding.
    Login,
    /// Main application entry.
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::ClaimAccount => "/claim-account",
            Route::Onboarding => "/claim-account/onboarding",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
        }
    }
}

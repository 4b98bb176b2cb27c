use serde::{Deserialize, Serialize};

use super::step::Step;

/// Body of `GET /onboarding/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingStatus {
    pub onboarding_step: Step,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of a successful `POST /onboarding/claim`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClaimReceipt {
    pub onboarding_token: String,
    #[serde(default)]
    pub first_name: Option<String>,
}

/// Profile fields known for the account being onboarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

impl From<&OnboardingStatus> for Profile {
    fn from(status: &OnboardingStatus) -> Self {
        Self {
            first_name: status.first_name.clone().unwrap_or_default(),
            last_name: status.last_name.clone().unwrap_or_default(),
            email: status.email.clone(),
        }
    }
}

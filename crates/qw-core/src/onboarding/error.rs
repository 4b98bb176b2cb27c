use serde::{Deserialize, Serialize};

/// User-visible onboarding errors.
///
/// 引导流程中展示给用户的错误。`Display` 即为界面上显示的文本。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum OnboardingError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least {min_len} characters")]
    PasswordTooShort { min_len: usize },
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("First and last name are required")]
    NameRequired,
    #[error("Names must be at most {max_len} characters")]
    NameTooLong { max_len: usize },
    /// Rejected or failed remote call; carries the API's detail text or a
    /// per-operation fallback.
    #[error("{message}")]
    Remote { message: String },
}

impl OnboardingError {
    /// Remote failure text: the API detail when there is one, else `fallback`.
    pub fn remote(detail: Option<String>, fallback: &str) -> Self {
        let message = detail
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        OnboardingError::Remote { message }
    }
}

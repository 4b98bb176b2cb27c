//! Checks run before any request is issued.
//!
//! These mirror the API's own request validation so obviously bad input never
//! costs a round trip. The API remains authoritative.

use super::credential::Password;
use super::error::OnboardingError;

/// Minimum password length accepted by the API.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Maximum length of a claimed first or last name.
pub const MAX_NAME_LEN: usize = 100;

pub fn validate_email(email: &str) -> Result<(), OnboardingError> {
    email_address::EmailAddress::parse_with_options(
        email.trim(),
        email_address::Options::default().with_required_tld(),
    )
    .map(|_| ())
    .map_err(|_| OnboardingError::InvalidEmail)
}

/// Mismatch is reported before length so the user fixes the confirmation first.
pub fn validate_password(password: &Password, confirm: &Password) -> Result<(), OnboardingError> {
    if password != confirm {
        return Err(OnboardingError::PasswordMismatch);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(OnboardingError::PasswordTooShort {
            min_len: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Trim and check a first/last name pair for a claim.
pub fn normalize_claim_name(
    first_name: &str,
    last_name: &str,
) -> Result<(String, String), OnboardingError> {
    let first = first_name.trim();
    let last = last_name.trim();
    if first.is_empty() || last.is_empty() {
        return Err(OnboardingError::NameRequired);
    }
    if first.chars().count() > MAX_NAME_LEN || last.chars().count() > MAX_NAME_LEN {
        return Err(OnboardingError::NameTooLong {
            max_len: MAX_NAME_LEN,
        });
    }
    Ok((first.to_string(), last.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_tld() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("  ada@example.com ").is_ok());
        assert_eq!(validate_email("ada@localhost"), Err(OnboardingError::InvalidEmail));
        assert_eq!(validate_email(""), Err(OnboardingError::InvalidEmail));
        assert_eq!(validate_email("not-an-email"), Err(OnboardingError::InvalidEmail));
    }

    #[test]
    fn password_mismatch_is_reported_first() {
        let result = validate_password(&Password::new("abc"), &Password::new("abd"));
        assert_eq!(result, Err(OnboardingError::PasswordMismatch));

        let result = validate_password(&Password::new("abc123"), &Password::new("abc124"));
        assert_eq!(result, Err(OnboardingError::PasswordMismatch));
    }

    #[test]
    fn password_shorter_than_minimum_is_rejected() {
        let result = validate_password(&Password::new("abc12"), &Password::new("abc12"));
        assert_eq!(result, Err(OnboardingError::PasswordTooShort { min_len: 6 }));
        assert!(validate_password(&Password::new("abc123"), &Password::new("abc123")).is_ok());
    }

    #[test]
    fn claim_names_are_trimmed_and_required() {
        assert_eq!(
            normalize_claim_name("  Ada ", "Lovelace\n"),
            Ok(("Ada".to_string(), "Lovelace".to_string()))
        );
        assert_eq!(normalize_claim_name(" ", "Lovelace"), Err(OnboardingError::NameRequired));
        assert_eq!(
            normalize_claim_name(&"a".repeat(101), "Lovelace"),
            Err(OnboardingError::NameTooLong { max_len: 100 })
        );
    }
}

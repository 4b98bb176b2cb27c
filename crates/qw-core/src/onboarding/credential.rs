use std::fmt;
use zeroize::Zeroize;

/// Declares a string credential that never shows up in logs.
///
/// 敏感字符串：
/// - Debug / Display 不输出真实内容
/// - Drop 时清零内存
macro_rules! secret_string {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name {
            inner: String,
        }

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self {
                    inner: value.into(),
                }
            }

            /// Borrow the inner secret as &str.
            pub fn expose(&self) -> &str {
                &self.inner
            }

            pub fn is_empty(&self) -> bool {
                self.inner.is_empty()
            }

            pub fn len(&self) -> usize {
                self.inner.chars().count()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}([REDACTED])", stringify!($name))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[REDACTED]")
            }
        }

        impl Drop for $name {
            fn drop(&mut self) {
                self.inner.zeroize();
            }
        }
    };
}

secret_string!(
    /// Short-lived bearer credential scoped to one onboarding flow.
    ///
    /// Lives only in the session-scoped store; it must never be persisted.
    OnboardingToken
);

secret_string!(
    /// Long-lived session credential issued once the password is set.
    AccessToken
);

secret_string!(
    /// Password typed by the user during onboarding.
    Password
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_and_display_are_redacted() {
        let token = OnboardingToken::new("eyJhbGciOi.secret");
        assert_eq!(format!("{:?}", token), "OnboardingToken([REDACTED])");
        assert_eq!(format!("{}", token), "[REDACTED]");
        assert_eq!(token.expose(), "eyJhbGciOi.secret");
    }

    #[test]
    fn password_length_counts_chars() {
        let password = Password::new("pässwd");
        assert_eq!(password.len(), 6);
        assert!(!password.is_empty());
    }
}

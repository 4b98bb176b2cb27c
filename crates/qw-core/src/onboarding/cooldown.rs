use serde::{Deserialize, Serialize};

/// Seconds a user waits between verification code sends.
pub const RESEND_COOLDOWN_SECS: u32 = 60;

/// Client-side resend throttle.
///
/// Advisory only: the API enforces its own rate limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cooldown {
    remaining: u32,
}

impl Cooldown {
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_ready(&self) -> bool {
        self.remaining == 0
    }

    /// Reset to the full interval after a successful send.
    pub fn start(&mut self) {
        self.remaining = RESEND_COOLDOWN_SECS;
    }

    /// One second elapsed. Saturates at zero.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

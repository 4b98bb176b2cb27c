//! Server-reported onboarding step and the UI phase it maps to.

use serde::{Deserialize, Serialize};

/// Raw onboarding step as reported by the API.
///
/// 0 = unclaimed, 1 = collect email, 2 = verify code, 3 = set password,
/// 5 = onboarding finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Step(pub i32);

/// Step value the API reports once onboarding is finished.
pub const COMPLETED_STEP: i32 = 5;

/// One of the three forms the onboarding flow renders.
///
/// 引导流程渲染的三个阶段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    CollectEmail,
    VerifyCode,
    SetPassword,
}

/// Where a step leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepTarget {
    Phase(Phase),
    /// Step 5 and above: nothing left to render here.
    Completed,
}

impl Step {
    pub fn target(self) -> StepTarget {
        match self.0 {
            0 | 1 => StepTarget::Phase(Phase::CollectEmail),
            2 => StepTarget::Phase(Phase::VerifyCode),
            3 => StepTarget::Phase(Phase::SetPassword),
            s if s >= COMPLETED_STEP => StepTarget::Completed,
            other => {
                #[cfg(feature = "tracing")]
                tracing::warn!(step = other, "unknown onboarding step, rendering email form");
                let _ = other;
                StepTarget::Phase(Phase::CollectEmail)
            }
        }
    }

    pub fn is_completed(self) -> bool {
        self.0 >= COMPLETED_STEP
    }
}

impl From<i32> for Step {
    fn from(value: i32) -> Self {
        Step(value)
    }
}

impl Phase {
    /// 1-based position in the progress indicator.
    pub fn position(self) -> u8 {
        match self {
            Phase::CollectEmail => 1,
            Phase::VerifyCode => 2,
            Phase::SetPassword => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::CollectEmail => "Welcome",
            Phase::VerifyCode => "Verify",
            Phase::SetPassword => "Password",
        }
    }

    pub const ALL: [Phase; 3] = [Phase::CollectEmail, Phase::VerifyCode, Phase::SetPassword];
}

//! Verification state machine.
//!
//! Defines a pure state transition function for the website verification
//! sub-flow. Checks are meta tag first, then DNS TXT; the first
//! confirmation wins.

use serde::{Deserialize, Serialize};

use super::proof::ProofMethod;

/// Verification status.
///
/// 验证状态。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verifying,
    Verified,
    Failed,
}

/// Verification sub-flow state. `skipped` is orthogonal to `status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationState {
    pub status: VerificationStatus,
    pub skipped: bool,
}

impl VerificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify (or retry) is offered.
    pub fn can_verify(&self) -> bool {
        !self.skipped
            && matches!(
                self.status,
                VerificationStatus::Pending | VerificationStatus::Failed
            )
    }

    pub fn can_skip(&self) -> bool {
        self.can_verify()
    }

    pub fn is_verified(&self) -> bool {
        self.status == VerificationStatus::Verified
    }

    /// Static message for the current state, if any.
    pub fn notice(&self) -> Option<&'static str> {
        if self.skipped {
            return Some("Verification skipped. You can verify your website later.");
        }
        match self.status {
            VerificationStatus::Pending => None,
            VerificationStatus::Verifying => Some("Verifying website ownership..."),
            VerificationStatus::Verified => Some("Website verified successfully."),
            VerificationStatus::Failed => {
                Some("Verification Failed. Unable to verify. Please try again or skip.")
            }
        }
    }
}

/// Events that drive the verification sub-flow.
///
/// 驱动验证流程的事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationEvent {
    /// User pressed Verify (or Retry).
    VerifyRequested,
    /// A remote check finished. Errors count as `confirmed: false`.
    CheckCompleted {
        method: ProofMethod,
        confirmed: bool,
    },
    /// User chose to verify later.
    SkipRequested,
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationAction {
    Check { method: ProofMethod },
}

/// Pure verification state machine.
///
/// 纯状态机：不包含副作用。
pub struct VerificationStateMachine;

impl VerificationStateMachine {
    pub fn transition(
        state: VerificationState,
        event: VerificationEvent,
    ) -> (VerificationState, Vec<VerificationAction>) {
        if state.skipped {
            return (state, Vec::new());
        }

        match (state.status, event) {
            (
                VerificationStatus::Pending | VerificationStatus::Failed,
                VerificationEvent::VerifyRequested,
            ) => (
                VerificationState {
                    status: VerificationStatus::Verifying,
                    skipped: false,
                },
                vec![VerificationAction::Check {
                    method: ProofMethod::MetaTag,
                }],
            ),
            (
                VerificationStatus::Verifying,
                VerificationEvent::CheckCompleted {
                    confirmed: true, ..
                },
            ) => (
                VerificationState {
                    status: VerificationStatus::Verified,
                    skipped: false,
                },
                Vec::new(),
            ),
            (
                VerificationStatus::Verifying,
                VerificationEvent::CheckCompleted {
                    method: ProofMethod::MetaTag,
                    confirmed: false,
                },
            ) => (
                state,
                vec![VerificationAction::Check {
                    method: ProofMethod::DnsTxt,
                }],
            ),
            (
                VerificationStatus::Verifying,
                VerificationEvent::CheckCompleted {
                    method: ProofMethod::DnsTxt,
                    confirmed: false,
                },
            ) => (
                VerificationState {
                    status: VerificationStatus::Failed,
                    skipped: false,
                },
                Vec::new(),
            ),
            (
                VerificationStatus::Pending | VerificationStatus::Failed,
                VerificationEvent::SkipRequested,
            ) => (
                VerificationState {
                    status: VerificationStatus::Pending,
                    skipped: true,
                },
                Vec::new(),
            ),
            (_, _event) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?state, event = ?_event, "verification event ignored");
                (state, Vec::new())
            }
        }
    }
}

use serde::Serialize;

/// Shown when the create-publisher request never got an answer.
pub const SUBMISSION_UNREACHABLE_MESSAGE: &str =
    "We couldn't reach the server. Please check your connection and try again.";

/// Shown when the server declined without saying why.
pub const SUBMISSION_REJECTED_FALLBACK_MESSAGE: &str = "Failed to create publisher account";

/// Why a submission attempt failed. Both kinds can be retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionFailure {
    /// The API answered and declined.
    Rejected,
    /// The API could not be reached or its answer could not be read.
    Unreachable,
}

/// Lifecycle of the create-publisher call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    #[serde(rename_all = "camelCase")]
    Submitted { verification_required: bool },
    Failed {
        failure: SubmissionFailure,
        message: String,
    },
}

impl SubmissionState {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionState::Submitted { .. })
    }

    pub fn can_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed { .. })
    }

    pub fn unreachable() -> Self {
        SubmissionState::Failed {
            failure: SubmissionFailure::Unreachable,
            message: SUBMISSION_UNREACHABLE_MESSAGE.to_string(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        let message = message.into();
        SubmissionState::Failed {
            failure: SubmissionFailure::Rejected,
            message: if message.trim().is_empty() {
                SUBMISSION_REJECTED_FALLBACK_MESSAGE.to_string()
            } else {
                message
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_without_message_uses_fallback() {
        assert_eq!(
            SubmissionState::rejected(" "),
            SubmissionState::Failed {
                failure: SubmissionFailure::Rejected,
                message: SUBMISSION_REJECTED_FALLBACK_MESSAGE.into(),
            }
        );
    }

    #[test]
    fn failed_submissions_can_be_retried() {
        assert!(SubmissionState::unreachable().can_submit());
        assert!(SubmissionState::rejected("Email already used").can_submit());
        assert!(!SubmissionState::Submitting.can_submit());
        assert!(!SubmissionState::Submitted {
            verification_required: false
        }
        .can_submit());
    }

    #[test]
    fn serializes_with_state_tag() {
        let json = serde_json::to_value(SubmissionState::Submitted {
            verification_required: true,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "state": "submitted", "verificationRequired": true })
        );
    }
}

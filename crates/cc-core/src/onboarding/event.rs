use super::error_map::ErrorMap;
use super::submission::SubmissionState;
use super::wizard::Step;
use crate::verification::VerificationState;

/// Facts emitted while an onboarding session changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingEvent {
    StepChanged { from: Step, to: Step },
    ValidationFailed { errors: ErrorMap },
    VerificationChanged { state: VerificationState },
    SubmissionChanged { state: SubmissionState },
}

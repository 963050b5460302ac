use async_trait::async_trait;
use tracing::{debug, info};

use cc_core::onboarding::OnboardingEvent;
use cc_core::ports::OnboardingEventPort;

/// Event port that only writes onboarding events to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingOnboardingEvents;

#[async_trait]
impl OnboardingEventPort for TracingOnboardingEvents {
    async fn emit(&self, event: OnboardingEvent) {
        match event {
            OnboardingEvent::StepChanged { from, to } => {
                info!(from = from.index(), to = to.index(), "onboarding step changed");
            }
            OnboardingEvent::ValidationFailed { errors } => {
                for (field, error) in errors.iter() {
                    debug!(field = field.key(), %error, "onboarding field invalid");
                }
            }
            OnboardingEvent::VerificationChanged { state } => {
                info!(status = ?state.status, skipped = state.skipped, "website verification changed");
            }
            OnboardingEvent::SubmissionChanged { state } => {
                info!(state = ?state, "publisher submission changed");
            }
        }
    }
}

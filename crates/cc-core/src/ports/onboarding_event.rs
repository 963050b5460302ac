use crate::onboarding::OnboardingEvent;

#[async_trait::async_trait]
pub trait OnboardingEventPort: Send + Sync {
    async fn emit(&self, event: OnboardingEvent);
}

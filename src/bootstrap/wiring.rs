//! Dependency wiring: config in, orchestrator and use cases out.

use std::sync::Arc;

use anyhow::Context;

use cc_app::{CheckWebsiteOwnership, OnboardingOrchestrator};
use cc_core::config::{ApiConfig, AppConfig};
use cc_core::onboarding::OnboardingRecord;
use cc_infra::{HttpApiClient, InMemoryCurrentUser, TracingOnboardingEvents};

pub struct OnboardingDeps {
    pub orchestrator: OnboardingOrchestrator,
    pub current_user: Arc<InMemoryCurrentUser>,
}

pub fn build_http_client(config: &ApiConfig) -> anyhow::Result<Arc<HttpApiClient>> {
    let client = HttpApiClient::new(config)
        .with_context(|| format!("Failed to set up API client for {}", config.base_url))?;
    Ok(Arc::new(client))
}

/// Orchestrator for one wizard session, starting from `record`.
pub fn build_onboarding(config: &AppConfig, record: OnboardingRecord) -> anyhow::Result<OnboardingDeps> {
    let client = build_http_client(&config.api)?;
    let current_user = Arc::new(InMemoryCurrentUser::new());

    let orchestrator = OnboardingOrchestrator::from_ports(
        client.clone(),
        client,
        current_user.clone(),
        Arc::new(TracingOnboardingEvents),
    )
    .with_initial_record(record);

    Ok(OnboardingDeps {
        orchestrator,
        current_user,
    })
}

pub fn build_website_check(config: &AppConfig) -> anyhow::Result<CheckWebsiteOwnership> {
    Ok(CheckWebsiteOwnership::new(build_http_client(&config.api)?))
}

use std::sync::Arc;

use mockito::{Matcher, Server};
use serde_json::json;

use cc_app::OnboardingOrchestrator;
use cc_core::config::ApiConfig;
use cc_core::onboarding::{AdvanceOutcome, Field, SubmissionState, WizardPhase};
use cc_core::ports::CurrentUserPort;
use cc_core::verification::VerificationStatus;
use cc_infra::{HttpApiClient, InMemoryCurrentUser, TracingOnboardingEvents};

fn orchestrator(base_url: String) -> (OnboardingOrchestrator, Arc<InMemoryCurrentUser>) {
    let client = Arc::new(
        HttpApiClient::new(&ApiConfig {
            base_url,
            timeout_secs: 5,
            auth_token: Some("session-token".into()),
        })
        .unwrap(),
    );
    let current_user = Arc::new(InMemoryCurrentUser::new());
    let orchestrator = OnboardingOrchestrator::from_ports(
        client.clone(),
        client,
        current_user.clone(),
        Arc::new(TracingOnboardingEvents),
    );
    (orchestrator, current_user)
}

#[tokio::test]
async fn submit_then_verify_through_dns_fallback() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", "/api/publisher/create")
        .match_header("authorization", "Bearer session-token")
        .match_body(Matcher::PartialJson(json!({
            "fullName": "Jane Doe",
            "website": "https://blog.example.com"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "status": true,
                "message": "Publisher created",
                "user": {"_id": "u42", "fullName": "Jane Doe"},
                "token": "fresh-jwt"
            })
            .to_string(),
        )
        .create_async()
        .await;
    let meta = server
        .mock("GET", "/api/check-meta")
        .match_query(Matcher::UrlEncoded("domain".into(), "blog.example.com".into()))
        .with_status(200)
        .with_body(r#"{"status":false,"message":"Meta tag not found"}"#)
        .expect(1)
        .create_async()
        .await;
    let dns = server
        .mock("GET", "/api/check-dns")
        .match_query(Matcher::UrlEncoded("domain".into(), "blog.example.com".into()))
        .with_status(200)
        .with_body(r#"{"status":true,"message":"TXT record found"}"#)
        .expect(1)
        .create_async()
        .await;

    let (orchestrator, current_user) = orchestrator(server.url());
    orchestrator.update_field(Field::FullName, "Jane Doe").await;
    orchestrator.update_field(Field::PhoneNumber, "+1 (555) 010-9999").await;
    orchestrator.update_field(Field::CountryCode, "+1").await;
    orchestrator
        .update_field(Field::Website, "https://blog.example.com")
        .await;
    assert!(matches!(
        orchestrator.advance().await,
        AdvanceOutcome::Advanced { .. }
    ));

    let submitted = orchestrator.submit().await.unwrap();
    assert_eq!(
        submitted,
        SubmissionState::Submitted {
            verification_required: true
        }
    );
    let verification = orchestrator.verify().await.unwrap();
    assert_eq!(verification.status, VerificationStatus::Verified);

    create.assert_async().await;
    meta.assert_async().await;
    dns.assert_async().await;
    assert_eq!(
        orchestrator.snapshot().await.phase,
        WizardPhase::VerifiedAndSubmitted
    );
    let user = current_user.current_user().unwrap();
    assert_eq!(user.user.id, "u42");
    assert_eq!(user.auth_token.as_deref(), Some("fresh-jwt"));
}

#[tokio::test]
async fn server_outage_leaves_submission_retryable() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/publisher/create")
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let (orchestrator, current_user) = orchestrator(server.url());
    orchestrator.update_field(Field::FullName, "Jane Doe").await;
    orchestrator.update_field(Field::PhoneNumber, "9876543210").await;
    orchestrator.advance().await;

    let state = orchestrator.submit().await.unwrap();

    assert!(matches!(state, SubmissionState::Failed { .. }));
    assert!(state.can_submit());
    assert!(current_user.current_user().is_none());
    assert!(!orchestrator.snapshot().await.busy);
}

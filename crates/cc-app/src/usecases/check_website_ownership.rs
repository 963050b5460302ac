use std::sync::Arc;

use tracing::{debug, warn};

use cc_core::ports::WebsiteCheckPort;
use cc_core::verification::{
    ProofMethod, VerificationAction, VerificationEvent, VerificationState,
    VerificationStateMachine, VerificationTarget, VerificationToken,
};

/// Use case performing one remote ownership check.
///
/// Any failure to get an answer counts as "not confirmed": a missing proof
/// and an unreachable API both end in the same retryable state.
pub struct CheckWebsiteOwnership {
    checks: Arc<dyn WebsiteCheckPort>,
}

impl CheckWebsiteOwnership {
    pub fn new(checks: Arc<dyn WebsiteCheckPort>) -> Self {
        Self { checks }
    }

    /// Run the check requested by the state machine and report its result
    /// as the next event.
    pub async fn execute(
        &self,
        action: VerificationAction,
        target: &VerificationTarget,
        token: &VerificationToken,
    ) -> VerificationEvent {
        let VerificationAction::Check { method } = action;
        let domain = target.domain();

        let result = match method {
            ProofMethod::MetaTag => self.checks.check_meta_tag(domain, token).await,
            ProofMethod::DnsTxt => self.checks.check_dns_txt(domain, token).await,
        };

        let confirmed = match result {
            Ok(found) => {
                debug!(method = method.as_str(), domain, found, "ownership check answered");
                found
            }
            Err(err) => {
                warn!(
                    method = method.as_str(),
                    domain,
                    error = %err,
                    "ownership check failed, treating as not confirmed"
                );
                false
            }
        };

        VerificationEvent::CheckCompleted { method, confirmed }
    }

    /// Result of a check that could not be made because the website has no
    /// domain to check.
    pub fn not_confirmed(action: VerificationAction) -> VerificationEvent {
        let VerificationAction::Check { method } = action;
        VerificationEvent::CheckCompleted {
            method,
            confirmed: false,
        }
    }

    /// Run a whole verification attempt outside of a wizard session and
    /// return the settled state (`Verified` or `Failed`).
    pub async fn verify(
        &self,
        target: &VerificationTarget,
        token: &VerificationToken,
    ) -> VerificationState {
        let mut current = VerificationState::new();
        let mut pending_events = vec![VerificationEvent::VerifyRequested];

        while let Some(event) = pending_events.pop() {
            let (next, actions) = VerificationStateMachine::transition(current, event);
            current = next;
            for action in actions {
                pending_events.push(self.execute(action, target, token).await);
            }
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cc_core::ports::ApiError;
    use cc_core::verification::VerificationStatus;

    mockall::mock! {
        pub Checks {}

        #[async_trait]
        impl WebsiteCheckPort for Checks {
            async fn check_meta_tag(
                &self,
                domain: &str,
                token: &VerificationToken,
            ) -> Result<bool, ApiError>;
            async fn check_dns_txt(
                &self,
                domain: &str,
                token: &VerificationToken,
            ) -> Result<bool, ApiError>;
        }
    }

    fn target() -> VerificationTarget {
        VerificationTarget::from_website("https://example.com").unwrap()
    }

    #[tokio::test]
    async fn meta_check_uses_domain_and_token() {
        let mut checks = MockChecks::new();
        checks
            .expect_check_meta_tag()
            .withf(|domain, token| domain == "example.com" && token.as_str() == "AB12CD34EF56")
            .times(1)
            .returning(|_, _| Ok(true));
        checks.expect_check_dns_txt().never();

        let use_case = CheckWebsiteOwnership::new(Arc::new(checks));
        let event = use_case
            .execute(
                VerificationAction::Check {
                    method: ProofMethod::MetaTag,
                },
                &target(),
                &VerificationToken::from("AB12CD34EF56"),
            )
            .await;

        assert_eq!(
            event,
            VerificationEvent::CheckCompleted {
                method: ProofMethod::MetaTag,
                confirmed: true
            }
        );
    }

    #[tokio::test]
    async fn standalone_verify_falls_back_to_dns() {
        let mut checks = MockChecks::new();
        checks
            .expect_check_meta_tag()
            .times(1)
            .returning(|_, _| Ok(false));
        checks
            .expect_check_dns_txt()
            .withf(|domain, _| domain == "example.com")
            .times(1)
            .returning(|_, _| Ok(true));

        let use_case = CheckWebsiteOwnership::new(Arc::new(checks));
        let state = use_case
            .verify(&target(), &VerificationToken::from("AB12CD34EF56"))
            .await;

        assert!(state.is_verified());
    }

    #[tokio::test]
    async fn standalone_verify_fails_when_nothing_is_found() {
        let mut checks = MockChecks::new();
        checks.expect_check_meta_tag().returning(|_, _| Ok(false));
        checks.expect_check_dns_txt().returning(|_, _| Ok(false));

        let use_case = CheckWebsiteOwnership::new(Arc::new(checks));
        let state = use_case
            .verify(&target(), &VerificationToken::from("AB12CD34EF56"))
            .await;

        assert_eq!(state.status, VerificationStatus::Failed);
        assert!(state.can_verify());
    }

    #[tokio::test]
    async fn transport_error_is_not_a_confirmation() {
        let mut checks = MockChecks::new();
        checks.expect_check_dns_txt().times(1).returning(|_, _| {
            Err(ApiError::Transport {
                endpoint: "/api/check-dns".into(),
                message: "connection refused".into(),
            })
        });

        let use_case = CheckWebsiteOwnership::new(Arc::new(checks));
        let event = use_case
            .execute(
                VerificationAction::Check {
                    method: ProofMethod::DnsTxt,
                },
                &target(),
                &VerificationToken::from("AB12CD34EF56"),
            )
            .await;

        assert_eq!(
            event,
            VerificationEvent::CheckCompleted {
                method: ProofMethod::DnsTxt,
                confirmed: false
            }
        );
    }
}

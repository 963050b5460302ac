//! Onboarding orchestrator.
//!
//! This module coordinates the wizard session, the verification state
//! machine and the remote calls.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info, info_span, warn, Instrument};

use cc_core::{
    onboarding::{
        AccountType, AdvanceOutcome, DescriptionCounter, ErrorMap, Field, OnboardingEvent,
        OnboardingRecord, OnboardingSession, Step, SubmissionState, WizardPhase,
    },
    ports::{CurrentUserPort, OnboardingEventPort, PublisherApiPort, WebsiteCheckPort},
    verification::{
        VerificationEvent, VerificationState, VerificationStateMachine,
        VerificationTarget, VerificationToken,
    },
};

use super::context::OnboardingContext;
use crate::usecases::{CheckWebsiteOwnership, SubmitPublisher, SubmitPublisherError};

/// Errors produced by the onboarding orchestrator.
///
/// Remote failures are not errors here: they end up in the verification or
/// submission state. These variants are calls that were refused outright.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    #[error("another request is still in flight")]
    Busy,
    #[error("operation requires step {expected:?}, wizard is on {actual:?}")]
    WrongStep { expected: Step, actual: Step },
    #[error("no website was provided")]
    NoWebsite,
    #[error("verification is not available in state {0:?}")]
    VerificationUnavailable(VerificationState),
    #[error("publisher account was already submitted")]
    AlreadySubmitted,
}

/// Read model of the session, as a front end needs it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingSnapshot {
    pub step: Step,
    pub completed_steps: Vec<Step>,
    pub phase: WizardPhase,
    pub record: OnboardingRecord,
    pub errors: ErrorMap,
    pub description: DescriptionCounter,
    pub verification_available: bool,
    pub verification: VerificationState,
    pub verification_notice: Option<&'static str>,
    pub submission: SubmissionState,
    pub busy: bool,
}

impl OnboardingSnapshot {
    fn capture(session: &OnboardingSession, busy: bool) -> Self {
        let record = session.form.record();
        Self {
            step: session.sequencer.current(),
            completed_steps: session.sequencer.completed().collect(),
            phase: session.phase(),
            record: record.clone(),
            errors: session.form.errors().clone(),
            description: record.description_counter(),
            verification_available: session.verification_available(),
            verification: session.verification,
            verification_notice: session
                .verification_available()
                .then(|| session.verification.notice())
                .flatten(),
            submission: session.submission.clone(),
            busy,
        }
    }
}

/// Orchestrator that drives one onboarding session and its side effects.
pub struct OnboardingOrchestrator {
    context: Arc<OnboardingContext>,
    submit_publisher: Arc<SubmitPublisher>,
    check_ownership: Arc<CheckWebsiteOwnership>,
    event_port: Arc<dyn OnboardingEventPort>,
}

impl OnboardingOrchestrator {
    pub fn new(
        submit_publisher: Arc<SubmitPublisher>,
        check_ownership: Arc<CheckWebsiteOwnership>,
        event_port: Arc<dyn OnboardingEventPort>,
    ) -> Self {
        Self {
            context: OnboardingContext::default().arc(),
            submit_publisher,
            check_ownership,
            event_port,
        }
    }

    pub fn from_ports(
        publisher_api: Arc<dyn PublisherApiPort>,
        website_checks: Arc<dyn WebsiteCheckPort>,
        current_user: Arc<dyn CurrentUserPort>,
        event_port: Arc<dyn OnboardingEventPort>,
    ) -> Self {
        Self::new(
            Arc::new(SubmitPublisher::new(publisher_api, current_user)),
            Arc::new(CheckWebsiteOwnership::new(website_checks)),
            event_port,
        )
    }

    /// Start the session from a prefilled record instead of an empty one.
    pub fn with_initial_record(mut self, record: OnboardingRecord) -> Self {
        self.context = OnboardingContext::new(OnboardingSession::with_record(record)).arc();
        self
    }

    /// Drop the current session and start a fresh one with a new token.
    pub async fn reset(&self) {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.context.set_session(OnboardingSession::new()).await;
        info!("onboarding session reset");
    }

    pub async fn snapshot(&self) -> OnboardingSnapshot {
        let session = self.context.session().await;
        OnboardingSnapshot::capture(&session, self.context.busy().is_busy())
    }

    pub async fn update_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let verification_reset = self
            .context
            .with_session(|session| {
                session
                    .update_field(field, value)
                    .then_some(session.verification)
            })
            .await;
        debug!(field = field.key(), "onboarding field updated");

        if let Some(state) = verification_reset {
            info!("website changed, verification back to pending");
            self.emit(OnboardingEvent::VerificationChanged { state }).await;
        }
    }

    pub async fn set_account_type(&self, account_type: AccountType) {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.context
            .with_session(|session| session.form.set_account_type(account_type))
            .await;
        debug!(account_type = account_type.as_str(), "onboarding account type changed");
    }

    pub async fn advance(&self) -> AdvanceOutcome {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let outcome = self
            .context
            .with_session(|session| session.sequencer.advance(&mut session.form))
            .await;

        match &outcome {
            AdvanceOutcome::Advanced { from, to } => {
                info!(from = ?from, to = ?to, "onboarding step transition");
                self.emit(OnboardingEvent::StepChanged {
                    from: *from,
                    to: *to,
                })
                .await;
            }
            AdvanceOutcome::Blocked { errors } => {
                debug!(error_count = errors.len(), "onboarding step blocked by validation");
                self.emit(OnboardingEvent::ValidationFailed {
                    errors: errors.clone(),
                })
                .await;
            }
            AdvanceOutcome::AtLastStep => debug!("advance requested on the last step"),
        }
        outcome
    }

    pub async fn retreat(&self) -> Step {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let (from, to) = self
            .context
            .with_session(|session| {
                let from = session.sequencer.current();
                (from, session.sequencer.retreat())
            })
            .await;

        if from != to {
            info!(from = ?from, to = ?to, "onboarding step transition");
            self.emit(OnboardingEvent::StepChanged { from, to }).await;
        }
        to
    }

    /// The session's verification token. Generated on first call, then
    /// returned unchanged until the session is reset.
    pub async fn verification_token(&self) -> VerificationToken {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.context
            .with_session(|session| session.form.verification_token().clone())
            .await
    }

    /// Run the meta-then-DNS verification until it settles.
    pub async fn verify(&self) -> Result<VerificationState, OnboardingError> {
        let _busy = self
            .context
            .busy()
            .try_acquire()
            .ok_or(OnboardingError::Busy)?;
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let (mut current, website, token) = self
            .context
            .with_session(|session| -> Result<_, OnboardingError> {
                ensure_verification_step(session)?;
                if !session.verification.can_verify() {
                    return Err(OnboardingError::VerificationUnavailable(
                        session.verification,
                    ));
                }
                let website = session.form.record().website.clone();
                let token = session.form.verification_token().clone();
                Ok((session.verification, website, token))
            })
            .await?;

        let target = match VerificationTarget::from_website(&website) {
            Ok(target) => Some(target),
            Err(err) => {
                warn!(error = %err, "website has no checkable domain, verification will fail");
                None
            }
        };

        let span = info_span!(
            "usecase.onboarding.verify",
            domain = target.as_ref().map(VerificationTarget::domain)
        );
        async {
            let mut pending_events = vec![VerificationEvent::VerifyRequested];

            while let Some(event) = pending_events.pop() {
                let from = current;
                let (next, actions) = VerificationStateMachine::transition(current, event);
                info!(from = ?from.status, to = ?next.status, event = ?event, "verification state transition");

                if next != from {
                    self.context
                        .with_session(|session| session.verification = next)
                        .await;
                    self.emit(OnboardingEvent::VerificationChanged { state: next })
                        .await;
                }
                current = next;

                for action in actions {
                    let follow_up = match &target {
                        Some(target) => self.check_ownership.execute(action, target, &token).await,
                        None => CheckWebsiteOwnership::not_confirmed(action),
                    };
                    pending_events.push(follow_up);
                }
            }
        }
        .instrument(span)
        .await;

        Ok(current)
    }

    /// Defer verification. Verify stays disabled for the rest of the session.
    pub async fn skip_verification(&self) -> Result<VerificationState, OnboardingError> {
        let _busy = self
            .context
            .busy()
            .try_acquire()
            .ok_or(OnboardingError::Busy)?;
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let next = self
            .context
            .with_session(|session| -> Result<_, OnboardingError> {
                ensure_verification_step(session)?;
                if !session.verification.can_skip() {
                    return Err(OnboardingError::VerificationUnavailable(
                        session.verification,
                    ));
                }
                let (next, _) = VerificationStateMachine::transition(
                    session.verification,
                    VerificationEvent::SkipRequested,
                );
                session.verification = next;
                Ok(next)
            })
            .await?;

        info!("website verification skipped");
        self.emit(OnboardingEvent::VerificationChanged { state: next })
            .await;
        Ok(next)
    }

    /// Create the publisher account from the current record.
    ///
    /// Server rejections and transport failures come back as
    /// `SubmissionState::Failed`; the call can then be repeated.
    pub async fn submit(&self) -> Result<SubmissionState, OnboardingError> {
        let _busy = self
            .context
            .busy()
            .try_acquire()
            .ok_or(OnboardingError::Busy)?;
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let record = self
            .context
            .with_session(|session| -> Result<_, OnboardingError> {
                let actual = session.sequencer.current();
                if actual != Step::Verification {
                    return Err(OnboardingError::WrongStep {
                        expected: Step::Verification,
                        actual,
                    });
                }
                if !session.submission.can_submit() {
                    return Err(OnboardingError::AlreadySubmitted);
                }
                if session.form.record().has_website() {
                    session.form.verification_token();
                }
                session.submission = SubmissionState::Submitting;
                Ok(session.form.record().clone())
            })
            .await?;
        self.emit(OnboardingEvent::SubmissionChanged {
            state: SubmissionState::Submitting,
        })
        .await;

        let span = info_span!(
            "usecase.onboarding.submit",
            account_type = record.account_type.as_str()
        );
        let next = async {
            match self.submit_publisher.execute(&record).await {
                Ok(created) => {
                    if let Some(token) = created.server_token {
                        let adopted = self
                            .context
                            .with_session(|session| session.adopt_server_token(token))
                            .await;
                        if adopted {
                            info!("adopted server-issued verification token");
                        }
                    }
                    SubmissionState::Submitted {
                        verification_required: created.verification_required,
                    }
                }
                Err(SubmitPublisherError::Rejected { message }) => {
                    warn!(%message, "publisher creation rejected");
                    SubmissionState::rejected(message)
                }
                Err(SubmitPublisherError::Api(err)) => {
                    error!(error = %err, "publisher creation request failed");
                    SubmissionState::unreachable()
                }
            }
        }
        .instrument(span)
        .await;

        self.context
            .with_session(|session| session.submission = next.clone())
            .await;
        info!(state = ?next, "submission state transition");
        self.emit(OnboardingEvent::SubmissionChanged {
            state: next.clone(),
        })
        .await;
        Ok(next)
    }

    async fn emit(&self, event: OnboardingEvent) {
        self.event_port.emit(event).await;
    }
}

fn ensure_verification_step(session: &OnboardingSession) -> Result<(), OnboardingError> {
    let actual = session.sequencer.current();
    if actual != Step::Verification {
        return Err(OnboardingError::WrongStep {
            expected: Step::Verification,
            actual,
        });
    }
    if !session.form.record().has_website() {
        return Err(OnboardingError::NoWebsite);
    }
    Ok(())
}

//! Onboarding session aggregate.
//!
//! One session lives from wizard mount to navigation away. It owns the form,
//! the sequencer, the verification state and the submission state, so the
//! verification token stays stable for exactly one onboarding attempt.

use serde::Serialize;

use super::field::Field;
use super::form::FormState;
use super::record::OnboardingRecord;
use super::submission::SubmissionState;
use super::wizard::{Step, StepSequencer};
use crate::verification::{VerificationState, VerificationStatus, VerificationToken};

/// Where the wizard is, as far as the user is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum WizardPhase {
    CollectingBasicInfo,
    /// Step 2. Without a website this is the "no website provided" panel
    /// whose only action is submission.
    ReadyToSubmit { website: bool },
    Submitted,
    VerifiedAndSubmitted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingSession {
    pub form: FormState,
    pub sequencer: StepSequencer,
    pub verification: VerificationState,
    pub submission: SubmissionState,
}

impl OnboardingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: OnboardingRecord) -> Self {
        Self {
            form: FormState::with_record(record),
            ..Self::default()
        }
    }

    /// Set a form field. A verification outcome belongs to the website it
    /// was checked against, so a different website puts verification back
    /// to pending. Returns `true` when that reset happened.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        let value = value.into();
        let website_changed = field == Field::Website && self.form.record().website != value;
        self.form.update(field, value);

        if website_changed && self.verification != VerificationState::default() {
            self.verification = VerificationState::default();
            return true;
        }
        false
    }

    pub fn phase(&self) -> WizardPhase {
        if self.sequencer.current() == Step::BasicInfo {
            return WizardPhase::CollectingBasicInfo;
        }
        match (&self.submission, self.verification.status) {
            (SubmissionState::Submitted { .. }, VerificationStatus::Verified) => {
                WizardPhase::VerifiedAndSubmitted
            }
            (SubmissionState::Submitted { .. }, _) => WizardPhase::Submitted,
            _ => WizardPhase::ReadyToSubmit {
                website: self.form.record().has_website(),
            },
        }
    }

    /// Verification UI is shown on step 2 when a website was supplied.
    pub fn verification_available(&self) -> bool {
        self.sequencer.current() == Step::Verification && self.form.record().has_website()
    }

    /// Take over a token issued by the server, unless a check has already
    /// been made with the current one. Returns `true` when the token changed.
    pub fn adopt_server_token(&mut self, token: VerificationToken) -> bool {
        if self.form.existing_verification_token() == Some(&token) {
            return false;
        }
        if self.verification.status != VerificationStatus::Pending {
            return false;
        }
        self.form.replace_verification_token(token);
        true
    }
}

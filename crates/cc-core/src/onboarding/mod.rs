//! Onboarding domain module.
//!
//! This module defines the publisher onboarding wizard: the form record and
//! its validators, the step sequencer, and the session aggregate that ties
//! them to website verification and submission.

mod error_map;
pub mod event;
mod field;
mod form;
mod identity;
mod record;
pub mod session;
mod submission;
pub mod validation;
mod wizard;

pub use error_map::ErrorMap;
pub use event::OnboardingEvent;
pub use field::Field;
pub use form::FormState;
pub use identity::Identity;
pub use record::{AccountType, DescriptionCounter, OnboardingRecord, DESCRIPTION_SOFT_LIMIT};
pub use session::{OnboardingSession, WizardPhase};
pub use submission::{
    SubmissionFailure, SubmissionState, SUBMISSION_REJECTED_FALLBACK_MESSAGE,
    SUBMISSION_UNREACHABLE_MESSAGE,
};
pub use validation::FieldError;
pub use wizard::{AdvanceOutcome, Step, StepSequencer};

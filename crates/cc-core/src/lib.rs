//! # cc-core
//!
//! Core domain models and business logic for Coin Cartel publisher onboarding.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the onboarding record and its validators, the step sequencer, the website
//! verification state machine, and the ports implemented by outer layers.

pub mod config;
pub mod onboarding;
pub mod ports;
pub mod publisher;
pub mod verification;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use onboarding::{
    AccountType, ErrorMap, Field, FieldError, FormState, Identity, OnboardingRecord,
    OnboardingSession, Step, StepSequencer, SubmissionState, WizardPhase,
};
pub use publisher::{AuthenticatedUser, PublisherUser};
pub use verification::{
    VerificationState, VerificationStatus, VerificationTarget, VerificationToken,
};

//! Onboarding wizard orchestration.
//!
//! One [`OnboardingOrchestrator`] owns one wizard session. Every mutating call
//! goes through the session context's dispatch lock; the remote calls
//! (submit, verify, skip) additionally hold the busy flag.

mod busy;
mod context;
mod orchestrator;

pub use busy::{BusyFlag, BusyGuard};
pub use context::OnboardingContext;
pub use orchestrator::{OnboardingError, OnboardingOrchestrator, OnboardingSnapshot};

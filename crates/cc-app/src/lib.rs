//! Coin Cartel Onboarding Orchestration Layer
//!
//! This crate contains the onboarding use cases and the orchestrator that
//! drives one wizard session against the ports defined in `cc-core`.

pub mod usecases;

pub use usecases::{
    CheckWebsiteOwnership, OnboardingError, OnboardingOrchestrator, OnboardingSnapshot,
    SubmitPublisher,
};

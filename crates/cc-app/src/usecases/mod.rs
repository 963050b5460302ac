//! Onboarding use cases
//!
//! [user input]
//!       ↓
//! OnboardingOrchestrator  (form, sequencer, token, busy flag)
//!       ↓                          ↓
//! SubmitPublisher          CheckWebsiteOwnership
//!       ↓                          ↓
//! PublisherApiPort         WebsiteCheckPort

pub mod check_website_ownership;
pub mod onboarding;
pub mod submit_publisher;

pub use check_website_ownership::CheckWebsiteOwnership;
pub use onboarding::{OnboardingError, OnboardingOrchestrator, OnboardingSnapshot};
pub use submit_publisher::{PublisherCreated, SubmitPublisher, SubmitPublisherError};

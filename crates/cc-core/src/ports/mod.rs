//! Port interfaces for the application layer
//!
//! Ports define the contract between the onboarding use cases and the
//! infrastructure that talks to the remote API. This follows Hexagonal
//! Architecture principles, keeping the wizard logic independent of the
//! HTTP client.

mod current_user;
pub mod errors;
mod onboarding_event;
mod publisher_api;
mod website_check;

pub use current_user::CurrentUserPort;
pub use errors::ApiError;
pub use onboarding_event::OnboardingEventPort;
pub use publisher_api::PublisherApiPort;
pub use website_check::WebsiteCheckPort;

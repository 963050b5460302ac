//! Infrastructure adapters: the reqwest client for the publisher API,
//! the in-memory current-user holder, the event log and file exports.

pub mod current_user;
pub mod event_log;
pub mod fs;
pub mod http;

pub use current_user::InMemoryCurrentUser;
pub use event_log::TracingOnboardingEvents;
pub use fs::DnsRecordFile;
pub use http::{HttpApiClient, HttpClientError};

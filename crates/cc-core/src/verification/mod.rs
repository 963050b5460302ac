//! Website ownership verification.
//!
//! A publisher proves control of the declared website by publishing the
//! session's verification token, either as a meta tag in the home page head
//! or as a DNS TXT record. The remote API performs the actual lookups.

mod proof;
pub mod state_machine;
mod token;

pub use proof::{
    dns_txt_record, meta_tag_snippet, ProofMethod, TargetError, VerificationTarget,
    DNS_TXT_FILE_NAME, VERIFICATION_NAMESPACE,
};
pub use state_machine::{
    VerificationAction, VerificationEvent, VerificationState, VerificationStateMachine,
    VerificationStatus,
};
pub use token::{VerificationToken, TOKEN_LEN};

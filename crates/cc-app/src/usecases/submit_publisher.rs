use std::sync::Arc;

use tracing::{info, warn};

use cc_core::onboarding::OnboardingRecord;
use cc_core::ports::{ApiError, CurrentUserPort, PublisherApiPort};
use cc_core::publisher::{AuthenticatedUser, CreatePublisherRequest};
use cc_core::verification::VerificationToken;

#[derive(Debug, thiserror::Error)]
pub enum SubmitPublisherError {
    /// The API answered and declined; `message` comes from the server.
    #[error("publisher creation rejected: {message}")]
    Rejected { message: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Outcome of a successful creation.
#[derive(Debug, Clone, PartialEq)]
pub struct PublisherCreated {
    /// A website was supplied, so the verification sub-flow opens next.
    pub verification_required: bool,
    pub server_token: Option<VerificationToken>,
}

/// Use case for the create-publisher call.
///
/// Stores the returned user into the current-user sink on success.
pub struct SubmitPublisher {
    api: Arc<dyn PublisherApiPort>,
    current_user: Arc<dyn CurrentUserPort>,
}

impl SubmitPublisher {
    pub fn new(api: Arc<dyn PublisherApiPort>, current_user: Arc<dyn CurrentUserPort>) -> Self {
        Self { api, current_user }
    }

    pub async fn execute(
        &self,
        record: &OnboardingRecord,
    ) -> Result<PublisherCreated, SubmitPublisherError> {
        let request = CreatePublisherRequest::from_record(record);
        let response = self.api.create_publisher(&request).await?;

        if !response.status {
            return Err(SubmitPublisherError::Rejected {
                message: response.message,
            });
        }

        match response.user {
            Some(user) => {
                info!(user_id = %user.id, "publisher created");
                self.current_user.set_current_user(AuthenticatedUser {
                    user,
                    auth_token: response.token,
                });
            }
            None => warn!("publisher created but response carried no user"),
        }

        let verification_required = record.has_website();
        Ok(PublisherCreated {
            verification_required,
            server_token: response
                .verification_token
                .filter(|_| verification_required),
        })
    }
}

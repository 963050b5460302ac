use async_trait::async_trait;

use crate::ports::ApiError;
use crate::publisher::{CreatePublisherRequest, CreatePublisherResponse};

#[async_trait]
pub trait PublisherApiPort: Send + Sync {
    /// `POST /api/publisher/create`.
    async fn create_publisher(
        &self,
        request: &CreatePublisherRequest,
    ) -> Result<CreatePublisherResponse, ApiError>;
}

use async_trait::async_trait;
use tracing::{debug, warn};

use cc_core::ports::{ApiError, PublisherApiPort};
use cc_core::publisher::{CreatePublisherRequest, CreatePublisherResponse};

use super::{decode_error, status_error, transport_error, HttpApiClient, CREATE_PUBLISHER_PATH};

#[async_trait]
impl PublisherApiPort for HttpApiClient {
    async fn create_publisher(
        &self,
        request: &CreatePublisherRequest,
    ) -> Result<CreatePublisherResponse, ApiError> {
        let url = self.endpoint(CREATE_PUBLISHER_PATH)?;
        debug!(%url, account_type = request.account_type.as_str(), "POST create publisher");

        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| transport_error(CREATE_PUBLISHER_PATH, e))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(CREATE_PUBLISHER_PATH, e))?;

        // A declined request usually comes with a non-2xx status and a
        // readable envelope; keep the server's message in that case.
        match serde_json::from_slice::<CreatePublisherResponse>(&body) {
            Ok(parsed) if status.is_success() || !parsed.status => {
                if !status.is_success() {
                    warn!(status = status.as_u16(), message = %parsed.message, "create publisher declined");
                }
                Ok(parsed)
            }
            Ok(_) => Err(status_error(CREATE_PUBLISHER_PATH, status)),
            Err(_) if !status.is_success() => Err(status_error(CREATE_PUBLISHER_PATH, status)),
            Err(e) => Err(decode_error(CREATE_PUBLISHER_PATH, e)),
        }
    }
}

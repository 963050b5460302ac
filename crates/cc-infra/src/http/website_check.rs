use async_trait::async_trait;
use tracing::debug;

use cc_core::ports::{ApiError, WebsiteCheckPort};
use cc_core::verification::VerificationToken;

use super::envelope::StatusEnvelope;
use super::{
    decode_error, status_error, transport_error, HttpApiClient, CHECK_DNS_PATH, CHECK_META_PATH,
};

impl HttpApiClient {
    async fn check_ownership(
        &self,
        path: &'static str,
        domain: &str,
        token: &VerificationToken,
    ) -> Result<bool, ApiError> {
        let url = self.endpoint(path)?;

        let response = self
            .http
            .get(url)
            .query(&[("domain", domain), ("token", token.as_str())])
            .send()
            .await
            .map_err(|e| transport_error(path, e))?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| transport_error(path, e))?;

        let envelope = match serde_json::from_slice::<StatusEnvelope>(&body) {
            Ok(envelope) if status.is_success() || !envelope.status => envelope,
            Ok(_) => return Err(status_error(path, status)),
            Err(_) if !status.is_success() => return Err(status_error(path, status)),
            Err(e) => return Err(decode_error(path, e)),
        };

        debug!(
            endpoint = path,
            domain,
            found = envelope.status,
            message = %envelope.message,
            "website check answered"
        );
        Ok(envelope.status)
    }
}

#[async_trait]
impl WebsiteCheckPort for HttpApiClient {
    async fn check_meta_tag(
        &self,
        domain: &str,
        token: &VerificationToken,
    ) -> Result<bool, ApiError> {
        self.check_ownership(CHECK_META_PATH, domain, token).await
    }

    async fn check_dns_txt(
        &self,
        domain: &str,
        token: &VerificationToken,
    ) -> Result<bool, ApiError> {
        self.check_ownership(CHECK_DNS_PATH, domain, token).await
    }
}

use async_trait::async_trait;

use crate::ports::ApiError;
use crate::verification::VerificationToken;

/// Remote ownership checks. `Ok(false)` means the proof was not found.
#[async_trait]
pub trait WebsiteCheckPort: Send + Sync {
    /// `GET /api/check-meta`: is the meta tag on the domain's home page?
    async fn check_meta_tag(
        &self,
        domain: &str,
        token: &VerificationToken,
    ) -> Result<bool, ApiError>;

    /// `GET /api/check-dns`: is the TXT record published for the domain?
    async fn check_dns_txt(
        &self,
        domain: &str,
        token: &VerificationToken,
    ) -> Result<bool, ApiError>;
}

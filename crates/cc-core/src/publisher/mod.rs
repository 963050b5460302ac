//! Publisher account models exchanged with the remote API.

use serde::{Deserialize, Serialize};

use crate::onboarding::{AccountType, OnboardingRecord};
use crate::verification::VerificationToken;

/// Body of `POST /api/publisher/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePublisherRequest {
    pub account_type: AccountType,
    pub full_name: String,
    pub organization_name: String,
    pub phone_number: String,
    pub country_code: String,
    pub telegram_username: String,
    pub website: String,
    pub profile_link: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_token: Option<VerificationToken>,
}

impl CreatePublisherRequest {
    pub fn from_record(record: &OnboardingRecord) -> Self {
        Self {
            account_type: record.account_type,
            full_name: record.full_name.trim().to_string(),
            organization_name: record.organization_name.trim().to_string(),
            phone_number: record.phone_number.trim().to_string(),
            country_code: record.country_code.trim().to_string(),
            telegram_username: record.telegram_username.trim().to_string(),
            website: record.website.trim().to_string(),
            profile_link: record.profile_link.trim().to_string(),
            description: record.description.clone(),
            verification_token: record.verification_token.clone(),
        }
    }
}

/// Response of `POST /api/publisher/create`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePublisherResponse {
    pub status: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<PublisherUser>,
    /// Auth token for the updated account.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub verification_token: Option<VerificationToken>,
}

/// User object returned by the API. Only a few fields are interpreted;
/// the rest is kept as-is for whoever consumes the current user.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherUser {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// What the current-user sink holds after a successful submission.
#[derive(Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user: PublisherUser,
    pub auth_token: Option<String>,
}

impl std::fmt::Debug for AuthenticatedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedUser")
            .field("user", &self.user)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

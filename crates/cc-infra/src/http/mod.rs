//! reqwest client for the publisher API.
//!
//! One [`HttpApiClient`] implements both [`cc_core::ports::PublisherApiPort`]
//! and [`cc_core::ports::WebsiteCheckPort`].

mod envelope;
mod publisher;
mod website_check;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use url::Url;

use cc_core::config::ApiConfig;
use cc_core::ports::ApiError;

pub const CREATE_PUBLISHER_PATH: &str = "api/publisher/create";
pub const CHECK_META_PATH: &str = "api/check-meta";
pub const CHECK_DNS_PATH: &str = "api/check-dns";

#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    #[error("invalid API base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API auth token contains characters not allowed in a header")]
    InvalidAuthToken,
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, HttpClientError> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = config.auth_token.as_deref().filter(|t| !t.trim().is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
                .map_err(|_| HttpClientError::InvalidAuthToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(HttpClientError::Build)?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|e| ApiError::Transport {
            endpoint: path.to_string(),
            message: format!("invalid endpoint URL: {e}"),
        })
    }
}

/// Parse the configured base URL so that relative endpoint paths are
/// appended to it rather than replacing its last segment.
fn parse_base_url(raw: &str) -> Result<Url, HttpClientError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash).map_err(|source| HttpClientError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(HttpClientError::InvalidBaseUrl {
            url: raw.to_string(),
            source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
        });
    }
    Ok(url)
}

fn transport_error(endpoint: &str, error: reqwest::Error) -> ApiError {
    let message = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        format!("connection failed: {error}")
    } else {
        error.to_string()
    };
    ApiError::Transport {
        endpoint: endpoint.to_string(),
        message,
    }
}

fn status_error(endpoint: &str, status: StatusCode) -> ApiError {
    ApiError::Status {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
    }
}

fn decode_error(endpoint: &str, error: serde_json::Error) -> ApiError {
    ApiError::Decode {
        endpoint: endpoint.to_string(),
        message: error.to_string(),
    }
}

use serde::{Deserialize, Serialize};
use url::Url;

use super::token::VerificationToken;

/// Name under which the token is published, both as meta tag name and as
/// TXT record key.
pub const VERIFICATION_NAMESPACE: &str = "the-coin-cartel";

/// File name offered for the DNS TXT record download.
pub const DNS_TXT_FILE_NAME: &str = "the-coin-cartel-verification.txt";

/// How ownership is proven. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProofMethod {
    MetaTag,
    DnsTxt,
}

impl ProofMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProofMethod::MetaTag => "meta-tag",
            ProofMethod::DnsTxt => "dns-txt",
        }
    }
}

/// `<meta>` element to paste into the `<head>` of the site's home page.
pub fn meta_tag_snippet(token: &VerificationToken) -> String {
    format!(r#"<meta name="{VERIFICATION_NAMESPACE}" content="{token}" />"#)
}

/// Value of the TXT record to add to the domain's DNS.
pub fn dns_txt_record(token: &VerificationToken) -> String {
    format!("{VERIFICATION_NAMESPACE} = {token}")
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetError {
    #[error("no website was provided")]
    Empty,
    #[error("website {0:?} has no host name")]
    NoHost(String),
}

/// The domain whose ownership is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationTarget {
    domain: String,
}

impl VerificationTarget {
    /// Derive the target from the website field. A missing scheme is
    /// treated as `https://`.
    pub fn from_website(website: &str) -> Result<Self, TargetError> {
        let website = website.trim();
        if website.is_empty() {
            return Err(TargetError::Empty);
        }

        let parsed = Url::parse(website).or_else(|_| Url::parse(&format!("https://{website}")));
        let domain = parsed
            .ok()
            .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
            .filter(|host| !host.is_empty())
            .ok_or_else(|| TargetError::NoHost(website.to_string()))?;

        Ok(Self { domain })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippets_embed_the_token() {
        let token = VerificationToken::from("AB12CD34EF56");
        assert_eq!(
            meta_tag_snippet(&token),
            r#"<meta name="the-coin-cartel" content="AB12CD34EF56" />"#
        );
        assert_eq!(dns_txt_record(&token), "the-coin-cartel = AB12CD34EF56");
    }

    #[test]
    fn target_uses_host_of_website() {
        let target = VerificationTarget::from_website("https://Example.com/landing?x=1").unwrap();
        assert_eq!(target.domain(), "example.com");

        let bare = VerificationTarget::from_website("news.example.org").unwrap();
        assert_eq!(bare.domain(), "news.example.org");
    }

    #[test]
    fn target_requires_a_website() {
        assert_eq!(VerificationTarget::from_website("  "), Err(TargetError::Empty));
        assert!(matches!(
            VerificationTarget::from_website("mailto:jane@example.com"),
            Err(TargetError::NoHost(_))
        ));
    }
}

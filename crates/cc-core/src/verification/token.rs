use rand::Rng;
use serde::{Deserialize, Serialize};

pub const TOKEN_LEN: usize = 12;

const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Shared secret proving control of a website.
///
/// Generated tokens are `TOKEN_LEN` uppercase alphanumeric characters.
/// Server-issued tokens are taken as they come.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationToken(String);

impl VerificationToken {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let token = (0..TOKEN_LEN)
            .map(|_| TOKEN_CHARSET[rng.random_range(0..TOKEN_CHARSET.len())] as char)
            .collect();
        Self(token)
    }

    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for VerificationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for VerificationToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VerificationToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for VerificationToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

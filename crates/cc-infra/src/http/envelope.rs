use serde::Deserialize;

/// `{ "status": bool, "message": string }`, the shape shared by every
/// endpoint of the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct StatusEnvelope {
    pub status: bool,
    #[serde(default)]
    pub message: String,
}

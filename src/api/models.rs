use serde::{Deserialize, Serialize};

/// A missing `question` field deserializes to the empty string and is
/// rejected by the handler the same way a blank one is.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

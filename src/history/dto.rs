use serde::{Deserialize, Serialize};

/// Request body for saving a search. The payload is stored as-is; no content
/// validation is applied to either field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSearchRequest {
    #[serde(default)]
    pub search_url: String,
    #[serde(default)]
    pub search_response: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct SavedResponse {
    pub message: String,
}

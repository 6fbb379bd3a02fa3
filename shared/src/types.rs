use serde::{Deserialize, Serialize};

/// `/static/config.json`. Only the trigger time is read by the page.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SiteConfig {
    #[serde(rename = "triggerTime", skip_serializing_if = "Option::is_none")]
    pub trigger_time: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SecretKeyRequest {
    pub secret_key: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TokenResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct SubscribeRequest {
    pub email: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SubscribeReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ErrorReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

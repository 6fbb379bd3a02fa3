pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_SECRET_KEY: &str = "default-secret-key";
pub const TOAST_DURATION_MS: u32 = 2500;

pub static CONFIG_URL: &'static str = "/static/config.json";
pub static API_TOKEN: &'static str = "token";
pub static API_SUBSCRIBE: &'static str = "subscribe";

pub static HEADER_AUTHORIZATION: &'static str = "Authorization";
pub static HEADER_CONTENT_TYPE: &'static str = "Content-Type";
pub static MIME_JSON: &'static str = "application/json";

pub static MSG_INVALID_EMAIL: &'static str = "Please enter a valid email";
pub static MSG_AUTH_FAILED: &'static str = "Failed to authenticate";
pub static MSG_SUBSCRIBED: &'static str = "Subscribed";
pub static MSG_SUBSCRIBE_ERROR: &'static str = "Error subscribing";

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

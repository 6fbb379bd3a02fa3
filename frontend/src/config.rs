use web_sys::HtmlElement;

use shared::constants::{CONFIG_URL, DEFAULT_API_BASE, DEFAULT_SECRET_KEY, TOAST_DURATION_MS};

use crate::constants::{DATA_API_BASE, DATA_AUTH, DATA_CONFIG_URL, DATA_SECRET_KEY, DATA_STRICT_DISMISS};
use crate::utils::from_dataset;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// No token exchange, no Authorization header.
    Anonymous,
    /// Exchange the shared secret for a bearer token at start-up.
    Bearer,
}

impl AuthMode {
    pub fn parse(value: &str) -> Option<AuthMode> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "anonymous" | "off" => Some(AuthMode::Anonymous),
            "bearer" | "token" | "on" => Some(AuthMode::Bearer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base: String,
    pub secret_key: String,
    pub auth: AuthMode,
    pub config_url: String,
    pub toast_ms: u32,
    /// Only the latest toast's timer may hide it.
    pub strict_dismiss: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            auth: AuthMode::Bearer,
            config_url: CONFIG_URL.to_string(),
            toast_ms: TOAST_DURATION_MS,
            strict_dismiss: false,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `data-*` attributes of the mount element, when present.
    pub fn from_dataset(root: Option<HtmlElement>) -> Self {
        let mut config = Self::default();
        let Some(root) = root else {
            return config;
        };
        if let Some(api_base) = from_dataset(&root, DATA_API_BASE) {
            config.api_base = api_base;
        }
        if let Some(secret_key) = from_dataset(&root, DATA_SECRET_KEY) {
            config.secret_key = secret_key;
        }
        if let Some(config_url) = from_dataset(&root, DATA_CONFIG_URL) {
            config.config_url = config_url;
        }
        if let Some(auth) = from_dataset(&root, DATA_AUTH) {
            match AuthMode::parse(&auth) {
                Some(mode) => config.auth = mode,
                None => log::warn!("ignoring unknown auth mode {auth:?}"),
            }
        }
        if let Some(strict) = from_dataset(&root, DATA_STRICT_DISMISS) {
            config.strict_dismiss = matches!(strict.trim(), "true" | "1" | "on");
        }
        config
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path)
    }

    pub fn requires_auth(&self) -> bool {
        self.auth == AuthMode::Bearer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployed_page() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url("subscribe"), "http://localhost:8000/subscribe");
        assert_eq!(config.config_url, "/static/config.json");
        assert_eq!(config.toast_ms, 2500);
        assert!(config.requires_auth());
        assert!(!config.strict_dismiss);
    }

    #[test]
    fn api_url_tolerates_trailing_slash() {
        let config = ClientConfig { api_base: "https://alerts.example.com/".to_string(), ..ClientConfig::default() };
        assert_eq!(config.api_url("token"), "https://alerts.example.com/token");
    }

    #[test]
    fn auth_mode_parse() {
        assert_eq!(AuthMode::parse(" None "), Some(AuthMode::Anonymous));
        assert_eq!(AuthMode::parse("bearer"), Some(AuthMode::Bearer));
        assert_eq!(AuthMode::parse("maybe"), None);
    }

    #[test]
    fn missing_root_keeps_defaults() {
        assert_eq!(ClientConfig::from_dataset(None), ClientConfig::default());
    }
}

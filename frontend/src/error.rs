use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Anything thrown by the browser: fetch rejected, header refused, no window.
    #[error("browser error: {0}")]
    Js(String),

    #[error("malformed json: {0}")]
    Json(String),

    #[error("unexpected status {0}")]
    Http(u16),
}

impl From<JsValue> for ClientError {
    fn from(err: JsValue) -> Self {
        ClientError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Json(err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for ClientError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        ClientError::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        assert_eq!(ClientError::Http(502).to_string(), "unexpected status 502");
        assert_eq!(ClientError::Js("no window".to_string()).to_string(), "browser error: no window");

        let err: ClientError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, ClientError::Json(_)));
        assert!(err.to_string().starts_with("malformed json"));
    }

    #[test]
    fn is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ClientError::Http(404));
        assert_eq!(err.to_string(), "unexpected status 404");
    }
}

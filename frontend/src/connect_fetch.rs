use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

use shared::constants::{bearer, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, MIME_JSON};

use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<R: DeserializeOwned>(&self) -> Result<R, ClientError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Network seam. A reply with any status is `Ok`; only a failed exchange is an error.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str, no_store: bool) -> Result<HttpReply, ClientError>;

    async fn post_json<T: Serialize>(&self, url: &str, data: &T, token: Option<&str>) -> Result<HttpReply, ClientError>;
}

pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn get(&self, url: &str, no_store: bool) -> Result<HttpReply, ClientError> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        if no_store {
            opts.set_cache(RequestCache::NoStore);
        }
        let request = Request::new_with_str_and_init(url, &opts)?;
        send(request).await
    }

    async fn post_json<T: Serialize>(&self, url: &str, data: &T, token: Option<&str>) -> Result<HttpReply, ClientError> {
        let data = serde_wasm_bindgen::to_value(data)?;
        let body = js_sys::JSON::stringify(&data)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&body);

        let request = Request::new_with_str_and_init(url, &opts)?;
        request.headers().set(HEADER_CONTENT_TYPE, MIME_JSON)?;
        if let Some(token) = token {
            request.headers().set(HEADER_AUTHORIZATION, &bearer(token))?;
        }
        send(request).await
    }
}

async fn send(request: Request) -> Result<HttpReply, ClientError> {
    let window = web_sys::window().ok_or_else(|| ClientError::Js("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;

    Ok(HttpReply {
        status: resp.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

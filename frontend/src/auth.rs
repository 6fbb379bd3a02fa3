use shared::constants::{API_TOKEN, MSG_AUTH_FAILED};
use shared::types::{SecretKeyRequest, TokenResponse};

use crate::app::App;
use crate::connect_fetch::Transport;
use crate::error::ClientError;
use crate::host::Host;

/// Trades the shared secret for a bearer token.
///
/// A failed exchange shows a toast and yields `None`. A successful reply
/// without `access_token` also yields `None`, silently.
pub async fn fetch_token<T: Transport, H: Host>(app: &App<T, H>) -> Option<String> {
    match request_token(app).await {
        Ok(data) => {
            if data.access_token.is_none() {
                log::warn!("token reply has no access_token");
            }
            data.access_token
        }
        Err(err) => {
            log::error!("fetch_token: {err}");
            app.notifier.notify(MSG_AUTH_FAILED);
            None
        }
    }
}

async fn request_token<T: Transport, H: Host>(app: &App<T, H>) -> Result<TokenResponse, ClientError> {
    let data = SecretKeyRequest {
        secret_key: app.config.secret_key.clone(),
    };
    let reply = app.transport.post_json(&app.config.api_url(API_TOKEN), &data, None).await?;
    if !reply.is_success() {
        return Err(ClientError::Http(reply.status));
    }
    reply.json()
}

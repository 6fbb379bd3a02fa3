use shared::types::SiteConfig;
use shared::utils::to_12_hour;

use crate::connect_fetch::Transport;
use crate::error::ClientError;
use crate::state::PageState;

/// Shows the configured trigger time. Any failure leaves the display as it was.
pub async fn load_config<T: Transport>(transport: &T, url: &str, page: &PageState) {
    match fetch_config(transport, url).await {
        Ok(config) => {
            if let Some(formatted) = to_12_hour(config.trigger_time.as_deref()) {
                page.run_time.set(formatted);
            }
        }
        Err(err) => {
            log::debug!("config not loaded: {err}");
        }
    }
}

async fn fetch_config<T: Transport>(transport: &T, url: &str) -> Result<SiteConfig, ClientError> {
    let reply = transport.get(url, true).await?;
    if !reply.is_success() {
        return Err(ClientError::Http(reply.status));
    }
    reply.json()
}

use futures_signals::signal::Mutable;
use serde::de::IgnoredAny;

use shared::constants::{API_SUBSCRIBE, MSG_INVALID_EMAIL, MSG_SUBSCRIBED, MSG_SUBSCRIBE_ERROR};
use shared::types::{ErrorReply, SubscribeReply, SubscribeRequest};

use crate::app::App;
use crate::connect_fetch::Transport;
use crate::error::ClientError;
use crate::host::Host;

const STATUS_UNAUTHORIZED: u16 = 401;
const STATUS_FORBIDDEN: u16 = 403;

enum Flow {
    Done,
    Reload,
}

/// Clears the submitting flag on drop unless disarmed.
struct SubmitGuard<'a> {
    submitting: &'a Mutable<bool>,
    armed: bool,
}

impl<'a> SubmitGuard<'a> {
    fn lock(submitting: &'a Mutable<bool>) -> Self {
        submitting.set(true);
        Self { submitting, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.submitting.set(false);
        }
    }
}

/// Sends the typed email to the subscribe endpoint.
///
/// The control stays disabled while the request is in flight and is
/// re-enabled on every exit except the 401/403 reload, which resets the page.
pub async fn submit<T: Transport, H: Host>(app: &App<T, H>) {
    if app.page.submitting.get() {
        return;
    }

    let email = app.page.email.lock_ref().trim().to_string();
    if email.is_empty() {
        app.notifier.notify(MSG_INVALID_EMAIL);
        return;
    }

    let mut guard = SubmitGuard::lock(&app.page.submitting);
    if let Flow::Reload = send(app, email).await {
        guard.disarm();
        app.host.reload();
    }
}

async fn send<T: Transport, H: Host>(app: &App<T, H>, email: String) -> Flow {
    let token = if app.config.requires_auth() {
        match app.session.token() {
            Some(token) => Some(token),
            None => {
                log::warn!("subscribe skipped: no access token");
                return Flow::Done;
            }
        }
    } else {
        None
    };

    let url = app.config.api_url(API_SUBSCRIBE);
    let reply = match app.transport.post_json(&url, &SubscribeRequest { email }, token.as_deref()).await {
        Ok(reply) => reply,
        Err(err) => {
            log::error!("subscribe: {err}");
            app.notifier.notify(MSG_SUBSCRIBE_ERROR);
            return Flow::Done;
        }
    };

    if reply.is_success() {
        match reply.json::<SubscribeReply>() {
            Ok(data) => {
                log::info!("subscribed: {:?}", data.status);
                app.notifier.notify(non_empty(data.message).as_deref().unwrap_or(MSG_SUBSCRIBED));
                app.page.email.set(String::new());
            }
            Err(err) => reply_error(app, reply.status, err),
        }
        return Flow::Done;
    }

    // Expiry reloads only once the body parses; a non-json 401/403 is a plain error.
    if app.config.requires_auth() && matches!(reply.status, STATUS_UNAUTHORIZED | STATUS_FORBIDDEN) {
        return match reply.json::<IgnoredAny>() {
            Ok(_) => {
                log::warn!("subscribe rejected with {}, session expired", reply.status);
                Flow::Reload
            }
            Err(err) => {
                reply_error(app, reply.status, err);
                Flow::Done
            }
        };
    }

    match reply.json::<ErrorReply>() {
        Ok(data) => app.notifier.notify(non_empty(data.detail).as_deref().unwrap_or(MSG_SUBSCRIBE_ERROR)),
        Err(err) => reply_error(app, reply.status, err),
    }
    Flow::Done
}

fn reply_error<T: Transport, H: Host>(app: &App<T, H>, status: u16, err: ClientError) {
    log::error!("subscribe reply {status}: {err}");
    app.notifier.notify(MSG_SUBSCRIBE_ERROR);
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

use std::rc::Rc;

use crate::auth::fetch_token;
use crate::config::ClientConfig;
use crate::connect_fetch::Transport;
use crate::host::Host;
use crate::loader::load_config;
use crate::notifier::Notifier;
use crate::state::{PageState, Session};
use crate::subscribe::submit;

pub struct App<T: Transport, H: Host> {
    pub config: ClientConfig,
    pub page: PageState,
    pub session: Session,
    pub transport: T,
    pub host: Rc<H>,
    pub notifier: Notifier<H>,
}

impl<T: Transport, H: Host> App<T, H> {
    pub fn new(config: ClientConfig, transport: T, host: H) -> Self {
        let page = PageState::default();
        let host = Rc::new(host);
        let notifier = Notifier::new(page.clone(), host.clone(), config.toast_ms, config.strict_dismiss);
        Self {
            config,
            page,
            session: Session::default(),
            transport,
            host,
            notifier,
        }
    }

    /// Start-up: trigger time first, then the token exchange.
    pub async fn init(&self) {
        load_config(&self.transport, &self.config.config_url, &self.page).await;
        if self.config.requires_auth() {
            let token = fetch_token(self).await;
            self.session.set_token(token);
        }
        log::info!("page ready");
    }

    pub async fn submit(&self) {
        submit(self).await;
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::config::AuthMode;
    use crate::testing::{reply, test_app, test_app_with, ScriptedTransport};

    #[test]
    fn init_loads_config_then_token() {
        let app = test_app(ScriptedTransport::new(vec![
            reply(200, r#"{"triggerTime":"00:00"}"#),
            reply(200, r#"{"access_token":"jwt"}"#),
        ]));
        block_on(app.init());

        assert_eq!(app.page.run_time.get_cloned(), "12 am");
        assert_eq!(app.session.token().as_deref(), Some("jwt"));
        let urls: Vec<_> = app.transport.calls().into_iter().map(|c| c.url).collect();
        assert_eq!(urls, vec!["/static/config.json", "http://localhost:8000/token"]);
    }

    #[test]
    fn broken_config_does_not_block_auth() {
        let app = test_app(ScriptedTransport::new(vec![reply(500, ""), reply(200, r#"{"access_token":"jwt"}"#)]));
        block_on(app.init());
        assert_eq!(app.page.run_time.get_cloned(), "");
        assert_eq!(app.session.token().as_deref(), Some("jwt"));
    }

    #[test]
    fn failed_auth_then_submit_sends_nothing() {
        let app = test_app(ScriptedTransport::new(vec![reply(200, "{}"), reply(401, "{}")]));
        block_on(app.init());
        assert_eq!(app.page.toast_text.get_cloned(), "Failed to authenticate");

        app.page.email.set("a@b.com".to_string());
        block_on(app.submit());
        assert_eq!(app.transport.calls().len(), 2);
        assert!(!app.page.submitting.get());
    }

    #[test]
    fn anonymous_init_skips_token() {
        let config = ClientConfig { auth: AuthMode::Anonymous, ..ClientConfig::default() };
        let app = test_app_with(config, ScriptedTransport::new(vec![reply(200, r#"{"triggerTime":"18:05"}"#)]));
        block_on(app.init());

        assert_eq!(app.page.run_time.get_cloned(), "6:05 pm");
        assert_eq!(app.transport.calls().len(), 1);
        assert_eq!(app.session.token(), None);
    }
}

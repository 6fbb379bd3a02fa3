use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::app::App;
use crate::config::ClientConfig;
use crate::connect_fetch::FetchTransport;
use crate::constants::APP_ROOT;
use crate::elements::app_root::app_root;
use crate::host::BrowserHost;
use crate::utils::{get_html_element, query_selector};

mod app;
mod auth;
mod config;
mod connect_fetch;
mod constants;
mod elements;
mod error;
mod host;
mod loader;
mod notifier;
mod state;
mod subscribe;
mod utils;
#[cfg(test)]
mod testing;

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let mount = get_html_element(query_selector(APP_ROOT));
    let config = ClientConfig::from_dataset(mount.clone());
    log::info!("api base {}, auth {:?}", config.api_base, config.auth);

    let app = Rc::new(App::new(config, FetchTransport, BrowserHost));
    let parent = mount.unwrap_or_else(dominator::body);
    dominator::append_dom(&parent, app_root(app.clone()));

    spawn_local(async move {
        app.init().await;
    });
}

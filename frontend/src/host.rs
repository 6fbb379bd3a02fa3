use gloo_timers::callback::Timeout;

use crate::utils::location_reload;

/// Page-level effects that cannot run outside a browser.
pub trait Host {
    /// Full navigation reload. Every in-memory cell, the session token included, is lost.
    fn reload(&self);

    fn schedule(&self, millis: u32, task: Box<dyn FnOnce()>);
}

pub struct BrowserHost;

impl Host for BrowserHost {
    fn reload(&self) {
        log::info!("reloading page");
        location_reload();
    }

    fn schedule(&self, millis: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(millis, task).forget();
    }
}

use std::cell::Cell;
use std::rc::Rc;

use crate::host::Host;
use crate::state::PageState;

/// Toast surface: text plus a `show` flag that a timer clears.
///
/// Without `strict`, each timer clears the flag unconditionally, so an older
/// timer can hide a newer toast early. With `strict`, only the timer of the
/// latest call hides it.
pub struct Notifier<H: Host> {
    page: PageState,
    host: Rc<H>,
    duration_ms: u32,
    strict: bool,
    generation: Rc<Cell<u64>>,
}

impl<H: Host> Notifier<H> {
    pub fn new(page: PageState, host: Rc<H>, duration_ms: u32, strict: bool) -> Self {
        Self {
            page,
            host,
            duration_ms,
            strict,
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn notify(&self, message: &str) {
        log::info!("toast: {message}");
        self.page.toast_text.set(message.to_string());
        self.page.toast_visible.set(true);

        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let visible = self.page.toast_visible.clone();
        let latest = self.generation.clone();
        let strict = self.strict;
        self.host.schedule(self.duration_ms, Box::new(move || {
            if !strict || latest.get() == generation {
                visible.set(false);
            }
        }));
    }
}

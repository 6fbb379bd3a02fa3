use std::rc::Rc;

use dominator::{Dom, events, html};
use futures_signals::signal::SignalExt;
use wasm_bindgen_futures::spawn_local;

use crate::app::App;
use crate::constants::{CLASS_SHOW, FIELD_EMAIL, ID_RUN_TIME, ID_SUBSCRIBE, ID_TOAST, PROP_DISABLED, PROP_ID, PROP_NAME, PROP_PLACEHOLDER, PROP_ROLE, PROP_TYPE, PROP_VALUE, TAG_BUTTON, TAG_DIV, TAG_INPUT, TAG_P, TAG_SPAN};
use crate::connect_fetch::Transport;
use crate::host::Host;
use crate::utils::get_input_value;

const KEY_ENTER: &str = "Enter";

fn css_class(label: &str) -> String {
    format!("app-root__{label}")
}

pub fn app_root<T, H>(app: Rc<App<T, H>>) -> Dom
    where
        T: Transport + 'static,
        H: Host + 'static
{
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            run_time(&app),
            form(app.clone()),
            toast(&app),
        ])
    })
}

fn run_time<T: Transport, H: Host>(app: &App<T, H>) -> Dom {
    html!(TAG_P, {
        .class(css_class("schedule"))
        .visible_signal(app.page.run_time.signal_ref(|text| !text.is_empty()))
        .text("Alerts are sent daily at ")
        .child(html!(TAG_SPAN, {
            .attr(PROP_ID, ID_RUN_TIME)
            .text_signal(app.page.run_time.signal_cloned())
        }))
    })
}

fn form<T, H>(app: Rc<App<T, H>>) -> Dom
    where
        T: Transport + 'static,
        H: Host + 'static
{
    let app_input = app.clone();
    let app_key = app.clone();
    let app_click = app.clone();
    html!(TAG_DIV, {
        .class(css_class("form"))
        .children([
            html!(TAG_INPUT, {
                .class(css_class("input"))
                .attr(PROP_TYPE, "email")
                .attr(PROP_NAME, FIELD_EMAIL)
                .attr(PROP_PLACEHOLDER, "you@example.com")
                .prop_signal(PROP_VALUE, app.page.email.signal_cloned())
                .event(move |_: events::Input| {
                    app_input.page.email.set_neq(get_input_value(FIELD_EMAIL));
                })
                .event(move |ev: events::KeyDown| {
                    if ev.key() == KEY_ENTER {
                        handle_submit(app_key.clone());
                    }
                })
            }),
            html!(TAG_BUTTON, {
                .class(css_class("button"))
                .attr(PROP_ID, ID_SUBSCRIBE)
                .attr(PROP_ROLE, "button")
                .prop_signal(PROP_DISABLED, app.page.submitting.signal())
                .text("Subscribe")
                .event(move |_: events::Click| handle_submit(app_click.clone()))
            }),
        ])
    })
}

fn toast<T: Transport, H: Host>(app: &App<T, H>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("toast"))
        .attr(PROP_ID, ID_TOAST)
        .class_signal(CLASS_SHOW, app.page.toast_visible.signal())
        .text_signal(app.page.toast_text.signal_cloned())
    })
}

fn handle_submit<T, H>(app: Rc<App<T, H>>)
    where
        T: Transport + 'static,
        H: Host + 'static
{
    spawn_local(async move {
        app.submit().await;
    });
}

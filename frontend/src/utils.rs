use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Location, Window};

fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

fn get_value_from_input(element: JsValue) -> String {
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else {
        "".to_string()
    }
}

pub fn get_location() -> Option<Location> {
    get_window().map(|w| w.location())
}

pub fn get_input_value(name: &str) -> String {
    query_selector(&format!("[name={name}]"))
        .map(|element| get_value_from_input(JsValue::from(element)))
        .unwrap_or_default()
}

pub fn query_selector(selectors: &str) -> Option<Element> {
    get_document().and_then(|d| d.query_selector(selectors).ok()).and_then(|e| e)
}

pub fn get_html_element(el: Option<Element>) -> Option<HtmlElement> {
    el.and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn from_dataset(element: &HtmlElement, key: &str) -> Option<String> {
    element.dataset().get(key).filter(|value| !value.trim().is_empty())
}

pub fn location_reload() {
    if let Some(location) = get_location() {
        location.reload().ok();
    }
}

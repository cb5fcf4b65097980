//! DOM Helpers
//!
//! Thin wrappers over web-sys for the server-rendered page.

use gloo_timers::callback::Timeout;
use leptos::prelude::{document, window};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlElement};

use crate::error::{Error, Result};

const FADE_MS: u32 = 200;

pub fn by_id(id: &str) -> Result<HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| Error::MissingElement(format!("#{}", id)))
}

pub fn query(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Attach a listener for the lifetime of the page
pub fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[DOM] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Undo an inline `display: none`
pub fn show(el: &HtmlElement) {
    let _ = el.style().remove_property("display");
}

pub fn show_block(el: &HtmlElement) {
    set_style(el, "display", "block");
}

pub fn hide(el: &HtmlElement) {
    set_style(el, "display", "none");
}

pub fn fade_in(el: &HtmlElement) {
    set_style(el, "transition", &format!("opacity {}ms", FADE_MS));
    set_style(el, "opacity", "0");
    show_block(el);
    let el = el.clone();
    // next tick, so the transition starts from 0
    Timeout::new(0, move || set_style(&el, "opacity", "1")).forget();
}

pub fn fade_out(el: &HtmlElement) {
    set_style(el, "transition", &format!("opacity {}ms", FADE_MS));
    set_style(el, "opacity", "0");
    let el = el.clone();
    Timeout::new(FADE_MS, move || {
        // a fade_in since then wins
        let faded = el.style().get_property_value("opacity").is_ok_and(|o| o == "0");
        if faded {
            hide(&el);
        }
    })
    .forget();
}

pub fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}

pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

pub fn viewport_size() -> (f64, f64) {
    let w = window();
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn detached_div() -> HtmlElement {
        document().create_element("div").unwrap().dyn_into().unwrap()
    }

    fn display(el: &HtmlElement) -> String {
        el.style().get_property_value("display").unwrap()
    }

    #[wasm_bindgen_test]
    async fn fade_out_hides_after_transition() {
        let el = detached_div();
        fade_in(&el);
        TimeoutFuture::new(10).await;
        fade_out(&el);
        TimeoutFuture::new(FADE_MS + 100).await;
        assert_eq!(display(&el), "none");
    }

    #[wasm_bindgen_test]
    async fn reopen_during_fade_out_stays_visible() {
        let el = detached_div();
        fade_in(&el);
        TimeoutFuture::new(10).await;
        fade_out(&el);
        fade_in(&el);
        TimeoutFuture::new(FADE_MS + 100).await;
        assert_eq!(display(&el), "block");
        assert_eq!(el.style().get_property_value("opacity").unwrap(), "1");
    }
}

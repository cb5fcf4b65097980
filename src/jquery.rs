//! jQuery Plugin Bindings
//!
//! The officer table is sorted by the tablesorter plugin and the available
//! list is narrowed by the multiSelectFilter plugin. Both stay in JS; this
//! module is the typed doorway to them.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type JQuery;

    #[wasm_bindgen(catch, js_name = jQuery)]
    fn jquery(selector: &str) -> Result<JQuery, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn tablesorter(this: &JQuery, options: &JsValue) -> Result<JQuery, JsValue>;

    #[wasm_bindgen(method, catch, js_name = multiSelectFilter)]
    pub fn multi_select_filter(this: &JQuery, target: &str) -> Result<JQuery, JsValue>;

    #[wasm_bindgen(method)]
    pub fn trigger(this: &JQuery, event: &str) -> JQuery;

    #[wasm_bindgen(method)]
    pub fn data(this: &JQuery, key: &str) -> JsValue;
}

/// Select elements, or `None` when jQuery is not on the page.
pub fn select(selector: &str) -> Option<JQuery> {
    match jquery(selector) {
        Ok(q) => Some(q),
        Err(e) => {
            log::warn!("[JQ] jQuery unavailable for {}: {:?}", selector, e);
            None
        }
    }
}

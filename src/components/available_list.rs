//! Available Officers Panel
//!
//! Multi-select of officers not yet on the camp. Double-click, Enter or the
//! add button moves the selected officers onto the camp.

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement, KeyboardEvent};

use crate::api;
use crate::context::PageContext;
use crate::dom;
use crate::error::{Error, Result};
use crate::jquery;
use crate::refresh::{refresh_lists, Areas};
use crate::selection::clamp_selected_index;

const SELECT_ID: &str = "id_available_officers";
const FILTER_SELECTOR: &str = "#id_available_officers_filter";
const ADD_BUTTON_ID: &str = "id_add_officer_btn";

fn select_element() -> Result<HtmlSelectElement> {
    dom::by_id(SELECT_ID)?
        .dyn_into::<HtmlSelectElement>()
        .map_err(|_| Error::MissingElement(format!("select #{}", SELECT_ID)))
}

pub fn bind(ctx: PageContext) -> Result<()> {
    let select = select_element()?;

    if let Some(filter) = jquery::select(FILTER_SELECTOR) {
        if let Err(e) = filter.multi_select_filter(&format!("#{}", SELECT_ID)) {
            log::warn!("[AVAILABLE] filter unavailable: {:?}", e);
        }
    }

    dom::on(&select, "dblclick", move |ev| {
        ev.prevent_default();
        add_selected(ctx);
    });
    dom::on(&select, "keyup", move |ev| {
        let enter = ev
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|kev| kev.key() == "Enter");
        if enter {
            ev.prevent_default();
            add_selected(ctx);
        }
    });

    let button = dom::by_id(ADD_BUTTON_ID)?;
    dom::on(&button, "click", move |ev| {
        ev.prevent_default();
        add_selected(ctx);
    });
    Ok(())
}

/// Replace the options, keeping the selected position where possible.
pub fn render(html: &str) {
    let select = match select_element() {
        Ok(select) => select,
        Err(e) => {
            log::warn!("[AVAILABLE] {}", e);
            return;
        }
    };
    let previous = select.selected_index();
    select.set_inner_html(html);
    if let Some(filter) = jquery::select(FILTER_SELECTOR) {
        filter.trigger("refresh");
    }
    select.set_selected_index(clamp_selected_index(previous, select.length()));
}

fn selected_officer_ids(select: &HtmlSelectElement) -> Vec<String> {
    let selected = select.selected_options();
    (0..selected.length())
        .filter_map(|i| selected.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| option.value())
        .collect()
}

fn add_selected(ctx: PageContext) {
    let ids = match select_element() {
        Ok(select) => selected_officer_ids(&select),
        Err(e) => {
            log::warn!("[AVAILABLE] {}", e);
            return;
        }
    };
    let Some(body) = api::add_officers_form(&ids) else {
        return;
    };

    let url = ctx.config().add_officers_url;
    spawn_local(async move {
        match ctx.track(api::add_officers(&url, body)).await {
            Ok(()) => refresh_lists(ctx, Areas::ALL).await,
            Err(e) => log::warn!("[AVAILABLE] adding officers {:?} failed: {}", ids, e),
        }
    });
}

//! Add-Officer Side Panel
//!
//! Collapsible panel holding the available list. Collapsing it widens the
//! officer table.

use crate::context::PageContext;
use crate::dom;
use crate::error::Result;
use crate::layout::PanelLayout;
use crate::store;

const PANEL_ID: &str = "id_add_officer_div";
const LIST_ID: &str = "id_officer_list_div";
const TOGGLE_ID: &str = "id_hide_add_officer_div";
const CONTENTS_SELECTOR: &str = ".innerright";

pub fn bind(ctx: PageContext) -> Result<()> {
    let toggle_button = dom::by_id(TOGGLE_ID)?;
    dom::on(&toggle_button, "click", move |ev| {
        ev.prevent_default();
        toggle(ctx);
    });
    Ok(())
}

/// Flip between expanded and collapsed.
pub fn toggle(ctx: PageContext) {
    let layout = store::store_toggle_layout(&ctx.store);
    apply(layout);
}

fn apply(layout: PanelLayout) {
    if let Ok(panel) = dom::by_id(PANEL_ID) {
        dom::set_style(&panel, "width", layout.width());
        dom::set_style(&panel, "margin-left", &layout.panel_margin_left());
        if let Some(contents) = dom::query(&panel, CONTENTS_SELECTOR) {
            if layout.expanded {
                dom::show(&contents);
            } else {
                dom::hide(&contents);
            }
        }
    }
    if let Ok(list) = dom::by_id(LIST_ID) {
        dom::set_style(&list, "margin-right", layout.list_margin_right());
    }
    if let Ok(toggle_button) = dom::by_id(TOGGLE_ID) {
        toggle_button.set_text_content(Some(layout.toggle_label()));
    }
}

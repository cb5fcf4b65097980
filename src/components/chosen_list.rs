//! Chosen Officers Panel
//!
//! The server-rendered table of officers on the camp, with in-place row
//! editing and per-row remove / resend-email actions. A single click
//! listener on the container serves every row, so replacing the table
//! contents never requires rebinding.

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement};

use crate::api;
use crate::components::add_officer_panel;
use crate::context::PageContext;
use crate::dom;
use crate::edit::{EditError, EditOutcome};
use crate::error::{Error, Result};
use crate::escape::escape_html;
use crate::models::{OfficerFields, OfficerId};
use crate::refresh::{refresh_lists, Areas};
use crate::selection::parse_officer_id;
use crate::sorting::{self, SortList};
use crate::store;

pub const CONTAINER_ID: &str = "id_officer_list_table";
const ROW_PREFIX: &str = "id_officer_table_tr_";

const EDIT_BUTTON: (&str, &str) = (".editbtn", "id_edit_");
const REMOVE_BUTTON: (&str, &str) = (".removebtn", "id_remove_");
const EMAIL_BUTTON: (&str, &str) = (".emailbtn", "id_email_");

const SAVE_ID: &str = "id_officer_save";
const CANCEL_ID: &str = "id_officer_cancel";
const CONTROLS_CLASS: &str = "officer-edit-controls";

/// Editable columns: input id and size, in column order
const INPUTS: [(&str, u32); 4] = [
    ("id_officer_first_name", 8),
    ("id_officer_last_name", 8),
    ("id_officer_email", 25),
    ("id_officer_notes", 25),
];

/// Editable cells plus the actions cell
const ROW_CELLS: usize = 5;

const ALREADY_EDITING: &str = "Please finish editing the other row first";
const RESEND_CONFIRM: &str =
    "This will reset the officer's password and re-send the initial signup e-mail.  Continue?";

// ========================
// Markup
// ========================

pub fn input_html(id: &str, size: u32, value: &str) -> String {
    format!(
        r#"<input size="{}" id="{}" type="text" value="{}" />"#,
        size,
        id,
        escape_html(value)
    )
}

pub fn email_link_html(email: &str) -> String {
    let email = escape_html(email);
    format!(r#"<a href="mailto:{}">{}</a>"#, email, email)
}

fn edit_controls_html() -> String {
    format!(
        r##"<span class="{}"><a href="#" id="{}">Save</a> / <a href="#" id="{}">Cancel</a></span>"##,
        CONTROLS_CLASS, SAVE_ID, CANCEL_ID
    )
}

// ========================
// Panel
// ========================

pub fn bind(ctx: PageContext) -> Result<()> {
    let container = dom::by_id(CONTAINER_ID)?;
    dom::on(&container, "click", move |ev| on_click(ctx, ev));
    sorting::attach(&SortList::default());
    Ok(())
}

/// Replace the table with a fresh server fragment.
pub fn render(ctx: PageContext, html: &str) {
    let sort_list = sorting::current().unwrap_or_default();
    let container = match dom::by_id(CONTAINER_ID) {
        Ok(el) => el,
        Err(e) => {
            log::warn!("[LIST] {}", e);
            return;
        }
    };
    container.set_inner_html(html);
    if let Some(session) = store::store_reset_edit(&ctx.store) {
        log::debug!("[LIST] refresh ended edit of officer {}", session.officer_id);
    }
    sorting::attach(&sort_list);
}

fn on_click(ctx: PageContext, ev: Event) {
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };

    if let Some(id) = button_officer_id(&target, EDIT_BUTTON) {
        ev.prevent_default();
        begin_edit(ctx, id);
    } else if let Some(id) = button_officer_id(&target, REMOVE_BUTTON) {
        ev.prevent_default();
        remove_officer(ctx, id);
    } else if let Some(id) = button_officer_id(&target, EMAIL_BUTTON) {
        ev.prevent_default();
        resend_email(ctx, id);
    } else if target.id() == SAVE_ID {
        ev.prevent_default();
        save_edit(ctx);
    } else if target.id() == CANCEL_ID {
        ev.prevent_default();
        cancel_edit(ctx);
    }
}

fn button_officer_id(target: &Element, (selector, prefix): (&str, &str)) -> Option<OfficerId> {
    let button = target.closest(selector).ok()??;
    parse_officer_id(&button.id(), prefix)
}

fn row_cells(officer_id: OfficerId) -> Result<Vec<HtmlElement>> {
    let row = dom::by_id(&format!("{}{}", ROW_PREFIX, officer_id))?;
    let children = row.children();
    let cells: Vec<HtmlElement> = (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .take(ROW_CELLS)
        .collect();
    if cells.len() < ROW_CELLS {
        return Err(Error::MissingElement(format!("cells of officer row {}", officer_id)));
    }
    Ok(cells)
}

// ========================
// Edit Lifecycle
// ========================

fn begin_edit(ctx: PageContext, officer_id: OfficerId) {
    if store::store_is_editing(&ctx.store) {
        dom::alert(ALREADY_EDITING);
        return;
    }
    if let Err(e) = open_editor(ctx, officer_id) {
        log::debug!("[LIST] {}", e);
        dom::alert(ALREADY_EDITING);
    }
}

/// Swap the row's cells for inputs. While another row is open nothing in
/// the DOM is touched.
fn open_editor(ctx: PageContext, officer_id: OfficerId) -> Result<(), EditError> {
    let cells = match row_cells(officer_id) {
        Ok(cells) => cells,
        Err(e) => {
            log::warn!("[LIST] {}", e);
            return Ok(());
        }
    };

    let original = OfficerFields::from_cells(
        cells[..INPUTS.len()].iter().map(|c| c.text_content().unwrap_or_default()),
    );
    let layout = store::store_layout(&ctx.store);
    store::store_begin_edit(&ctx.store, officer_id, original.clone(), layout.expanded)?;

    for ((cell, (id, size)), value) in cells.iter().zip(INPUTS).zip(original.values()) {
        cell.set_inner_html(&input_html(id, size, value));
    }
    let actions = &cells[INPUTS.len()];
    for img in dom::query_all(actions, "img") {
        dom::hide(&img);
    }
    if let Err(e) = actions.insert_adjacent_html("beforeend", &edit_controls_html()) {
        log::warn!("[LIST] no save/cancel for officer {}: {:?}", officer_id, e);
    }

    // make horizontal room for the inputs
    if layout.expanded {
        add_officer_panel::toggle(ctx);
    }
    Ok(())
}

fn cancel_edit(ctx: PageContext) {
    if let Some(outcome) = store::store_cancel_edit(&ctx.store) {
        finish_edit(ctx, &outcome);
    }
}

fn save_edit(ctx: PageContext) {
    let edited = OfficerFields::from_cells(INPUTS.iter().map(|(id, _)| input_value(id)));
    let Some(outcome) = store::store_save_edit(&ctx.store, edited) else {
        return;
    };
    // Row shows the new values before the server has them
    finish_edit(ctx, &outcome);
    sorting::notify_updated();

    let config = ctx.config();
    spawn_local(async move {
        let saved = ctx
            .track(api::update_officer(
                &config.update_officer_url,
                outcome.officer_id,
                &outcome.fields,
                &config.camp_id,
            ))
            .await;
        match saved {
            // notes/contact changes can alter who is missing a form
            Ok(()) => refresh_lists(ctx, Areas::NO_APPLICATION).await,
            Err(e) => log::warn!("[LIST] update of officer {} failed: {}", outcome.officer_id, e),
        }
    });
}

fn finish_edit(ctx: PageContext, outcome: &EditOutcome) {
    match row_cells(outcome.officer_id) {
        Ok(cells) => show_row(&cells, &outcome.fields),
        Err(e) => log::warn!("[LIST] {}", e),
    }
    if outcome.restore_panel {
        add_officer_panel::toggle(ctx);
    }
}

fn show_row(cells: &[HtmlElement], fields: &OfficerFields) {
    cells[0].set_inner_html(&escape_html(&fields.first_name));
    cells[1].set_inner_html(&escape_html(&fields.last_name));
    cells[2].set_inner_html(&email_link_html(&fields.email));
    cells[3].set_inner_html(&escape_html(&fields.notes));

    let actions = &cells[INPUTS.len()];
    for img in dom::query_all(actions, "img") {
        dom::show(&img);
    }
    if let Some(controls) = dom::query(actions, &format!(".{}", CONTROLS_CLASS)) {
        controls.remove();
    }
}

fn input_value(id: &str) -> String {
    dom::by_id(id)
        .ok()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

// ========================
// Row Actions
// ========================

fn remove_officer(ctx: PageContext, officer_id: OfficerId) {
    let url = ctx.config().remove_officer_url;
    spawn_local(async move {
        match ctx.track(api::remove_officer(&url, officer_id)).await {
            Ok(()) => refresh_lists(ctx, Areas::ALL).await,
            Err(e) => log::warn!("[LIST] remove of officer {} failed: {}", officer_id, e),
        }
    });
}

fn resend_email(ctx: PageContext, officer_id: OfficerId) {
    if !dom::confirm(RESEND_CONFIRM) {
        return;
    }
    let url = ctx.config().resend_email_url;
    spawn_local(async move {
        match ctx.track(api::resend_email(&url, officer_id)).await {
            Ok(()) => log::info!("[LIST] signup email re-sent to officer {}", officer_id),
            Err(e) => log::warn!("[LIST] resend to officer {} failed: {}", officer_id, e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_html_escapes_value() {
        assert_eq!(
            input_html("id_officer_notes", 25, r#"<b>"Cook" & 'helper'</b>"#),
            r#"<input size="25" id="id_officer_notes" type="text" value="&lt;b&gt;&quot;Cook&quot; &amp; &apos;helper&apos;&lt;/b&gt;" />"#
        );
    }

    #[test]
    fn test_email_link() {
        assert_eq!(
            email_link_html("jane@example.com"),
            r#"<a href="mailto:jane@example.com">jane@example.com</a>"#
        );
    }

    #[test]
    fn test_email_link_escapes_markup() {
        let html = email_link_html(r#"x"><script>@example.com"#);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_edit_controls() {
        let html = edit_controls_html();
        assert!(html.contains(r#"id="id_officer_save""#));
        assert!(html.contains(r#"id="id_officer_cancel""#));
        assert!(html.starts_with(r#"<span class="officer-edit-controls">"#));
        assert!(html.ends_with("</span>"));
    }
}

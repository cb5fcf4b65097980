//! New Officer Popup
//!
//! Overlay with the officer creation form in an iframe. Closing it reloads
//! every list, since an officer may have been created.

use crate::context::PageContext;
use crate::dom;
use crate::error::Result;
use crate::escape::escape_html;
use crate::refresh::{spawn_refresh, Areas};

const POPUP_ID: &str = "id_add_officer_popup";
const BACKGROUND_ID: &str = "id_popup_background";
const OPEN_BUTTON_ID: &str = "id_new_officer_btn";
const CLOSE_BUTTON_ID: &str = "id_popup_close_btn";
const FRAME_CONTAINER: &str = ".iframe_container";

const FRAME_WIDTH: u32 = 780;
const FRAME_HEIGHT: u32 = 400;

pub fn iframe_html(src: &str) -> String {
    format!(
        r#"<iframe src="{}" width="{}" frameborder="0" height="{}"></iframe>"#,
        escape_html(src),
        FRAME_WIDTH,
        FRAME_HEIGHT
    )
}

/// Offset that centres `size` within `viewport`
pub fn centered_offset(viewport: f64, size: f64) -> f64 {
    viewport / 2.0 - size / 2.0
}

pub fn bind(ctx: PageContext) -> Result<()> {
    let open_button = dom::by_id(OPEN_BUTTON_ID)?;
    dom::on(&open_button, "click", move |ev| {
        ev.prevent_default();
        open(ctx);
    });

    let close_button = dom::by_id(CLOSE_BUTTON_ID)?;
    dom::on(&close_button, "click", move |ev| {
        ev.prevent_default();
        close(ctx);
    });
    Ok(())
}

fn open(ctx: PageContext) {
    let popup = match dom::by_id(POPUP_ID) {
        Ok(popup) => popup,
        Err(e) => {
            log::warn!("[POPUP] {}", e);
            return;
        }
    };
    let src = ctx.config().create_officer_popup_url();
    match dom::query(&popup, FRAME_CONTAINER) {
        Some(container) => container.set_inner_html(&iframe_html(&src)),
        None => log::warn!("[POPUP] no {} in popup", FRAME_CONTAINER),
    }

    // shown first so it has a size to centre
    dom::fade_in(&popup);
    let (width, height) = dom::viewport_size();
    dom::set_style(&popup, "position", "fixed");
    dom::set_style(
        &popup,
        "top",
        &format!("{}px", centered_offset(height, popup.offset_height() as f64)),
    );
    dom::set_style(
        &popup,
        "left",
        &format!("{}px", centered_offset(width, popup.offset_width() as f64)),
    );

    if let Ok(background) = dom::by_id(BACKGROUND_ID) {
        dom::fade_in(&background);
    }
}

fn close(ctx: PageContext) {
    spawn_refresh(ctx, Areas::ALL);
    for id in [POPUP_ID, BACKGROUND_ID] {
        if let Ok(el) = dom::by_id(id) {
            dom::fade_out(&el);
        }
    }
}

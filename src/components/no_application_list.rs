//! Officers Without Application Form

use crate::dom;

const CONTAINER_ID: &str = "id_noapplicationform";

pub fn render(html: &str) {
    match dom::by_id(CONTAINER_ID) {
        Ok(container) => container.set_inner_html(html),
        Err(e) => log::warn!("[NOAPP] {}", e),
    }
}

//! Loading Indicator
//!
//! `#loading` is visible while any server request is outstanding.

use leptos::prelude::*;

use crate::context::PageContext;
use crate::dom;
use crate::store;

const INDICATOR_ID: &str = "loading";

pub fn bind(ctx: PageContext) {
    Effect::new(move |_| {
        let busy = store::store_in_flight(&ctx.store) > 0;
        if let Ok(indicator) = dom::by_id(INDICATOR_ID) {
            if busy {
                dom::show_block(&indicator);
            } else {
                dom::hide(&indicator);
            }
        }
    });
}

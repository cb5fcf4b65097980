//! Officer List Page
//!
//! Root component. The page itself is rendered by the server; this binds
//! the panels to it and renders nothing of its own.

use leptos::prelude::*;

use crate::components::{
    add_officer_panel, available_list, chosen_list, loading_indicator, new_officer_popup,
};
use crate::config::PageConfig;
use crate::context::PageContext;
use crate::dom;
use crate::error::Result;

#[component]
pub fn OfficerListPage() -> impl IntoView {
    if dom::by_id(chosen_list::CONTAINER_ID).is_err() {
        log::debug!("[APP] no officer list on this page");
        return;
    }
    let config = match PageConfig::from_window() {
        Ok(config) => config,
        Err(e) => {
            log::error!("[APP] officer list disabled: {}", e);
            return;
        }
    };
    log::info!("[APP] officer list for camp {}", config.camp_id);

    let ctx = PageContext::new(config);

    let panels: [(&str, Result<()>); 4] = [
        ("chosen list", chosen_list::bind(ctx)),
        ("available list", available_list::bind(ctx)),
        ("add officer panel", add_officer_panel::bind(ctx)),
        ("new officer popup", new_officer_popup::bind(ctx)),
    ];
    for (name, bound) in panels {
        if let Err(e) = bound {
            log::warn!("[APP] {} not bound: {}", name, e);
        }
    }
    loading_indicator::bind(ctx);
}

//! Officer List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dom;
mod edit;
mod error;
mod escape;
mod jquery;
mod layout;
mod logging;
mod models;
mod refresh;
mod selection;
mod sorting;
mod store;

use app::OfficerListPage;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    // stats pages
    stats_charts::render_all();

    mount_to_body(OfficerListPage);
}

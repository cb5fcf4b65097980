//! Officer Table Sorting
//!
//! The chosen list table is made sortable by the tablesorter plugin. A list
//! refresh replaces the table, so the active sort is read off the old table
//! and handed to the new one.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::jquery;

pub const OFFICER_TABLE: &str = "#id_officer_list_table table";

/// Column holding the action icons
const ACTIONS_COLUMN: u32 = 4;

/// tablesorter `sortList`: `[column, direction]` pairs, 0 ascending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortList(pub Vec<[u32; 2]>);

impl Default for SortList {
    fn default() -> Self {
        SortList(vec![[0, 0]])
    }
}

impl SortList {
    pub fn tablesorter_options(&self) -> serde_json::Value {
        let mut headers = serde_json::Map::new();
        headers.insert(ACTIONS_COLUMN.to_string(), json!({ "sorter": false }));
        json!({
            "headers": headers,
            "sortList": self.0,
        })
    }
}

/// Make the officer table sortable, starting with `sort_list`.
pub fn attach(sort_list: &SortList) {
    let Some(table) = jquery::select(OFFICER_TABLE) else {
        return;
    };
    let options = match js_sys::JSON::parse(&sort_list.tablesorter_options().to_string()) {
        Ok(options) => options,
        Err(e) => {
            log::warn!("[SORT] bad options: {:?}", e);
            return;
        }
    };
    if let Err(e) = table.tablesorter(&options) {
        log::warn!("[SORT] tablesorter failed: {:?}", e);
    }
}

/// Sort currently applied to the officer table, if the plugin is attached.
pub fn current() -> Option<SortList> {
    let state = jquery::select(OFFICER_TABLE)?.data("tablesorter");
    if state.is_undefined() || state.is_null() {
        return None;
    }
    let list = js_sys::Reflect::get(&state, &"sortList".into()).ok()?;
    serde_wasm_bindgen::from_value(list).ok().map(SortList)
}

/// Tell the plugin that cell contents changed.
pub fn notify_updated() {
    if let Some(table) = jquery::select(OFFICER_TABLE) {
        table.trigger("update");
    }
}

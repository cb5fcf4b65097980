//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::edit::{EditError, EditOutcome, EditSession, EditState};
use crate::layout::PanelLayout;
use crate::models::{OfficerFields, OfficerId};

/// Officer list page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Inline row edit guard
    pub editing: EditState,
    /// Add-officer side panel
    pub layout: PanelLayout,
    /// Server requests still outstanding
    pub in_flight: u32,
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_is_editing(store: &PageStore) -> bool {
    store.editing().with_untracked(|state| state.is_editing())
}

pub fn store_begin_edit(
    store: &PageStore,
    officer_id: OfficerId,
    original: OfficerFields,
    panel_expanded: bool,
) -> Result<(), EditError> {
    store.editing().write().begin(officer_id, original, panel_expanded)
}

pub fn store_cancel_edit(store: &PageStore) -> Option<EditOutcome> {
    store.editing().write().cancel()
}

pub fn store_save_edit(store: &PageStore, edited: OfficerFields) -> Option<EditOutcome> {
    store.editing().write().save(edited)
}

/// Drop any edit session after the chosen list was replaced
pub fn store_reset_edit(store: &PageStore) -> Option<EditSession> {
    store.editing().write().reset()
}

pub fn store_layout(store: &PageStore) -> PanelLayout {
    store.layout().get_untracked()
}

/// Flip the side panel and return the new layout
pub fn store_toggle_layout(store: &PageStore) -> PanelLayout {
    let next = store_layout(store).toggled();
    *store.layout().write() = next;
    next
}

pub fn store_request_started(store: &PageStore) {
    *store.in_flight().write() += 1;
}

pub fn store_request_finished(store: &PageStore) {
    let remaining = store.in_flight().get_untracked().saturating_sub(1);
    *store.in_flight().write() = remaining;
}

/// Tracked read, for effects
pub fn store_in_flight(store: &PageStore) -> u32 {
    store.in_flight().get()
}

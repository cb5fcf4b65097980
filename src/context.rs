//! Page Context
//!
//! Everything an event handler needs, bundled as a `Copy` value so it can be
//! moved into every closure and async block.

use std::future::Future;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::PageConfig;
use crate::store::{self, PageState, PageStore};

#[derive(Clone, Copy)]
pub struct PageContext {
    pub store: PageStore,
    config: StoredValue<PageConfig>,
}

impl PageContext {
    pub fn new(config: PageConfig) -> Self {
        Self {
            store: Store::new(PageState::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> PageConfig {
        self.config.get_value()
    }

    /// Await a server request while it counts towards the loading indicator
    pub async fn track<F: Future>(self, request: F) -> F::Output {
        store::store_request_started(&self.store);
        let output = request.await;
        store::store_request_finished(&self.store);
        output
    }
}

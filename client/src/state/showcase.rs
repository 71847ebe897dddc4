//! Listing state for showcase, review-queue, and my-components grids.
//!
//! DESIGN
//! ======
//! Each grid page owns one `ShowcaseState` signal. Preview instances never
//! read it; they receive their record once as a prop.

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use crate::net::types::ComponentItem;

#[derive(Clone, Debug, Default)]
pub struct ShowcaseState {
    pub items: Vec<ComponentItem>,
    /// Last page whose fetch succeeded; 0 before any.
    pub page: u32,
    /// Page of the fetch in flight, if any.
    pub pending_page: Option<u32>,
    pub loading: bool,
    pub error: Option<String>,
    /// True once a fetch returned no items.
    pub exhausted: bool,
}

impl ShowcaseState {
    /// Mark a fetch for `page` as in flight.
    pub fn begin_fetch(&mut self, page: u32) {
        self.loading = true;
        self.error = None;
        self.pending_page = Some(page);
    }

    /// Apply a fetch result. Page 1 replaces the list; later pages append,
    /// skipping ids already present. A failed fetch leaves `page` at the
    /// last success so the next request retries it.
    pub fn apply_fetch(&mut self, result: Result<Vec<ComponentItem>, String>) {
        self.loading = false;
        let page = self.pending_page.take().unwrap_or(1);
        match result {
            Ok(items) => {
                self.page = page;
                self.exhausted = items.is_empty();
                if page <= 1 {
                    self.items = items;
                    return;
                }
                for item in items {
                    if !self.items.iter().any(|existing| existing.id == item.id) {
                        self.items.push(item);
                    }
                }
            }
            Err(message) => self.error = Some(message),
        }
    }

    pub fn next_page(&self) -> u32 {
        self.page.saturating_add(1)
    }
}

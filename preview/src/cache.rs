//! Memo of compiled documents keyed by normalized source.
//!
//! Compilation is pure, so a hit returns exactly what a fresh compile would.
//! The cache is bound to one [`PreviewConfig`]; changing CDN URLs means a
//! new cache.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::PreviewConfig;
use crate::document::compile;
use crate::source::PreviewSource;

pub const DEFAULT_CACHE_ENTRIES: usize = 256;

#[derive(Debug, Clone)]
pub struct DocumentCache {
    config: PreviewConfig,
    max_entries: usize,
    entries: HashMap<PreviewSource, Arc<str>>,
}

impl DocumentCache {
    pub fn new(config: PreviewConfig) -> Self {
        Self::with_max_entries(config, DEFAULT_CACHE_ENTRIES)
    }

    pub fn with_max_entries(config: PreviewConfig, max_entries: usize) -> Self {
        Self { config, max_entries: max_entries.max(1), entries: HashMap::new() }
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the compiled document for `source`, compiling on miss.
    ///
    /// When full, the whole map is dropped before inserting.
    pub fn get_or_compile(&mut self, source: &PreviewSource) -> Arc<str> {
        if let Some(doc) = self.entries.get(source) {
            return Arc::clone(doc);
        }
        if self.entries.len() >= self.max_entries {
            self.entries.clear();
        }
        let doc: Arc<str> = Arc::from(compile(source, &self.config));
        self.entries.insert(source.clone(), Arc::clone(&doc));
        doc
    }
}

//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::catalog::{SymbolEntry, catalog};
use crate::core::clipboard::{Clipboard, ClipboardError};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;

/// The catalog entry for `key`. Panics if the key is not in the table.
pub fn entry(key: &str) -> SymbolEntry {
    let symbol = catalog()
        .lookup(key)
        .unwrap_or_else(|| panic!("no catalog key {key:?}"));
    SymbolEntry::new(key, symbol)
}

/// Default settings with no translation delay.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        translation_delay: Duration::ZERO,
        ..ResolvedConfig::default()
    }
}

/// Creates a test App with default paging (12 cards).
pub fn test_app() -> App {
    App::new(&test_config())
}

/// Records every write. Fails on demand.
#[derive(Default)]
pub struct MemoryClipboard {
    pub writes: Mutex<Vec<String>>,
    pub fail: bool,
}

impl MemoryClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn last(&self) -> Option<String> {
        self.writes.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unsupported("permission denied".into()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

//! OSC 52 clipboard: asks the terminal emulator to set the system clipboard.
//!
//! Works over SSH and inside tmux (with `set-clipboard on`), but the terminal
//! never confirms the write. Success here only means the escape sequence was
//! flushed.

use std::io::stdout;

use async_trait::async_trait;
use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use log::debug;

use crate::core::clipboard::{Clipboard, ClipboardError};

pub struct Osc52Clipboard;

#[async_trait]
impl Clipboard for Osc52Clipboard {
    fn name(&self) -> &str {
        "osc52"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        // One locked write keeps the sequence whole. It may still land between
        // a frame's writes, which is fine since OSC 52 never moves the cursor.
        let mut out = stdout().lock();
        execute!(out, CopyToClipboard::to_clipboard_from(text))?;
        debug!("OSC 52 sequence written ({} bytes)", text.len());
        Ok(())
    }
}

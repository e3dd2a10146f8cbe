//! # Clipboard Seam
//!
//! The core only ever asks to copy a string. Who actually performs the write
//! is up to the adapter (OSC 52 in the terminal, in-memory in tests).

use std::fmt;

use async_trait::async_trait;

#[derive(Debug)]
pub enum ClipboardError {
    /// The environment has no usable clipboard.
    Unsupported(String),
    Io(std::io::Error),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unsupported(msg) => write!(f, "clipboard unavailable: {msg}"),
            ClipboardError::Io(e) => write!(f, "clipboard I/O error: {e}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl From<std::io::Error> for ClipboardError {
    fn from(e: std::io::Error) -> Self {
        ClipboardError::Io(e)
    }
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    fn name(&self) -> &str;

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// What was being copied, for status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopySource {
    Translation,
    Sequence,
}

impl CopySource {
    pub fn label(&self) -> &'static str {
        match self {
            CopySource::Translation => "translation",
            CopySource::Sequence => "sequence",
        }
    }
}

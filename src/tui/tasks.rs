//! Background work spawned on behalf of `Effect`s.
//!
//! Every task reports back to the event loop by sending an `Action` over the
//! std channel the loop drains between frames. A dropped receiver just means
//! the UI is shutting down, so send failures are logged and otherwise ignored.

use std::sync::{Arc, mpsc};
use std::time::Duration;

use log::{debug, info, warn};
use tokio::task::{AbortHandle, JoinHandle};

use crate::core::action::Action;
use crate::core::clipboard::{Clipboard, CopySource};
use crate::core::reveal::RevealTicket;
use crate::core::translate::translate;
use crate::core::translation::RequestId;

/// Translate `text` after `delay` and report `TranslationReady { id }`.
///
/// The delay only simulates latency. Superseded requests still run to
/// completion; `update()` discards their result by id.
pub fn spawn_translation(
    id: RequestId,
    text: String,
    delay: Duration,
    tx: mpsc::Sender<Action>,
) -> JoinHandle<()> {
    debug!("Scheduling translation {:?} after {:?}", id, delay);
    tokio::spawn(async move {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let output = translate(&text);
        if tx.send(Action::TranslationReady { id, output }).is_err() {
            warn!("Failed to send translation {:?}: receiver dropped", id);
        }
    })
}

/// Write `text` through `clipboard` and report `CopyFinished`.
pub fn spawn_copy(
    clipboard: Arc<dyn Clipboard>,
    text: String,
    source: CopySource,
    tx: mpsc::Sender<Action>,
) -> JoinHandle<()> {
    info!(
        "Copying {} ({} chars) via {}",
        source.label(),
        text.chars().count(),
        clipboard.name()
    );
    tokio::spawn(async move {
        let error = clipboard.write_text(&text).await.err().map(|e| e.to_string());
        if tx.send(Action::CopyFinished { source, error }).is_err() {
            warn!("Failed to send copy result: receiver dropped");
        }
    })
}

/// The single pending reveal clear. Scheduling a new one aborts the old.
#[derive(Default)]
pub struct RevealTimer {
    pending: Option<AbortHandle>,
}

impl RevealTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, ticket: RevealTicket, after: Duration, tx: mpsc::Sender<Action>) {
        self.cancel();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if tx.send(Action::RevealExpired(ticket)).is_err() {
                warn!("Failed to send reveal expiry: receiver dropped");
            }
        });
        self.pending = Some(handle.abort_handle());
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for RevealTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

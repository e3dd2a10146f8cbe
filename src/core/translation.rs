//! # Translation Requests
//!
//! State behind the translation bar: the last result and which request (if
//! any) is still in flight.
//!
//! Results arrive after a simulated delay. Each request gets a fresh id and
//! only the newest one may write the result, so a slow stale completion can
//! never overwrite a newer answer.
//!
//! ```text
//! request("sun") → #1 pending
//! request("cat") → #2 pending         (#1 is now stale)
//! complete(#1)   → ignored
//! complete(#2)   → output = 𓅓𓇋𓅱, idle
//! ```

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

#[derive(Debug, Default)]
pub struct TranslationState {
    pub output: String,
    pending: Option<RequestId>,
    last_issued: u64,
}

impl TranslationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_translating(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a request for `text`. Blank input issues nothing.
    pub fn request(&mut self, text: &str) -> Option<RequestId> {
        if text.trim().is_empty() {
            return None;
        }
        self.last_issued += 1;
        let id = RequestId(self.last_issued);
        self.pending = Some(id);
        debug!("Translation request {:?} issued", id);
        Some(id)
    }

    /// Deliver the result of request `id`. Returns false if it was stale.
    pub fn complete(&mut self, id: RequestId, output: String) -> bool {
        if self.pending != Some(id) {
            debug!("Discarding stale translation {:?} (pending {:?})", id, self.pending);
            return false;
        }
        self.output = output;
        self.pending = None;
        true
    }

    /// Reset the output. Any in-flight request becomes stale.
    pub fn clear(&mut self) {
        self.output.clear();
        self.pending = None;
    }
}

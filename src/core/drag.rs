//! # Drag Coordinator
//!
//! Tracks what is being dragged and turns drops into sequence commands.
//!
//! ```text
//!            start_catalog_drag(entry)            drop_on_area / drag_end
//!   Idle ───────────────────────────▶ FromCatalog ─────────────────────────▶ Idle
//!     │
//!     │      start_sequence_drag(i)               drop_on_item(j) / drag_end
//!     └─────────────────────────────▶ WithinSequence(i) ────────────────────▶ Idle
//! ```
//!
//! The coordinator never touches the sequence itself. Drops return a
//! [`DropCommand`] that the reducer applies. `over_drop_zone` and
//! `hover_index` only drive highlighting.

use log::debug;

use crate::core::catalog::SymbolEntry;
use crate::core::payload::DragPayload;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragSource {
    #[default]
    Idle,
    FromCatalog(SymbolEntry),
    WithinSequence(usize),
}

/// What a drop asks the sequence to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropCommand {
    Append(SymbolEntry),
    InsertExternal(String),
    Move { from: usize, to: usize },
    Nothing,
}

#[derive(Debug, Default)]
pub struct DragState {
    pub source: DragSource,
    pub over_drop_zone: bool,
    pub hover_index: Option<usize>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.source == DragSource::Idle
    }

    /// Begin dragging a catalog card. Returns the payload the drag carries.
    pub fn start_catalog_drag(&mut self, entry: SymbolEntry) -> String {
        self.warn_if_replacing();
        let payload = DragPayload::for_entry(&entry).to_json();
        self.source = DragSource::FromCatalog(entry);
        payload
    }

    /// Begin dragging the placed item at `index`. Returns the payload.
    pub fn start_sequence_drag(&mut self, index: usize) -> String {
        self.warn_if_replacing();
        self.source = DragSource::WithinSequence(index);
        DragPayload::Reorder { index }.to_json()
    }

    fn warn_if_replacing(&self) {
        if !self.is_idle() {
            debug!("Drag started while {:?} was active, replacing it", self.source);
        }
    }

    pub fn drag_over_drop_zone(&mut self) {
        self.over_drop_zone = true;
    }

    pub fn drag_over_item(&mut self, index: usize) {
        self.hover_index = Some(index);
    }

    pub fn drag_leave_item(&mut self) {
        self.hover_index = None;
    }

    /// Pointer left the sequence container entirely. Only clears the zone
    /// highlight; the drag itself continues.
    pub fn drag_leave_container(&mut self) {
        self.over_drop_zone = false;
    }

    /// Drag finished without a drop (or after one). Back to idle.
    pub fn drag_end(&mut self) {
        self.source = DragSource::Idle;
        self.over_drop_zone = false;
        self.hover_index = None;
    }

    /// Drop onto the sequence area (not onto a specific item).
    ///
    /// A carried payload is authoritative and goes through tolerant parsing;
    /// without one, a catalog drag appends its entry directly.
    pub fn drop_on_area(&mut self, payload: Option<&str>) -> DropCommand {
        let source = std::mem::take(&mut self.source);
        self.over_drop_zone = false;

        match (source, payload) {
            (DragSource::WithinSequence(index), _) => {
                debug!("Reorder drag of item {index} dropped on the area, ignoring");
                DropCommand::Nothing
            }
            (_, Some(raw)) => DropCommand::InsertExternal(raw.to_string()),
            (DragSource::FromCatalog(entry), None) => DropCommand::Append(entry),
            (DragSource::Idle, None) => DropCommand::Nothing,
        }
    }

    /// Drop onto the placed item at `target`.
    pub fn drop_on_item(&mut self, target: usize, payload: Option<&str>) -> DropCommand {
        let source = std::mem::take(&mut self.source);
        self.hover_index = None;

        let from = match payload.map(DragPayload::parse) {
            Some(Ok(DragPayload::Reorder { index })) => Some(index),
            Some(Ok(DragPayload::Entry(_))) => None,
            Some(Err(e)) => {
                debug!("Error reordering cards: {e}");
                None
            }
            None => match source {
                DragSource::WithinSequence(index) => Some(index),
                _ => None,
            },
        };

        match from {
            Some(from) if from != target => DropCommand::Move { from, to: target },
            _ => DropCommand::Nothing,
        }
    }
}

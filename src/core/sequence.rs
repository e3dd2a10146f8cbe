//! # Symbol Sequence
//!
//! The user's composed message: an ordered list of placed symbols.
//!
//! Items are snapshots of catalog entries taken at placement time. After that
//! only their position changes. Ids are handed out from a per-sequence
//! counter, so two placements of the same glyph are still distinct items.

use std::fmt;

use log::{debug, warn};

use crate::core::catalog::{Category, SymbolEntry};
use crate::core::payload::DragPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlacedId(u64);

impl fmt::Display for PlacedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedSymbol {
    pub id: PlacedId,
    pub symbol: String,
    pub meaning: String,
    pub category: Category,
}

#[derive(Debug, Default)]
pub struct Sequence {
    items: Vec<PlacedSymbol>,
    next_id: u64,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[PlacedSymbol] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlacedSymbol> {
        self.items.get(index)
    }

    fn fresh_id(&mut self) -> PlacedId {
        let id = PlacedId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Snapshot `entry` onto the end of the sequence.
    pub fn append(&mut self, entry: &SymbolEntry) -> PlacedId {
        let id = self.fresh_id();
        self.items.push(PlacedSymbol {
            id,
            symbol: entry.symbol.clone(),
            meaning: entry.key.clone(),
            category: entry.category,
        });
        debug!("Placed {} ({}) as {}", entry.symbol, entry.key, id);
        id
    }

    /// Append the entry carried by an external drag payload.
    ///
    /// Anything but a well-formed entry payload is logged and ignored.
    pub fn insert_from_drop(&mut self, raw: &str) -> Option<PlacedId> {
        match DragPayload::parse(raw) {
            Ok(DragPayload::Entry(entry)) => Some(self.append(&entry.into_entry())),
            Ok(DragPayload::Reorder { index }) => {
                debug!("Ignoring reorder payload (index {index}) dropped as an entry");
                None
            }
            Err(e) => {
                warn!("Error parsing dropped data: {e}");
                None
            }
        }
    }

    /// Remove the item with `id`. Returns whether anything was removed.
    pub fn remove_by_id(&mut self, id: PlacedId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before != self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Take the item at `from` out, then insert it at `to` in the shortened
    /// list.
    ///
    /// # Panics
    ///
    /// If either index is out of range.
    pub fn move_to_index(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
    }

    /// All symbols in order, no separator. Used for clipboard export.
    pub fn serialize_flat(&self) -> String {
        self.items.iter().map(|item| item.symbol.as_str()).collect()
    }
}

//! # Application State
//!
//! Core business state for Hieroglyph. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── cards: Vec<SymbolEntry>          // displayable catalog, definition order
//! ├── visible_cards: usize             // how many cards are paged in
//! ├── sequence: Sequence               // the composed message
//! ├── drag: DragState                  // current drag source + hover flags
//! ├── translation: TranslationState    // translation bar
//! ├── reveal: RevealSlot               // click-to-reveal card
//! ├── status_message: String           // status bar text
//! └── settings (delay, page size, reveal duration)
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::time::Duration;

use crate::core::catalog::{SymbolEntry, catalog};
use crate::core::config::ResolvedConfig;
use crate::core::drag::DragState;
use crate::core::reveal::RevealSlot;
use crate::core::sequence::Sequence;
use crate::core::translation::TranslationState;

pub struct App {
    pub cards: Vec<SymbolEntry>,
    pub visible_cards: usize,
    pub sequence: Sequence,
    pub drag: DragState,
    pub translation: TranslationState,
    pub reveal: RevealSlot,
    pub status_message: String,
    pub translation_delay: Duration,
    pub cards_per_page: usize,
    pub reveal_duration: Duration,
}

impl App {
    pub fn new(config: &ResolvedConfig) -> Self {
        let cards = catalog().displayable_entries();
        let visible_cards = config.cards_per_page.min(cards.len());
        Self {
            cards,
            visible_cards,
            sequence: Sequence::new(),
            drag: DragState::new(),
            translation: TranslationState::new(),
            reveal: RevealSlot::new(),
            status_message: String::from("Welcome to Hieroglyph!"),
            translation_delay: config.translation_delay,
            cards_per_page: config.cards_per_page,
            reveal_duration: config.reveal_duration,
        }
    }

    /// The cards currently paged in.
    pub fn visible(&self) -> &[SymbolEntry] {
        &self.cards[..self.visible_cards]
    }

    pub fn remaining_cards(&self) -> usize {
        self.cards.len() - self.visible_cards
    }

    pub fn card(&self, index: usize) -> Option<&SymbolEntry> {
        self.visible().get(index)
    }
}

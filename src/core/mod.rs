//! # Core Application Logic
//!
//! This module contains Hieroglyph's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog + translator │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  tokio     │      │ Clipboard  │
//!     │  Adapter   │      │  timers    │      │  (OSC 52)  │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: the static glyph table and its accessors
//! - [`translate`]: greedy longest-match text → glyphs
//! - [`sequence`]: the user's ordered list of placed symbols
//! - [`payload`]: drag payload wire format
//! - [`drag`]: drag source state machine
//! - [`translation`]: translation requests with last-write-wins
//! - [`reveal`]: click-to-reveal slot
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()`

pub mod action;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod drag;
pub mod payload;
pub mod reveal;
pub mod sequence;
pub mod state;
pub mod translate;
pub mod translation;

//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name, focused panel, status message
//!
//! ### Stateful Components (persistent state + transient wrapper)
//!
//! The state struct lives in `TuiState` and handles events; the wrapper is
//! rebuilt every frame with borrowed props and renders:
//!
//! - `TranslationInput` / `TranslationBar`: text input and wrapped output
//! - `CardGridState` / `CardGrid`: paged catalog cards
//! - `SequenceStripState` / `SequenceStrip`: the drop zone
//!
//! Components receive external data as props, never by reaching into `App`.
//! Stateful components cache the `Rect`s they drew so the event loop can
//! hit-test mouse input against the last frame.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (top status bar)
//! ├── translation_bar.rs  (input + translation output)
//! ├── card_grid.rs        (catalog cards + load more)
//! └── sequence_strip.rs   (placed symbols, drop target)
//! ```

pub mod card_grid;
pub mod sequence_strip;
mod title_bar;
pub mod translation_bar;

pub use card_grid::{CardEvent, CardGrid, CardGridState};
pub use sequence_strip::{SequenceEvent, SequenceStrip, SequenceStripState, StripHit};
pub use title_bar::TitleBar;
pub use translation_bar::{TranslationBar, TranslationEvent, TranslationInput};

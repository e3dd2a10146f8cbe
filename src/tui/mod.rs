//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm ─▶ TuiEvent ─▶ handle_event() ─▶ Vec<Action> ─▶ update() ─▶ Effect
//!                                                               ▲            │
//!                                   background tasks ─ Action ──┘   EffectRunner
//! ```
//!
//! `handle_event` only reads `App`; every mutation goes through `update()`.
//!
//! ## Drag and Drop
//!
//! The terminal has no native drag and drop, so the adapter plays the
//! browser's part. A mouse press on a card followed by motion starts a drag;
//! `Effect::BeginDrag` hands over the payload, which is held in
//! `TuiState::drag_transfer` and given back on drop, like a data transfer.
//! The keyboard offers the same gestures: `g` grabs a catalog card, `m` picks
//! up a placed symbol, Enter drops and Esc cancels.
//!
//! ## Redraw Strategy
//!
//! Draw only after input or a background result. The poll timeout shortens
//! while a translation is pending so the result shows up promptly.

mod clipboard;
mod component;
mod components;
mod event;
pub mod tasks;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::clipboard::Clipboard;
use crate::core::config::ResolvedConfig;
use crate::core::drag::DragSource;
use crate::core::state::App;
use crate::tui::clipboard::Osc52Clipboard;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CardEvent, CardGridState, SequenceEvent, SequenceStripState, TranslationEvent,
    TranslationInput,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::tasks::RevealTimer;
use crate::tui::ui::HitTarget;

/// Which panel receives keyboard input. Tab cycles forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Translation,
    Catalog,
    Sequence,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Translation => Focus::Catalog,
            Focus::Catalog => Focus::Sequence,
            Focus::Sequence => Focus::Translation,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Translation => Focus::Sequence,
            Focus::Catalog => Focus::Translation,
            Focus::Sequence => Focus::Catalog,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Translation => "Translate",
            Focus::Catalog => "Catalog",
            Focus::Sequence => "Message",
        }
    }
}

/// Left mouse button tracking between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pointer {
    Idle,
    /// Pressed but not moved yet; a release here is a click.
    Pressed(HitTarget),
    Dragging,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    // Persistent component states
    pub translation_input: TranslationInput,
    pub card_grid: CardGridState,
    pub sequence_strip: SequenceStripState,
    /// Payload from `Effect::BeginDrag`, returned with the drop.
    pub drag_transfer: Option<String>,
    /// Input box area in the last frame, for click-to-focus.
    pub input_area: Rect,
    pointer: Pointer,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Translation, // User expects to type immediately
            translation_input: TranslationInput::new(),
            card_grid: CardGridState::new(),
            sequence_strip: SequenceStripState::new(),
            drag_transfer: None,
            input_area: Rect::default(),
            pointer: Pointer::Idle,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Keyboard enhancement lets Shift+Arrow arrive intact; terminals
        // without it ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Executes `Effect`s: spawns background work and records drag payloads.
pub struct EffectRunner {
    tx: mpsc::Sender<Action>,
    clipboard: Arc<dyn Clipboard>,
    reveal_timer: RevealTimer,
}

impl EffectRunner {
    pub fn new(tx: mpsc::Sender<Action>, clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            tx,
            clipboard,
            reveal_timer: RevealTimer::new(),
        }
    }

    /// Returns true when the app should quit.
    pub fn run(&mut self, effect: Effect, tui: &mut TuiState) -> bool {
        match effect {
            Effect::None => {}
            Effect::Quit => return true,
            Effect::ScheduleTranslation { id, text, delay } => {
                tasks::spawn_translation(id, text, delay, self.tx.clone());
            }
            Effect::CopyToClipboard { text, source } => {
                tasks::spawn_copy(self.clipboard.clone(), text, source, self.tx.clone());
            }
            Effect::ScheduleRevealClear { ticket, after } => {
                self.reveal_timer.schedule(ticket, after, self.tx.clone());
            }
            Effect::BeginDrag { payload } => {
                tui.drag_transfer = Some(payload);
            }
        }
        false
    }
}

/// Apply `actions` in order. Returns true when the app should quit.
pub fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    runner: &mut EffectRunner,
    actions: Vec<Action>,
) -> bool {
    for action in actions {
        let effect = update(app, action);
        if runner.run(effect, tui) {
            return true;
        }
    }
    false
}

/// Map one terminal event to the actions it triggers.
pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Vec<Action> {
    // Sync component props with App
    tui.card_grid.card_count = app.visible_cards;
    tui.sequence_strip.item_count = app.sequence.len();

    match event {
        TuiEvent::ForceQuit => vec![Action::Quit],
        TuiEvent::Resize => Vec::new(),
        TuiEvent::MouseDown(col, row) => mouse_down(app, tui, *col, *row),
        TuiEvent::MouseDrag(col, row) => mouse_drag(app, tui, *col, *row),
        TuiEvent::MouseUp(col, row) => mouse_up(app, tui, *col, *row),
        TuiEvent::FocusNext | TuiEvent::FocusPrev => {
            let actions = cancel_drag(app, tui);
            tui.focus = if matches!(event, TuiEvent::FocusNext) {
                tui.focus.next()
            } else {
                tui.focus.prev()
            };
            actions
        }
        TuiEvent::Copy => match tui.focus {
            Focus::Translation => vec![Action::CopyTranslation],
            Focus::Catalog | Focus::Sequence => vec![Action::CopySequence],
        },
        TuiEvent::Clear => match tui.focus {
            Focus::Translation => {
                tui.translation_input.reset();
                vec![Action::ClearTranslation]
            }
            Focus::Catalog | Focus::Sequence => {
                let mut actions = cancel_drag(app, tui);
                actions.push(Action::ClearSequence);
                actions
            }
        },
        _ => match tui.focus {
            Focus::Translation => translation_event(tui, event),
            Focus::Catalog => catalog_event(app, tui, event),
            Focus::Sequence => sequence_event(app, tui, event),
        },
    }
}

fn translation_event(tui: &mut TuiState, event: &TuiEvent) -> Vec<Action> {
    match tui.translation_input.handle_event(event) {
        Some(TranslationEvent::Submit(text)) => vec![Action::Translate(text)],
        Some(TranslationEvent::Clear) => {
            tui.translation_input.reset();
            vec![Action::ClearTranslation]
        }
        Some(TranslationEvent::ContentChanged) | None => Vec::new(),
    }
}

/// Enter/click on a card: the first press reveals it, a press on the
/// revealed card adds it.
fn activate_card(app: &App, index: usize) -> Action {
    if app.reveal.is_revealed(index) {
        Action::AddCard(index)
    } else {
        Action::SelectCard(index)
    }
}

fn catalog_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Vec<Action> {
    match tui.card_grid.handle_event(event) {
        Some(CardEvent::Activate(index)) => vec![activate_card(app, index)],
        Some(CardEvent::Add(index)) => vec![Action::AddCard(index)],
        Some(CardEvent::Grab(index)) => {
            tui.focus = Focus::Sequence;
            vec![Action::StartCatalogDrag(index), Action::DragOverArea]
        }
        Some(CardEvent::LoadMore) => vec![Action::LoadMoreCards],
        None => Vec::new(),
    }
}

fn sequence_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Vec<Action> {
    let Some(sequence_event) = tui.sequence_strip.handle_event(event) else {
        return Vec::new();
    };
    let carrying = !app.drag.is_idle();

    match sequence_event {
        SequenceEvent::Confirm(index) => match app.drag.source {
            DragSource::Idle => Vec::new(),
            DragSource::FromCatalog(_) => vec![
                Action::DropOnArea {
                    payload: tui.drag_transfer.take(),
                },
                Action::DragEnd,
            ],
            DragSource::WithinSequence(_) => vec![
                Action::DropOnItem {
                    index,
                    payload: tui.drag_transfer.take(),
                },
                Action::DragEnd,
            ],
        },
        SequenceEvent::Cancel => cancel_drag(app, tui),
        SequenceEvent::Selected(index) => match app.drag.source {
            DragSource::WithinSequence(_) => vec![Action::DragOverItem(index)],
            _ => Vec::new(),
        },
        SequenceEvent::Move { from, to } if !carrying => vec![Action::MovePlaced { from, to }],
        SequenceEvent::Remove(index) if !carrying => app
            .sequence
            .get(index)
            .map(|placed| Action::RemovePlaced(placed.id))
            .into_iter()
            .collect(),
        SequenceEvent::PickUp(index) if !carrying => vec![
            Action::StartSequenceDrag(index),
            Action::DragOverArea,
            Action::DragOverItem(index),
        ],
        _ => Vec::new(),
    }
}

/// Abandon any drag in progress, keyboard or mouse.
fn cancel_drag(app: &App, tui: &mut TuiState) -> Vec<Action> {
    tui.drag_transfer = None;
    tui.pointer = Pointer::Idle;
    if app.drag.is_idle() {
        Vec::new()
    } else {
        vec![Action::DragEnd]
    }
}

fn mouse_down(app: &App, tui: &mut TuiState, col: u16, row: u16) -> Vec<Action> {
    let actions = cancel_drag(app, tui);
    let target = ui::hit_test(tui, col, row);
    match target {
        HitTarget::TranslationInput => tui.focus = Focus::Translation,
        HitTarget::Card(index) => {
            tui.focus = Focus::Catalog;
            tui.card_grid.selected = index;
        }
        HitTarget::LoadMore => tui.focus = Focus::Catalog,
        HitTarget::SequenceItem(index) | HitTarget::SequenceRemove(index) => {
            tui.focus = Focus::Sequence;
            tui.sequence_strip.selected = index;
        }
        HitTarget::SequenceZone => tui.focus = Focus::Sequence,
        HitTarget::Nothing => {}
    }
    tui.pointer = Pointer::Pressed(target);
    actions
}

fn mouse_drag(app: &App, tui: &mut TuiState, col: u16, row: u16) -> Vec<Action> {
    let mut actions = Vec::new();
    if let Pointer::Pressed(target) = tui.pointer {
        match target {
            HitTarget::Card(index) => actions.push(Action::StartCatalogDrag(index)),
            HitTarget::SequenceItem(index) => actions.push(Action::StartSequenceDrag(index)),
            _ => return actions,
        }
        tui.pointer = Pointer::Dragging;
    }
    if tui.pointer != Pointer::Dragging {
        return actions;
    }

    match ui::hit_test(tui, col, row) {
        HitTarget::SequenceItem(index) | HitTarget::SequenceRemove(index) => {
            actions.push(Action::DragOverArea);
            if app.drag.hover_index != Some(index) {
                actions.push(Action::DragOverItem(index));
            }
        }
        HitTarget::SequenceZone => {
            actions.push(Action::DragOverArea);
            if app.drag.hover_index.is_some() {
                actions.push(Action::DragLeaveItem);
            }
        }
        _ => {
            if app.drag.hover_index.is_some() {
                actions.push(Action::DragLeaveItem);
            }
            if app.drag.over_drop_zone {
                actions.push(Action::DragLeaveContainer);
            }
        }
    }
    actions
}

fn mouse_up(app: &App, tui: &mut TuiState, col: u16, row: u16) -> Vec<Action> {
    let hit = ui::hit_test(tui, col, row);
    match std::mem::replace(&mut tui.pointer, Pointer::Idle) {
        Pointer::Dragging => {
            let payload = tui.drag_transfer.take();
            let mut actions = match hit {
                HitTarget::SequenceItem(index) | HitTarget::SequenceRemove(index) => {
                    vec![Action::DropOnItem { index, payload }]
                }
                HitTarget::SequenceZone => vec![Action::DropOnArea { payload }],
                _ => Vec::new(),
            };
            actions.push(Action::DragEnd);
            actions
        }
        Pointer::Pressed(target) if target == hit => match target {
            HitTarget::Card(index) => vec![activate_card(app, index)],
            HitTarget::LoadMore => vec![Action::LoadMoreCards],
            HitTarget::SequenceRemove(index) => app
                .sequence
                .get(index)
                .map(|placed| Action::RemovePlaced(placed.id))
                .into_iter()
                .collect(),
            _ => Vec::new(),
        },
        Pointer::Pressed(_) | Pointer::Idle => Vec::new(),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut runner = EffectRunner::new(tx, Arc::new(Osc52Clipboard));

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if app.translation.is_translating() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let actions = handle_event(&app, &mut tui, &event);
            if dispatch(&mut app, &mut tui, &mut runner, actions) {
                should_quit = true;
                break;
            }
        }

        // Handle background task actions
        while !should_quit && let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit = dispatch(&mut app, &mut tui, &mut runner, vec![action]);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

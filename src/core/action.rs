//! # Actions
//!
//! Everything that can happen in Hieroglyph becomes an `Action`.
//! User presses Enter in the translation bar? That's `Action::Translate(text)`.
//! The delayed result arrives? That's `Action::TranslationReady { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing any I/O the adapter should run.
//! No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::time::Duration;

use log::{debug, info, warn};

use crate::core::clipboard::CopySource;
use crate::core::drag::DropCommand;
use crate::core::reveal::RevealTicket;
use crate::core::sequence::PlacedId;
use crate::core::state::App;
use crate::core::translation::RequestId;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Translation bar
    Translate(String),
    TranslationReady { id: RequestId, output: String },
    ClearTranslation,
    CopyTranslation,

    // Catalog cards (indices into the visible cards)
    AddCard(usize),
    SelectCard(usize),
    RevealExpired(RevealTicket),
    LoadMoreCards,

    // Drag and drop
    StartCatalogDrag(usize),
    StartSequenceDrag(usize),
    DragOverArea,
    DragOverItem(usize),
    DragLeaveItem,
    DragLeaveContainer,
    DropOnArea { payload: Option<String> },
    DropOnItem { index: usize, payload: Option<String> },
    DragEnd,

    // Sequence editing
    RemovePlaced(PlacedId),
    MovePlaced { from: usize, to: usize },
    ClearSequence,
    CopySequence,
    CopyFinished { source: CopySource, error: Option<String> },

    Quit,
}

/// I/O requested by `update()`, executed by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Translate `text` after `delay`, then report `TranslationReady { id }`.
    ScheduleTranslation {
        id: RequestId,
        text: String,
        delay: Duration,
    },
    /// Write `text` to the clipboard, then report `CopyFinished`.
    CopyToClipboard { text: String, source: CopySource },
    /// Cancel any pending reveal clear and report `RevealExpired(ticket)`
    /// after `after`.
    ScheduleRevealClear { ticket: RevealTicket, after: Duration },
    /// A drag began; the adapter carries `payload` until the drop.
    BeginDrag { payload: String },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Translate(text) => match app.translation.request(&text) {
            Some(id) => {
                app.status_message = String::from("Translating...");
                Effect::ScheduleTranslation {
                    id,
                    text,
                    delay: app.translation_delay,
                }
            }
            None => Effect::None,
        },
        Action::TranslationReady { id, output } => {
            if app.translation.complete(id, output) {
                app.status_message = String::from("Translated");
            }
            Effect::None
        }
        Action::ClearTranslation => {
            app.translation.clear();
            app.status_message = String::from("Translation cleared");
            Effect::None
        }
        Action::CopyTranslation => {
            let text = app.translation.output.clone();
            copy_effect(app, text, CopySource::Translation)
        }

        Action::AddCard(index) => {
            if let Some(entry) = app.card(index).cloned() {
                if app.reveal.is_revealed(index) {
                    app.reveal.dismiss();
                }
                app.sequence.append(&entry);
                app.status_message = format!("Added {} ({})", entry.symbol, entry.key);
            }
            Effect::None
        }
        Action::SelectCard(index) => {
            if app.card(index).is_none() {
                return Effect::None;
            }
            let ticket = app.reveal.select(index);
            Effect::ScheduleRevealClear {
                ticket,
                after: app.reveal_duration,
            }
        }
        Action::RevealExpired(ticket) => {
            app.reveal.expire(ticket);
            Effect::None
        }
        Action::LoadMoreCards => {
            app.visible_cards = (app.visible_cards + app.cards_per_page).min(app.cards.len());
            debug!("Showing {} of {} cards", app.visible_cards, app.cards.len());
            Effect::None
        }

        Action::StartCatalogDrag(index) => match app.card(index).cloned() {
            Some(entry) => Effect::BeginDrag {
                payload: app.drag.start_catalog_drag(entry),
            },
            None => Effect::None,
        },
        Action::StartSequenceDrag(index) => {
            if index >= app.sequence.len() {
                return Effect::None;
            }
            Effect::BeginDrag {
                payload: app.drag.start_sequence_drag(index),
            }
        }
        Action::DragOverArea => {
            app.drag.drag_over_drop_zone();
            Effect::None
        }
        Action::DragOverItem(index) => {
            app.drag.drag_over_item(index);
            Effect::None
        }
        Action::DragLeaveItem => {
            app.drag.drag_leave_item();
            Effect::None
        }
        Action::DragLeaveContainer => {
            app.drag.drag_leave_container();
            Effect::None
        }
        Action::DropOnArea { payload } => {
            let command = app.drag.drop_on_area(payload.as_deref());
            apply_drop(app, command);
            Effect::None
        }
        Action::DropOnItem { index, payload } => {
            let command = app.drag.drop_on_item(index, payload.as_deref());
            apply_drop(app, command);
            Effect::None
        }
        Action::DragEnd => {
            app.drag.drag_end();
            Effect::None
        }

        Action::RemovePlaced(id) => {
            if app.sequence.remove_by_id(id) {
                app.status_message = format!("Removed {id}");
            }
            Effect::None
        }
        Action::MovePlaced { from, to } => {
            apply_drop(app, DropCommand::Move { from, to });
            Effect::None
        }
        Action::ClearSequence => {
            app.sequence.clear();
            app.status_message = String::from("Sequence cleared");
            Effect::None
        }
        Action::CopySequence => {
            let text = app.sequence.serialize_flat();
            copy_effect(app, text, CopySource::Sequence)
        }
        Action::CopyFinished { source, error } => {
            app.status_message = match error {
                None => format!("Copied {} to clipboard", source.label()),
                Some(e) => {
                    warn!("Failed to copy {}: {}", source.label(), e);
                    format!("Copy failed: {e}")
                }
            };
            Effect::None
        }

        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

fn copy_effect(app: &mut App, text: String, source: CopySource) -> Effect {
    if text.is_empty() {
        app.status_message = format!("Nothing to copy ({} is empty)", source.label());
        return Effect::None;
    }
    Effect::CopyToClipboard { text, source }
}

fn apply_drop(app: &mut App, command: DropCommand) {
    match command {
        DropCommand::Append(entry) => {
            app.sequence.append(&entry);
        }
        DropCommand::InsertExternal(raw) => {
            app.sequence.insert_from_drop(&raw);
        }
        DropCommand::Move { from, to } => {
            // Indices come from the adapter's own layout; a stale one after
            // a concurrent removal is dropped rather than trusted.
            let len = app.sequence.len();
            if from < len && to < len {
                app.sequence.move_to_index(from, to);
            } else {
                warn!("Ignoring move {from} -> {to} on sequence of {len}");
            }
        }
        DropCommand::Nothing => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::drag::DragSource;
    use crate::test_support::test_app;

    fn meanings(app: &App) -> Vec<String> {
        app.sequence
            .items()
            .iter()
            .map(|i| i.meaning.clone())
            .collect()
    }

    #[test]
    fn test_translate_schedules_request() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Translate("Sun".into()));
        match effect {
            Effect::ScheduleTranslation { text, delay, .. } => {
                assert_eq!(text, "Sun");
                assert_eq!(delay, app.translation_delay);
            }
            other => panic!("expected ScheduleTranslation, got {other:?}"),
        }
        assert!(app.translation.is_translating());
        assert_eq!(app.status_message, "Translating...");
    }

    #[test]
    fn test_translate_blank_does_nothing() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Translate("  ".into())), Effect::None);
        assert!(!app.translation.is_translating());
    }

    #[test]
    fn test_stale_translation_is_ignored() {
        let mut app = test_app();
        let Effect::ScheduleTranslation { id: old, .. } =
            update(&mut app, Action::Translate("sun".into()))
        else {
            panic!("expected ScheduleTranslation");
        };
        let Effect::ScheduleTranslation { id: new, .. } =
            update(&mut app, Action::Translate("cat".into()))
        else {
            panic!("expected ScheduleTranslation");
        };

        update(&mut app, Action::TranslationReady { id: new, output: "𓅓𓇋𓅱".into() });
        update(&mut app, Action::TranslationReady { id: old, output: "𓇳".into() });
        assert_eq!(app.translation.output, "𓅓𓇋𓅱");
        assert!(!app.translation.is_translating());
    }

    #[test]
    fn test_copy_translation() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::CopyTranslation), Effect::None);
        assert!(app.status_message.starts_with("Nothing to copy"));

        app.translation.output = "𓇳".into();
        assert_eq!(
            update(&mut app, Action::CopyTranslation),
            Effect::CopyToClipboard {
                text: "𓇳".into(),
                source: CopySource::Translation
            }
        );
    }

    #[test]
    fn test_add_card_appends() {
        let mut app = test_app();
        update(&mut app, Action::AddCard(0));
        update(&mut app, Action::AddCard(1));
        assert_eq!(app.sequence.serialize_flat(), "𓄿𓃀");
        // Out of the visible page
        update(&mut app, Action::AddCard(500));
        assert_eq!(app.sequence.len(), 2);
    }

    #[test]
    fn test_select_card_schedules_reveal() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SelectCard(3));
        let Effect::ScheduleRevealClear { ticket, after } = effect else {
            panic!("expected ScheduleRevealClear, got {effect:?}");
        };
        assert_eq!(after, app.reveal_duration);
        assert!(app.reveal.is_revealed(3));

        update(&mut app, Action::RevealExpired(ticket));
        assert_eq!(app.reveal.selected(), None);
    }

    #[test]
    fn test_reselect_keeps_reveal_past_first_timer() {
        let mut app = test_app();
        let Effect::ScheduleRevealClear { ticket: first, .. } =
            update(&mut app, Action::SelectCard(3))
        else {
            panic!("expected ScheduleRevealClear");
        };
        update(&mut app, Action::SelectCard(3));
        update(&mut app, Action::RevealExpired(first));
        assert!(app.reveal.is_revealed(3));
    }

    #[test]
    fn test_add_from_revealed_card_dismisses() {
        let mut app = test_app();
        update(&mut app, Action::SelectCard(1));
        update(&mut app, Action::AddCard(1));
        assert_eq!(app.reveal.selected(), None);
        assert_eq!(app.sequence.len(), 1);
    }

    #[test]
    fn test_load_more_caps_at_total() {
        let mut app = test_app();
        let total = app.cards.len();
        update(&mut app, Action::LoadMoreCards);
        assert_eq!(app.visible_cards, 24);
        for _ in 0..20 {
            update(&mut app, Action::LoadMoreCards);
        }
        assert_eq!(app.visible_cards, total);
        assert_eq!(app.remaining_cards(), 0);
    }

    #[test]
    fn test_catalog_drag_and_drop() {
        let mut app = test_app();
        let Effect::BeginDrag { payload } = update(&mut app, Action::StartCatalogDrag(2)) else {
            panic!("expected BeginDrag");
        };
        update(&mut app, Action::DragOverArea);
        assert!(app.drag.over_drop_zone);

        update(&mut app, Action::DropOnArea { payload: Some(payload) });
        update(&mut app, Action::DragEnd);
        assert_eq!(meanings(&app), ["c"]);
        assert!(app.drag.is_idle());
        assert!(!app.drag.over_drop_zone);
    }

    #[test]
    fn test_catalog_drag_end_without_drop_changes_nothing() {
        let mut app = test_app();
        update(&mut app, Action::StartCatalogDrag(2));
        update(&mut app, Action::DragLeaveContainer);
        assert!(matches!(app.drag.source, DragSource::FromCatalog(_)));
        update(&mut app, Action::DragEnd);
        assert!(app.sequence.is_empty());
        assert!(app.drag.is_idle());
    }

    #[test]
    fn test_external_garbage_drop_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::AddCard(0));
        update(&mut app, Action::DropOnArea { payload: Some("<html>".into()) });
        update(&mut app, Action::DropOnArea { payload: Some(r#"{"meaning":"x"}"#.into()) });
        assert_eq!(meanings(&app), ["a"]);
    }

    #[test]
    fn test_sequence_drag_reorders() {
        let mut app = test_app();
        for i in 0..3 {
            update(&mut app, Action::AddCard(i));
        }
        let Effect::BeginDrag { payload } = update(&mut app, Action::StartSequenceDrag(0)) else {
            panic!("expected BeginDrag");
        };
        update(&mut app, Action::DragOverItem(2));
        update(&mut app, Action::DropOnItem { index: 2, payload: Some(payload) });
        assert_eq!(meanings(&app), ["b", "c", "a"]);
        assert_eq!(app.drag.hover_index, None);
    }

    #[test]
    fn test_sequence_drag_out_of_range_is_ignored() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::StartSequenceDrag(0)), Effect::None);
        assert!(app.drag.is_idle());
    }

    #[test]
    fn test_stale_move_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::AddCard(0));
        update(&mut app, Action::MovePlaced { from: 0, to: 4 });
        assert_eq!(meanings(&app), ["a"]);
    }

    #[test]
    fn test_move_placed() {
        let mut app = test_app();
        for i in 0..3 {
            update(&mut app, Action::AddCard(i));
        }
        update(&mut app, Action::MovePlaced { from: 2, to: 0 });
        assert_eq!(meanings(&app), ["c", "a", "b"]);
    }

    #[test]
    fn test_remove_clear_and_copy_sequence() {
        let mut app = test_app();
        for i in 0..3 {
            update(&mut app, Action::AddCard(i));
        }
        let middle = app.sequence.items()[1].id;
        update(&mut app, Action::RemovePlaced(middle));
        assert_eq!(meanings(&app), ["a", "c"]);

        assert_eq!(
            update(&mut app, Action::CopySequence),
            Effect::CopyToClipboard {
                text: "𓄿𓎡".into(),
                source: CopySource::Sequence
            }
        );

        update(&mut app, Action::ClearSequence);
        assert!(app.sequence.is_empty());
        assert_eq!(update(&mut app, Action::CopySequence), Effect::None);
    }

    #[test]
    fn test_copy_finished_updates_status_only() {
        let mut app = test_app();
        update(&mut app, Action::AddCard(0));
        update(
            &mut app,
            Action::CopyFinished {
                source: CopySource::Sequence,
                error: Some("denied".into()),
            },
        );
        assert_eq!(app.status_message, "Copy failed: denied");
        assert_eq!(app.sequence.len(), 1);

        update(
            &mut app,
            Action::CopyFinished {
                source: CopySource::Translation,
                error: None,
            },
        );
        assert_eq!(app.status_message, "Copied translation to clipboard");
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}

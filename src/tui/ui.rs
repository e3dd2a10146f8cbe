use crate::core::drag::DragSource;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{CardGrid, SequenceStrip, StripHit, TitleBar, TranslationBar};
use crate::tui::components::card_grid::CARD_HEIGHT;
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Drop zone height: two rows of cells plus borders.
const SEQUENCE_HEIGHT: u16 = 8;

/// What the pointer is over, resolved against the last frame's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    TranslationInput,
    Card(usize),
    LoadMore,
    SequenceItem(usize),
    SequenceRemove(usize),
    SequenceZone,
    Nothing,
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let translation_height = TranslationBar::height(&app.translation.output, frame.area().width);
    let layout = Layout::vertical([
        Length(1),
        Length(translation_height),
        Min(CARD_HEIGHT + 3),
        Length(SEQUENCE_HEIGHT),
        Length(1),
    ]);
    let [title_area, translation_area, cards_area, sequence_area, help_area] =
        layout.areas(frame.area());

    let dragging = drag_label(app);
    TitleBar::new(tui.focus.label(), &app.status_message, dragging).render(frame, title_area);

    TranslationBar::new(
        &tui.translation_input,
        &app.translation.output,
        app.translation.is_translating(),
        tui.focus == Focus::Translation,
    )
    .render(frame, translation_area);
    tui.input_area = Rect {
        height: 3.min(translation_area.height),
        ..translation_area
    };

    let dragged_card = match &app.drag.source {
        DragSource::FromCatalog(entry) => app.visible().iter().position(|c| c == entry),
        _ => None,
    };
    CardGrid::new(
        &mut tui.card_grid,
        app.visible(),
        app.reveal.selected(),
        dragged_card,
        app.remaining_cards(),
        tui.focus == Focus::Catalog,
    )
    .render(frame, cards_area);

    let dragged_item = match app.drag.source {
        DragSource::WithinSequence(index) => Some(index),
        _ => None,
    };
    SequenceStrip::new(
        &mut tui.sequence_strip,
        app.sequence.items(),
        app.drag.over_drop_zone,
        app.drag.hover_index,
        dragged_item,
        tui.focus == Focus::Sequence,
    )
    .render(frame, sequence_area);

    let help = Span::styled(
        help_text(tui.focus, &app.drag.source),
        Style::default().fg(Color::DarkGray),
    );
    frame.render_widget(help, help_area);
}

fn drag_label(app: &App) -> Option<String> {
    match &app.drag.source {
        DragSource::Idle => None,
        DragSource::FromCatalog(entry) => Some(format!("{} {}", entry.symbol, entry.key)),
        DragSource::WithinSequence(index) => app
            .sequence
            .get(*index)
            .map(|placed| format!("{} {}", placed.symbol, placed.meaning)),
    }
}

fn help_text(focus: Focus, drag: &DragSource) -> &'static str {
    match (focus, drag) {
        (Focus::Sequence, DragSource::FromCatalog(_)) => " Enter Drop  Esc Cancel",
        (Focus::Sequence, DragSource::WithinSequence(_)) => " ←/→ Target  Enter Drop  Esc Cancel",
        (Focus::Translation, _) => {
            " Tab Next panel  Enter Translate  Esc Clear  Ctrl+Y Copy  Ctrl+Q Quit"
        }
        (Focus::Catalog, _) => {
            " Tab Next panel  Arrows Move  Enter Reveal/Add  a Add  g Grab  n More  Ctrl+Q Quit"
        }
        (Focus::Sequence, DragSource::Idle) => {
            " Tab Next panel  ←/→ Select  m Move  d Remove  Ctrl+Y Copy  Ctrl+L Clear  Ctrl+Q Quit"
        }
    }
}

/// Hit test a screen position against the layout cached by the last draw.
pub fn hit_test(tui: &TuiState, col: u16, row: u16) -> HitTarget {
    if let Some(hit) = tui.sequence_strip.hit_test(col, row) {
        return match hit {
            StripHit::Item(index) => HitTarget::SequenceItem(index),
            StripHit::RemoveButton(index) => HitTarget::SequenceRemove(index),
            StripHit::Zone => HitTarget::SequenceZone,
        };
    }
    if let Some(index) = tui.card_grid.card_at(col, row) {
        return HitTarget::Card(index);
    }
    if tui.card_grid.is_load_more_at(col, row) {
        return HitTarget::LoadMore;
    }
    let input = tui.input_area;
    if col >= input.x && col < input.right() && row >= input.y && row < input.bottom() {
        return HitTarget::TranslationInput;
    }
    HitTarget::Nothing
}

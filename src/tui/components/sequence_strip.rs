//! # SequenceStrip Component
//!
//! The drop zone: placed symbols laid out left to right, wrapping into rows.
//!
//! - `SequenceStripState` lives in `TuiState` (selection, scroll, cached layout)
//! - `SequenceStrip` borrows the placed items and drag highlight flags
//!
//! Each cell carries a `×` in its top-right corner; clicking it removes the
//! item. The border turns green while a drag hovers over the zone.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::sequence::PlacedSymbol;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const CELL_HEIGHT: u16 = 3;
/// Borders plus one column of padding either side.
const CELL_PADDING: u16 = 4;

const EMPTY_HINT: &str = "Drag hieroglyphs here, or press Enter on a revealed card";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceEvent {
    /// Enter: drop a carried drag at the selection.
    Confirm(usize),
    /// Esc: abandon a carried drag.
    Cancel,
    /// Selection moved (the parent updates drag hover).
    Selected(usize),
    Move { from: usize, to: usize },
    Remove(usize),
    PickUp(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripHit {
    Item(usize),
    RemoveButton(usize),
    /// Inside the zone but not on an item.
    Zone,
}

#[derive(Debug, Default)]
pub struct SequenceStripState {
    pub selected: usize,
    /// Synced by the parent before events are handled.
    pub item_count: usize,
    scroll_row: usize,
    /// `(item index, area)` for every cell drawn in the last frame.
    pub hit_boxes: Vec<(usize, Rect)>,
    /// The whole drop zone in the last frame.
    pub zone: Rect,
}

impl SequenceStripState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit_test(&self, col: u16, row: u16) -> Option<StripHit> {
        if !contains(&self.zone, col, row) {
            return None;
        }
        for &(index, rect) in &self.hit_boxes {
            if contains(&rect, col, row) {
                // The "×" sits just inside the top-right corner
                if row == rect.y && col + 2 >= rect.right() {
                    return Some(StripHit::RemoveButton(index));
                }
                return Some(StripHit::Item(index));
            }
        }
        Some(StripHit::Zone)
    }

    fn last(&self) -> usize {
        self.item_count.saturating_sub(1)
    }
}

impl EventHandler for SequenceStripState {
    type Event = SequenceEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape => Some(SequenceEvent::Cancel),
            _ if self.item_count == 0 => match event {
                TuiEvent::Submit => Some(SequenceEvent::Confirm(0)),
                _ => None,
            },
            TuiEvent::CursorLeft | TuiEvent::CursorUp => (self.selected > 0).then(|| {
                self.selected -= 1;
                SequenceEvent::Selected(self.selected)
            }),
            TuiEvent::CursorRight | TuiEvent::CursorDown => (self.selected < self.last()).then(|| {
                self.selected += 1;
                SequenceEvent::Selected(self.selected)
            }),
            TuiEvent::CursorHome => {
                self.selected = 0;
                Some(SequenceEvent::Selected(0))
            }
            TuiEvent::CursorEnd => {
                self.selected = self.last();
                Some(SequenceEvent::Selected(self.selected))
            }
            TuiEvent::MoveItemLeft => (self.selected > 0).then(|| {
                let from = self.selected;
                self.selected -= 1;
                SequenceEvent::Move {
                    from,
                    to: self.selected,
                }
            }),
            TuiEvent::MoveItemRight => (self.selected < self.last()).then(|| {
                let from = self.selected;
                self.selected += 1;
                SequenceEvent::Move {
                    from,
                    to: self.selected,
                }
            }),
            TuiEvent::Submit => Some(SequenceEvent::Confirm(self.selected)),
            TuiEvent::Delete | TuiEvent::Backspace | TuiEvent::InputChar('d') => {
                Some(SequenceEvent::Remove(self.selected))
            }
            TuiEvent::InputChar('m') => Some(SequenceEvent::PickUp(self.selected)),
            _ => None,
        }
    }
}

fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.right() && row >= rect.y && row < rect.bottom()
}

fn cell_width(item: &PlacedSymbol) -> u16 {
    item.symbol.width().max(1) as u16 + CELL_PADDING
}

pub struct SequenceStrip<'a> {
    state: &'a mut SequenceStripState,
    items: &'a [PlacedSymbol],
    over_drop_zone: bool,
    hover_index: Option<usize>,
    /// Index of the item being reordered, drawn dimmed.
    dragging: Option<usize>,
    focused: bool,
}

impl<'a> SequenceStrip<'a> {
    pub fn new(
        state: &'a mut SequenceStripState,
        items: &'a [PlacedSymbol],
        over_drop_zone: bool,
        hover_index: Option<usize>,
        dragging: Option<usize>,
        focused: bool,
    ) -> Self {
        Self {
            state,
            items,
            over_drop_zone,
            hover_index,
            dragging,
            focused,
        }
    }

    /// Lay cells out in rows of `width`. Returns `(index, row, x offset)`.
    fn layout(&self, width: u16) -> Vec<(usize, usize, u16)> {
        let mut out = Vec::with_capacity(self.items.len());
        let (mut row, mut x) = (0usize, 0u16);
        for (index, item) in self.items.iter().enumerate() {
            let w = cell_width(item).min(width);
            if x > 0 && x + w > width {
                row += 1;
                x = 0;
            }
            out.push((index, row, x));
            x += w;
        }
        out
    }

    fn render_cell(&self, frame: &mut Frame, index: usize, area: Rect) {
        let item = &self.items[index];
        let is_selected = self.focused && index == self.state.selected;

        let mut style = Style::default().fg(Color::Yellow);
        if self.hover_index == Some(index) {
            style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
        } else if is_selected {
            style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        if self.dragging == Some(index) {
            style = style.add_modifier(Modifier::DIM);
        }

        let block = Block::bordered()
            .border_type(if is_selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(style)
            .title(Line::from(Span::styled("×", Style::default().fg(Color::Red))).right_aligned());
        let paragraph = Paragraph::new(item.symbol.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

impl Component for SequenceStrip<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.over_drop_zone {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(if self.over_drop_zone {
                BorderType::Double
            } else {
                BorderType::Plain
            })
            .border_style(border_style)
            .title(format!(" Your Message ({}) ", self.items.len()))
            .title_bottom(
                Line::from(" m Move  Shift+←/→ Reorder  d Remove  Ctrl+Y Copy  Ctrl+L Clear ")
                    .right_aligned(),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.state.zone = area;
        self.state.item_count = self.items.len();
        self.state.selected = self.state.selected.min(self.items.len().saturating_sub(1));
        self.state.hit_boxes.clear();

        if self.items.is_empty() {
            let hint = Paragraph::new(EMPTY_HINT)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
                .alignment(Alignment::Center);
            let y = inner.y + inner.height.saturating_sub(1) / 2;
            frame.render_widget(hint, Rect { y, height: 1.min(inner.height), ..inner });
            return;
        }
        if inner.width == 0 || inner.height < CELL_HEIGHT {
            return;
        }

        let cells = self.layout(inner.width);
        let visible_rows = (inner.height / CELL_HEIGHT) as usize;
        let selected_row = cells
            .get(self.state.selected)
            .map(|&(_, row, _)| row)
            .unwrap_or(0);
        if selected_row < self.state.scroll_row {
            self.state.scroll_row = selected_row;
        } else if selected_row >= self.state.scroll_row + visible_rows {
            self.state.scroll_row = selected_row + 1 - visible_rows;
        }

        for (index, row, x) in cells {
            if row < self.state.scroll_row || row >= self.state.scroll_row + visible_rows {
                continue;
            }
            let rect = Rect {
                x: inner.x + x,
                y: inner.y + (row - self.state.scroll_row) as u16 * CELL_HEIGHT,
                width: cell_width(&self.items[index]).min(inner.width),
                height: CELL_HEIGHT,
            };
            self.render_cell(frame, index, rect);
            self.state.hit_boxes.push((index, rect));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::Sequence;
    use crate::test_support::entry;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn sequence(keys: &[&str]) -> Sequence {
        let mut seq = Sequence::new();
        for key in keys {
            seq.append(&entry(key));
        }
        seq
    }

    fn draw(
        state: &mut SequenceStripState,
        seq: &Sequence,
        hover: Option<usize>,
        over: bool,
    ) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal
            .draw(|f| {
                SequenceStrip::new(state, seq.items(), over, hover, None, true).render(f, f.area())
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_empty_strip_shows_hint() {
        let mut state = SequenceStripState::new();
        let text = draw(&mut state, &Sequence::new(), None, false);
        assert!(text.contains("Your Message (0)"));
        assert!(text.contains("Drag hieroglyphs here"));
        assert_eq!(state.hit_test(5, 4), Some(StripHit::Zone));
    }

    #[test]
    fn test_cells_and_hit_test() {
        let seq = sequence(&["a", "cat"]);
        let mut state = SequenceStripState::new();
        let text = draw(&mut state, &seq, Some(1), true);
        assert!(text.contains("Your Message (2)"));
        assert!(text.contains("𓄿"));
        assert!(text.contains("×"));
        assert_eq!(state.hit_boxes.len(), 2);

        let (_, cell) = state.hit_boxes[1];
        // "cat" is three glyphs wide
        assert_eq!(cell.width, 3 + CELL_PADDING);
        assert_eq!(state.hit_test(cell.x + 2, cell.y + 1), Some(StripHit::Item(1)));
        assert_eq!(
            state.hit_test(cell.right() - 2, cell.y),
            Some(StripHit::RemoveButton(1))
        );
        assert_eq!(state.hit_test(100, 100), None);
    }

    #[test]
    fn test_cells_wrap_into_rows() {
        let keys = ["a"; 12];
        let seq = sequence(&keys);
        let mut state = SequenceStripState::new();
        draw(&mut state, &seq, None, false);
        // 38 inner columns / 5 per cell = 7 per row, two rows fit in 6 lines
        assert_eq!(state.hit_boxes.len(), 12);
        assert_eq!(state.hit_boxes[7].1.y, state.hit_boxes[0].1.y + CELL_HEIGHT);
    }

    #[test]
    fn test_navigation_and_reorder_events() {
        let mut state = SequenceStripState::new();
        state.item_count = 3;
        assert_eq!(state.handle_event(&TuiEvent::CursorLeft), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorRight), Some(SequenceEvent::Selected(1)));
        assert_eq!(
            state.handle_event(&TuiEvent::MoveItemRight),
            Some(SequenceEvent::Move { from: 1, to: 2 })
        );
        assert_eq!(state.selected, 2);
        assert_eq!(state.handle_event(&TuiEvent::MoveItemRight), None);
        assert_eq!(state.handle_event(&TuiEvent::InputChar('m')), Some(SequenceEvent::PickUp(2)));
        assert_eq!(state.handle_event(&TuiEvent::Delete), Some(SequenceEvent::Remove(2)));
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(SequenceEvent::Confirm(2)));
    }

    #[test]
    fn test_empty_strip_still_accepts_drop_and_cancel() {
        let mut state = SequenceStripState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(SequenceEvent::Confirm(0)));
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(SequenceEvent::Cancel));
        assert_eq!(state.handle_event(&TuiEvent::Delete), None);
    }
}

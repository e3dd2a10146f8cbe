//! # CardGrid Component
//!
//! The browsable catalog: a grid of symbol cards with a "load more" row.
//!
//! - `CardGridState` lives in `TuiState` (selection, scroll, cached layout)
//! - `CardGrid` is built each frame from the visible cards and reveal flag
//!
//! Rendering records each card's `Rect` so the event loop can hit-test mouse
//! presses against the last frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::SymbolEntry;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const CARD_WIDTH: u16 = 16;
pub const CARD_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    /// Enter on a card: reveal it, or add it if already revealed.
    Activate(usize),
    /// Add without revealing first.
    Add(usize),
    /// Pick the card up for a keyboard drag.
    Grab(usize),
    LoadMore,
}

#[derive(Debug, Default)]
pub struct CardGridState {
    pub selected: usize,
    /// Number of cards currently paged in. Synced by the parent.
    pub card_count: usize,
    /// First grid row on screen.
    scroll_row: usize,
    /// Columns in the last render, used for Up/Down.
    columns: usize,
    /// `(card index, area)` for every card drawn in the last frame.
    pub hit_boxes: Vec<(usize, Rect)>,
    pub load_more_area: Option<Rect>,
}

impl CardGridState {
    pub fn new() -> Self {
        Self {
            columns: 1,
            ..Self::default()
        }
    }

    pub fn card_at(&self, col: u16, row: u16) -> Option<usize> {
        self.hit_boxes
            .iter()
            .find(|(_, rect)| contains(rect, col, row))
            .map(|(index, _)| *index)
    }

    pub fn is_load_more_at(&self, col: u16, row: u16) -> bool {
        self.load_more_area
            .is_some_and(|rect| contains(&rect, col, row))
    }

    fn step(&mut self, delta: isize) -> Option<CardEvent> {
        if self.card_count == 0 {
            return None;
        }
        let target = self.selected as isize + delta;
        if target < 0 || target >= self.card_count as isize {
            return None;
        }
        self.selected = target as usize;
        None
    }
}

impl EventHandler for CardGridState {
    type Event = CardEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let columns = self.columns.max(1) as isize;
        match event {
            TuiEvent::CursorLeft => self.step(-1),
            TuiEvent::CursorRight => self.step(1),
            TuiEvent::CursorUp => self.step(-columns),
            TuiEvent::CursorDown => self.step(columns),
            TuiEvent::CursorHome => {
                self.selected = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.selected = self.card_count.saturating_sub(1);
                None
            }
            TuiEvent::Submit if self.card_count > 0 => Some(CardEvent::Activate(self.selected)),
            TuiEvent::InputChar(' ' | 'a') if self.card_count > 0 => {
                Some(CardEvent::Add(self.selected))
            }
            TuiEvent::InputChar('g') if self.card_count > 0 => Some(CardEvent::Grab(self.selected)),
            TuiEvent::InputChar('n') => Some(CardEvent::LoadMore),
            _ => None,
        }
    }
}

fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Truncate to `max` display columns.
fn fit(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        if out.width() + c.to_string().width() >= max {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

pub struct CardGrid<'a> {
    state: &'a mut CardGridState,
    cards: &'a [SymbolEntry],
    revealed: Option<usize>,
    /// Card currently being dragged, drawn dimmed.
    dragging: Option<usize>,
    remaining: usize,
    focused: bool,
}

impl<'a> CardGrid<'a> {
    pub fn new(
        state: &'a mut CardGridState,
        cards: &'a [SymbolEntry],
        revealed: Option<usize>,
        dragging: Option<usize>,
        remaining: usize,
        focused: bool,
    ) -> Self {
        Self {
            state,
            cards,
            revealed,
            dragging,
            remaining,
            focused,
        }
    }

    fn render_card(&self, frame: &mut Frame, index: usize, area: Rect) {
        let entry = &self.cards[index];
        let is_selected = self.focused && index == self.state.selected;
        let is_revealed = self.revealed == Some(index);

        let mut border_style = match entry.category {
            crate::core::catalog::Category::Letter => Style::default().fg(Color::Blue),
            crate::core::catalog::Category::Word => Style::default().fg(Color::Magenta),
        };
        if is_revealed {
            border_style = Style::default().fg(Color::Green);
        }
        if is_selected {
            border_style = border_style.add_modifier(Modifier::BOLD).fg(Color::Yellow);
        }
        if self.dragging == Some(index) {
            border_style = border_style.add_modifier(Modifier::DIM);
        }

        let mut block = Block::bordered()
            .border_type(if is_selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style);
        if is_revealed {
            block = block.title_bottom(
                Line::from(Span::styled(
                    "[+ Add]",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ))
                .centered(),
            );
        }

        let inner = area.width.saturating_sub(2) as usize;
        let meaning = if entry.key == " " {
            "space"
        } else {
            entry.key.as_str()
        };
        let lines = vec![
            Line::from(Span::styled(
                fit(&entry.symbol, inner),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(fit(meaning, inner)),
            Line::from(Span::styled(
                entry.category.label(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }

    fn render_footer(&mut self, frame: &mut Frame, area: Rect) {
        let (text, style) = if self.remaining > 0 {
            (
                format!("▼ Load More Hieroglyphs ({} remaining)  [n]", self.remaining),
                Style::default().fg(Color::Cyan),
            )
        } else {
            (
                format!("All {} hieroglyphs shown", self.cards.len()),
                Style::default().fg(Color::DarkGray),
            )
        };
        frame.render_widget(
            Paragraph::new(text).style(style).alignment(Alignment::Center),
            area,
        );
        self.state.load_more_area = (self.remaining > 0).then_some(area);
    }
}

impl Component for CardGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let shown = self.cards.len();
        let total = shown + self.remaining;
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_style(border_style)
            .title(format!(" Hieroglyphs ({shown} of {total}) "))
            .title_bottom(
                Line::from(" Enter Reveal/Add  a Add  g Grab  n More ").right_aligned(),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.state.card_count = shown;
        self.state.selected = self.state.selected.min(shown.saturating_sub(1));
        self.state.hit_boxes.clear();
        self.state.load_more_area = None;

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let footer = Rect {
            y: inner.bottom() - 1,
            height: 1,
            ..inner
        };
        let grid = Rect {
            height: inner.height - 1,
            ..inner
        };

        let columns = (grid.width / CARD_WIDTH).max(1) as usize;
        let visible_rows = (grid.height / CARD_HEIGHT) as usize;
        self.state.columns = columns;

        // Keep the selected card's row on screen
        let selected_row = self.state.selected / columns;
        if selected_row < self.state.scroll_row {
            self.state.scroll_row = selected_row;
        } else if visible_rows > 0 && selected_row >= self.state.scroll_row + visible_rows {
            self.state.scroll_row = selected_row + 1 - visible_rows;
        }

        // Center the grid horizontally
        let used = columns as u16 * CARD_WIDTH;
        let x0 = grid.x + grid.width.saturating_sub(used) / 2;

        for row in 0..visible_rows {
            for col in 0..columns {
                let index = (self.state.scroll_row + row) * columns + col;
                if index >= shown {
                    break;
                }
                let rect = Rect {
                    x: x0 + col as u16 * CARD_WIDTH,
                    y: grid.y + row as u16 * CARD_HEIGHT,
                    width: CARD_WIDTH.min(grid.width),
                    height: CARD_HEIGHT,
                };
                self.render_card(frame, index, rect);
                self.state.hit_boxes.push((index, rect));
            }
        }

        self.render_footer(frame, footer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::entry;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn cards(keys: &[&str]) -> Vec<SymbolEntry> {
        keys.iter().map(|k| entry(k)).collect()
    }

    fn draw(
        state: &mut CardGridState,
        cards: &[SymbolEntry],
        revealed: Option<usize>,
        remaining: usize,
        width: u16,
        height: u16,
    ) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                CardGrid::new(state, cards, revealed, None, remaining, true).render(f, f.area())
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
    fn test_render_cards_and_hit_boxes() {
        let cards = cards(&["a", "b", "sun"]);
        let mut state = CardGridState::new();
        let text = draw(&mut state, &cards, None, 5, 60, 12);

        assert!(text.contains("Hieroglyphs (3 of 8)"));
        assert!(text.contains("𓇳"));
        assert!(text.contains("sun"));
        assert!(text.contains("word"));
        assert!(text.contains("5 remaining"));
        assert_eq!(state.hit_boxes.len(), 3);

        let (_, first) = state.hit_boxes[0];
        assert_eq!(state.card_at(first.x + 1, first.y + 1), Some(0));
        assert!(state.load_more_area.is_some());
    }

    #[test]
    fn test_revealed_card_shows_add() {
        let cards = cards(&["a", "b"]);
        let mut state = CardGridState::new();
        let text = draw(&mut state, &cards, Some(1), 0, 60, 12);
        assert!(text.contains("[+ Add]"));
        assert!(text.contains("All 2 hieroglyphs shown"));
        assert!(state.load_more_area.is_none());
    }

    #[test]
    fn test_navigation_uses_rendered_columns() {
        let cards = cards(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let mut state = CardGridState::new();
        // 2 + 3 * 16 = 50 wide: three columns
        draw(&mut state, &cards, None, 0, 50, 20);

        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 3);
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.selected, 4);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 7);
        // No row below: stays put
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 7);
        state.handle_event(&TuiEvent::CursorHome);
        assert_eq!(state.selected, 0);
        state.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_card_events() {
        let mut state = CardGridState::new();
        state.card_count = 4;
        state.selected = 2;
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(CardEvent::Activate(2)));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('a')), Some(CardEvent::Add(2)));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('g')), Some(CardEvent::Grab(2)));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('n')), Some(CardEvent::LoadMore));
    }

    #[test]
    fn test_empty_grid_emits_nothing_for_cards() {
        let mut state = CardGridState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.handle_event(&TuiEvent::InputChar('g')), None);
    }

    #[test]
    fn test_scrolls_to_selected_row() {
        let keys: Vec<String> = (0..12).map(|i| ((b'a' + i) as char).to_string()).collect();
        let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
        let cards = cards(&keys);
        let mut state = CardGridState::new();
        // One row of three visible: 2 borders + 5 card + 1 footer
        draw(&mut state, &cards, None, 0, 50, 8);
        state.selected = 10;
        draw(&mut state, &cards, None, 0, 50, 8);
        let drawn: Vec<usize> = state.hit_boxes.iter().map(|(i, _)| *i).collect();
        assert_eq!(drawn, [9, 10, 11]);
    }

    #[test]
    fn test_fit_truncates_by_width() {
        assert_eq!(fit("sun", 5), "sun");
        assert_eq!(fit("beautiful", 5), "beau…");
    }
}

//! # TranslationBar Component
//!
//! Single-line text input on top, wrapped translation output underneath.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TranslationInput` lives in `TuiState` and owns the buffer and cursor
//! - `TranslationBar` is created each frame with the output and flags as props
//!
//! The buffer is kept after Enter so the user can tweak the text and
//! translate again. Esc emits `Clear`; the parent forwards it to the core.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Input box height: one line plus borders.
const INPUT_HEIGHT: u16 = 3;
/// Top + bottom borders of the output block.
const VERTICAL_OVERHEAD: u16 = 2;
/// The output block stops growing past this many lines.
const MAX_OUTPUT_LINES: u16 = 4;

const PLACEHOLDER: &str = "Your translation will appear here";

#[derive(Debug, Clone, PartialEq)]
pub enum TranslationEvent {
    /// Enter with non-blank input.
    Submit(String),
    /// Esc: reset input and result.
    Clear,
    ContentChanged,
}

/// Persistent input state.
#[derive(Debug, Default)]
pub struct TranslationInput {
    pub buffer: String,
    /// Byte offset into `buffer`, always on a char boundary.
    cursor: usize,
}

impl TranslationInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn insert_str(&mut self, text: &str) {
        // Single-line input: pasted newlines become spaces
        let text = text.replace(['\r', '\n'], " ");
        self.buffer.insert_str(self.cursor, &text);
        self.cursor += text.len();
    }
}

impl EventHandler for TranslationInput {
    type Event = TranslationEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(TranslationEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.insert_str(text);
                Some(TranslationEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                let prev = prev_char_boundary(&self.buffer, self.cursor)?;
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(TranslationEvent::ContentChanged)
            }
            TuiEvent::Delete => {
                let next = next_char_boundary(&self.buffer, self.cursor)?;
                self.buffer.drain(self.cursor..next);
                Some(TranslationEvent::ContentChanged)
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor)?;
                Some(TranslationEvent::ContentChanged)
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor)?;
                Some(TranslationEvent::ContentChanged)
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                TranslationEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                TranslationEvent::ContentChanged
            }),
            TuiEvent::Submit => (!self.buffer.trim().is_empty())
                .then(|| TranslationEvent::Submit(self.buffer.clone())),
            TuiEvent::Escape => Some(TranslationEvent::Clear),
            _ => None,
        }
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> Option<usize> {
    text[..pos].char_indices().next_back().map(|(i, _)| i)
}

fn next_char_boundary(text: &str, pos: usize) -> Option<usize> {
    text[pos..].chars().next().map(|c| pos + c.len_utf8())
}

fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Transient render wrapper.
pub struct TranslationBar<'a> {
    pub input: &'a TranslationInput,
    pub output: &'a str,
    pub translating: bool,
    pub focused: bool,
}

impl<'a> TranslationBar<'a> {
    pub fn new(
        input: &'a TranslationInput,
        output: &'a str,
        translating: bool,
        focused: bool,
    ) -> Self {
        Self {
            input,
            output,
            translating,
            focused,
        }
    }

    /// Total height needed for `output` at `width`, input box included.
    pub fn height(output: &str, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        let lines = if output.is_empty() || inner == 0 {
            1
        } else {
            (textwrap::wrap(output, wrap_options(inner)).len() as u16).max(1)
        };
        INPUT_HEIGHT + lines.min(MAX_OUTPUT_LINES) + VERTICAL_OVERHEAD
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Enter text ")
            .title_bottom(Line::from(" Enter Translate  Esc Clear ").right_aligned());

        // Keep the cursor in view by scrolling the line horizontally
        let inner_width = area.width.saturating_sub(2) as usize;
        let before = self.input.buffer[..self.input.cursor].width();
        let offset = before.saturating_sub(inner_width.saturating_sub(1));

        let paragraph = Paragraph::new(self.input.buffer.as_str())
            .block(block)
            .scroll((0, offset as u16));
        frame.render_widget(paragraph, area);

        if self.focused {
            let x = area.x + 1 + (before - offset) as u16;
            frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }

    fn render_output(&self, frame: &mut Frame, area: Rect) {
        let title = if self.translating {
            " Translation (Translating...) "
        } else {
            " Translation "
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::DIM))
            .title(title)
            .title_bottom(Line::from(" Ctrl+Y Copy ").right_aligned());

        let paragraph = if self.output.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            let inner = area.width.saturating_sub(2).max(1);
            let lines: Vec<Line> = textwrap::wrap(self.output, wrap_options(inner))
                .into_iter()
                .map(|l| Line::from(l.into_owned()))
                .collect();
            Paragraph::new(lines).style(Style::default().fg(Color::Yellow))
        };
        frame.render_widget(paragraph.block(block), area);
    }
}

impl Component for TranslationBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [input_area, output_area] =
            Layout::vertical([Constraint::Length(INPUT_HEIGHT), Constraint::Min(0)]).areas(area);
        self.render_input(frame, input_area);
        self.render_output(frame, output_area);
    }
}

//! # TitleBar Component
//!
//! Top status bar: application name, focused panel and the latest status
//! message from the core.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Catalog", &app.status_message, None);
//! title_bar.render(frame, area);
//! ```
//!
//! While a drag is carried the drag label replaces the focus label, so the
//! user can see what will land on drop.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar<'a> {
    /// Name of the focused panel.
    pub focus_label: &'a str,
    /// Status message from the core.
    pub status_message: &'a str,
    /// What is being dragged, if anything (e.g. "𓇳 sun").
    pub dragging: Option<String>,
}

impl<'a> TitleBar<'a> {
    pub fn new(focus_label: &'a str, status_message: &'a str, dragging: Option<String>) -> Self {
        Self {
            focus_label,
            status_message,
            dragging,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Hieroglyph Translator",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )];

        match &self.dragging {
            Some(label) => spans.push(Span::styled(
                format!(" | Dragging {label}"),
                Style::default().fg(Color::Green),
            )),
            None => spans.push(Span::styled(
                format!(" | {}", self.focus_label),
                Style::default().fg(Color::Cyan),
            )),
        }

        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status() {
        let mut title_bar = TitleBar::new("Catalog", "Added 𓇳 (sun)", None);
        let text = render(&mut title_bar);

        assert!(text.contains("Hieroglyph Translator"));
        assert!(text.contains("Catalog"));
        assert!(text.contains("Added 𓇳 (sun)"));
    }

    #[test]
    fn test_title_bar_while_dragging() {
        let mut title_bar = TitleBar::new("Catalog", "", Some("𓇳 sun".into()));
        let text = render(&mut title_bar);

        assert!(text.contains("Dragging 𓇳 sun"));
        assert!(!text.contains("Catalog"));
    }

    #[test]
    fn test_title_bar_empty_status() {
        let mut title_bar = TitleBar::new("Translate", "", None);
        let text = render(&mut title_bar);

        assert_eq!(text.trim_end(), "Hieroglyph Translator | Translate");
    }
}

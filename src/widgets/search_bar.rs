use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

/// What a key press did to the search bar, so the app knows whether the
/// displayed list needs recomputing.
#[derive(Debug, PartialEq, Eq)]
pub enum SearchEvent {
    TermChanged,
    Closed,
    Ignored,
}

/// Single-line search input. Edits take effect on every keystroke, so the
/// bar carries no apply/cancel state, just the text and a focus flag.
pub struct SearchBar {
    input: String,
    active: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            active: false,
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn text(&self) -> &str {
        &self.input
    }

    pub fn set_text(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> SearchEvent {
        if !self.active || key_event.kind != KeyEventKind::Press {
            return SearchEvent::Ignored;
        }

        match key_event.code {
            // Leaving the bar keeps the current term applied.
            KeyCode::Esc | KeyCode::Enter => {
                self.active = false;
                SearchEvent::Closed
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                SearchEvent::TermChanged
            }
            KeyCode::Backspace => {
                self.input.pop();
                SearchEvent::TermChanged
            }
            _ => SearchEvent::Ignored,
        }
    }
}

impl Widget for &SearchBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.active {
            Color::Yellow
        } else {
            Color::Blue
        };
        let value_style = if self.active {
            Style::new().fg(Color::Yellow)
        } else {
            Style::new().fg(Color::Gray)
        };
        let value = if self.active {
            format!("{}_", self.input)
        } else {
            self.input.clone()
        };

        let block = Block::bordered()
            .title("Search")
            .title_style(Style::new().bold().fg(Color::Cyan))
            .border_type(BorderType::Plain)
            .border_style(Style::new().fg(border_color));

        Paragraph::new(Line::from(Span::styled(value, value_style)))
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_builds_the_term() {
        let mut bar = SearchBar::new();
        bar.activate();
        assert_eq!(bar.handle_key_event(press(KeyCode::Char('a'))), SearchEvent::TermChanged);
        assert_eq!(bar.handle_key_event(press(KeyCode::Char('b'))), SearchEvent::TermChanged);
        assert_eq!(bar.text(), "ab");

        assert_eq!(bar.handle_key_event(press(KeyCode::Backspace)), SearchEvent::TermChanged);
        assert_eq!(bar.text(), "a");
    }

    #[test]
    fn closing_keeps_the_term() {
        let mut bar = SearchBar::new();
        bar.activate();
        bar.handle_key_event(press(KeyCode::Char('x')));
        assert_eq!(bar.handle_key_event(press(KeyCode::Esc)), SearchEvent::Closed);
        assert!(!bar.is_active());
        assert_eq!(bar.text(), "x");
    }

    #[test]
    fn inactive_bar_ignores_keys() {
        let mut bar = SearchBar::new();
        assert_eq!(bar.handle_key_event(press(KeyCode::Char('a'))), SearchEvent::Ignored);
        assert_eq!(bar.text(), "");
    }
}

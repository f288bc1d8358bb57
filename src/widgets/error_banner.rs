use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

/// Dismissible banner for load failures. Hidden it renders nothing and the
/// layout collapses its row.
pub struct ErrorBanner {
    message: Option<String>,
}

impl ErrorBanner {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn show(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }

    pub fn hide(&mut self) {
        self.message = None;
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}

impl Widget for &ErrorBanner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(message) = self.message.as_deref() else {
            return;
        };

        let block = Block::bordered()
            .title("Error")
            .title_style(Style::new().bold().fg(Color::Red))
            .border_type(BorderType::Plain)
            .border_style(Style::new().fg(Color::Red));

        Paragraph::new(message)
            .style(Style::new().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

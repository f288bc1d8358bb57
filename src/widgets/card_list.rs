use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::cards::{ShowCard, EMPTY_LIST_MESSAGE};

// Border rows plus genres, rating, image URL and a wrapped summary line.
const CARD_HEIGHT: u16 = 7;

pub struct CardListWidget {
    cards: Vec<ShowCard>,
    scroll_offset: usize,
}

impl CardListWidget {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            scroll_offset: 0,
        }
    }

    /// Swaps in a freshly projected list; the view snaps back to the top.
    pub fn set_cards(&mut self, cards: Vec<ShowCard>) {
        self.cards = cards;
        self.scroll_offset = 0;
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize, visible_cards: usize) {
        let max_scroll = self.cards.len().saturating_sub(visible_cards.max(1));
        self.scroll_offset = (self.scroll_offset + amount).min(max_scroll);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self, visible_cards: usize) {
        self.scroll_offset = self.cards.len().saturating_sub(visible_cards.max(1));
    }

    pub fn visible_cards(&self, area_height: u16) -> usize {
        (area_height / CARD_HEIGHT).max(1) as usize
    }
}

impl Widget for &CardListWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.cards.is_empty() {
            Paragraph::new(EMPTY_LIST_MESSAGE)
                .style(Style::new().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let visible = self.visible_cards(area.height);
        let start = self.scroll_offset.min(self.cards.len().saturating_sub(1));
        let end = (start + visible).min(self.cards.len());

        let mut y = area.y;
        for card in &self.cards[start..end] {
            let remaining = area.bottom().saturating_sub(y);
            let height = CARD_HEIGHT.min(remaining);
            if height < 3 {
                break;
            }
            render_card(
                card,
                Rect {
                    x: area.x,
                    y,
                    width: area.width,
                    height,
                },
                buf,
            );
            y += height;
        }
    }
}

fn render_card(card: &ShowCard, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .title(card.name.clone())
        .title_style(Style::new().bold().fg(Color::Cyan))
        .border_type(BorderType::Plain)
        .border_style(Style::new().fg(Color::Blue));
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = vec![
        Line::from(vec![
            Span::styled("Genres: ", Style::new().bold().fg(Color::White)),
            Span::raw(card.genres.clone()),
        ]),
        Line::from(vec![
            Span::styled("Rating: ", Style::new().bold().fg(Color::White)),
            Span::styled(card.rating.clone(), Style::new().fg(Color::Yellow)),
        ]),
        Line::from(Span::styled(
            card.image_url.clone(),
            Style::new().fg(Color::DarkGray),
        )),
        Line::from(Span::raw(card.summary.clone())),
    ];
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

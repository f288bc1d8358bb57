use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::browser::{ShowBrowser, SortKey};
use crate::cards::cards_for;
use crate::cli::Options;
use crate::models::Show;
use crate::tvmaze::{CatalogError, ShowsApi, TvMazeClient};
use crate::widgets::{search_bar::SearchEvent, CardListWidget, ErrorBanner, SearchBar};

const SCROLL_PAGE: usize = 5;
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Everything that can wake the UI loop. Keyboard input and finished loads
/// arrive over one channel, so the loop below is the only state mutator.
enum AppMessage {
    Input(Event),
    CatalogLoaded(Result<Vec<Show>, CatalogError>),
}

pub struct App {
    api: Arc<dyn ShowsApi>,
    browser: ShowBrowser,
    card_list: CardListWidget,
    search_bar: SearchBar,
    error_banner: ErrorBanner,
    initial_search: Option<String>,
    initial_sort: Option<SortKey>,
    loading: bool,
    exit: bool,
    cards_viewport: u16,
}

pub async fn run(opts: Options, terminal: &mut DefaultTerminal) -> Result<()> {
    let api: Arc<dyn ShowsApi> = Arc::new(TvMazeClient::new(&opts.url)?);
    info!("Fetching shows from {}", opts.url);
    App::new(api, opts.search, opts.sort).run(terminal).await
}

impl App {
    pub fn new(
        api: Arc<dyn ShowsApi>,
        initial_search: Option<String>,
        initial_sort: Option<SortKey>,
    ) -> Self {
        Self {
            api,
            browser: ShowBrowser::new(),
            card_list: CardListWidget::new(),
            search_bar: SearchBar::new(),
            error_banner: ErrorBanner::new(),
            initial_search,
            initial_sort,
            loading: false,
            exit: false,
            cards_viewport: 0,
        }
    }

    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let (tx, mut rx) = mpsc::channel::<AppMessage>(64);

        spawn_input_reader(tx.clone());
        self.start_load(&tx);

        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            let Some(msg) = rx.recv().await else { break };
            self.handle_message(msg, &tx);
            // Drain whatever queued up while drawing (fast typing) so each
            // batch costs one frame.
            while let Ok(msg) = rx.try_recv() {
                self.handle_message(msg, &tx);
            }
        }
        Ok(())
    }

    fn handle_message(&mut self, msg: AppMessage, tx: &mpsc::Sender<AppMessage>) {
        match msg {
            AppMessage::Input(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, tx);
            }
            AppMessage::Input(_) => {}
            AppMessage::CatalogLoaded(result) => self.finish_load(result),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppMessage>) {
        if self.search_bar.is_active() {
            if self.search_bar.handle_key_event(key) == SearchEvent::TermChanged {
                self.apply_search();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.exit = true,
            KeyCode::Char('/') => self.search_bar.activate(),
            KeyCode::Char('c') => {
                self.search_bar.clear();
                self.apply_search();
            }
            KeyCode::Char('r') => self.start_load(tx),
            KeyCode::Char('1') => self.apply_sort(SortKey::NameAsc),
            KeyCode::Char('2') => self.apply_sort(SortKey::NameDesc),
            KeyCode::Char('3') => self.apply_sort(SortKey::RatingAsc),
            KeyCode::Char('4') => self.apply_sort(SortKey::RatingDesc),
            KeyCode::Up => self.card_list.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.card_list.scroll_up(SCROLL_PAGE),
            KeyCode::PageDown => self.scroll_down(SCROLL_PAGE),
            KeyCode::Home => self.card_list.scroll_to_top(),
            KeyCode::End => {
                let visible = self.visible_cards();
                self.card_list.scroll_to_bottom(visible);
            }
            _ => {}
        }
    }

    /// Kicks off a catalog fetch on a worker task; at most one is in
    /// flight, extra reload presses are dropped.
    fn start_load(&mut self, tx: &mpsc::Sender<AppMessage>) {
        if self.loading {
            return;
        }
        self.loading = true;
        self.browser.begin_load();
        self.error_banner.hide();

        let api = self.api.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_shows().await;
            let _ = tx.send(AppMessage::CatalogLoaded(result)).await;
        });
    }

    fn finish_load(&mut self, result: Result<Vec<Show>, CatalogError>) {
        self.loading = false;
        match &result {
            Ok(shows) => info!("Loaded {} shows", shows.len()),
            Err(err) => error!("Catalog load failed: {err}"),
        }
        self.browser.apply_load_result(result);
        match self.browser.error() {
            Some(message) => self.error_banner.show(message),
            None => {
                self.error_banner.hide();
                self.search_bar.clear();
                self.apply_initial_view();
            }
        }
        self.sync_cards();
    }

    // One-shot application of --search / --sort once a catalog exists.
    fn apply_initial_view(&mut self) {
        if let Some(term) = self.initial_search.take() {
            self.search_bar.set_text(&term);
            self.browser.set_search_term(term);
        }
        if let Some(key) = self.initial_sort.take() {
            self.browser.set_sort(key);
        }
    }

    fn apply_search(&mut self) {
        self.browser.set_search_term(self.search_bar.text());
        self.sync_cards();
    }

    fn apply_sort(&mut self, key: SortKey) {
        self.browser.set_sort(key);
        self.sync_cards();
    }

    fn sync_cards(&mut self) {
        self.card_list.set_cards(cards_for(self.browser.displayed()));
    }

    fn visible_cards(&self) -> usize {
        self.card_list.visible_cards(self.cards_viewport)
    }

    fn scroll_down(&mut self, amount: usize) {
        let visible = self.visible_cards();
        self.card_list.scroll_down(amount, visible);
    }

    fn draw(&mut self, frame: &mut Frame) {
        let banner_height = if self.error_banner.is_visible() { 3 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // Search bar
                Constraint::Length(banner_height), // Error banner, collapsed when hidden
                Constraint::Min(3),                // Cards
                Constraint::Length(1),             // Status bar
            ])
            .split(frame.area());

        frame.render_widget(&self.search_bar, chunks[0]);
        if self.error_banner.is_visible() {
            frame.render_widget(&self.error_banner, chunks[1]);
        }
        self.cards_viewport = chunks[2].height;
        frame.render_widget(&self.card_list, chunks[2]);
        self.render_status_bar(frame, chunks[3]);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mut status = vec![
            Span::styled(
                format!(
                    "{}/{} shows",
                    self.browser.displayed().len(),
                    self.browser.catalog().len()
                ),
                Style::new().fg(Color::Yellow),
            ),
            Span::raw(" | "),
            Span::styled(
                format!(
                    "Sort: {}",
                    self.browser.sort_key().map(|k| k.as_str()).unwrap_or("none")
                ),
                Style::new().fg(Color::Cyan),
            ),
            Span::raw(" | "),
        ];

        if self.loading {
            status.push(Span::styled("Loading... ", Style::new().fg(Color::Magenta)));
        }

        status.push(Span::styled("/", Style::new().fg(Color::Green)));
        status.push(Span::raw(": Search "));
        status.push(Span::styled("1-4", Style::new().fg(Color::Green)));
        status.push(Span::raw(": Sort "));
        status.push(Span::styled("c", Style::new().fg(Color::Green)));
        status.push(Span::raw(": Clear "));
        status.push(Span::styled("r", Style::new().fg(Color::Green)));
        status.push(Span::raw(": Reload "));
        status.push(Span::styled("↑↓", Style::new().fg(Color::Green)));
        status.push(Span::raw(": Scroll "));
        status.push(Span::styled("q", Style::new().fg(Color::Green)));
        status.push(Span::raw(": Quit"));

        frame.render_widget(Paragraph::new(Line::from(status)), area);
    }
}

/// Reads terminal events on a plain thread and forwards them to the loop.
/// Polling lets the thread notice a closed channel and exit instead of
/// blocking in `event::read` forever.
fn spawn_input_reader(tx: mpsc::Sender<AppMessage>) {
    std::thread::spawn(move || loop {
        match event::poll(EVENT_POLL_INTERVAL) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(AppMessage::Input(ev)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            },
            Ok(false) => {
                if tx.is_closed() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
}

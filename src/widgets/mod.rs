pub mod card_list;
pub mod error_banner;
pub mod search_bar;

pub use self::card_list::CardListWidget;
pub use self::error_banner::ErrorBanner;
pub use self::search_bar::SearchBar;

use std::sync::Mutex;

use reqwest::StatusCode;
use showdeck::browser::{ShowBrowser, SortKey};
use showdeck::cards::{
    cards_for, NO_GENRES_LABEL, NO_RATING_LABEL, NO_SUMMARY_MESSAGE, PLACEHOLDER_IMAGE_URL,
};
use showdeck::models::{Rating, Show, ShowImage};
use showdeck::tvmaze::{CatalogError, ShowsApi};

struct FakeShows {
    shows: Vec<Show>,
    calls: Mutex<usize>,
}

impl FakeShows {
    fn new(shows: Vec<Show>) -> Self {
        Self {
            shows,
            calls: Mutex::new(0),
        }
    }

    fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl ShowsApi for FakeShows {
    async fn fetch_shows(&self) -> Result<Vec<Show>, CatalogError> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.shows.clone())
    }
}

struct FailingShows {
    status: StatusCode,
}

#[async_trait::async_trait]
impl ShowsApi for FailingShows {
    async fn fetch_shows(&self) -> Result<Vec<Show>, CatalogError> {
        Err(CatalogError::HttpStatus {
            status: self.status,
        })
    }
}

struct GarbledShows;

#[async_trait::async_trait]
impl ShowsApi for GarbledShows {
    async fn fetch_shows(&self) -> Result<Vec<Show>, CatalogError> {
        let shows = serde_json::from_str::<Vec<Show>>("<html>not json</html>")?;
        Ok(shows)
    }
}

fn show(id: i64, name: &str, rating: Option<f64>) -> Show {
    Show {
        id,
        name: name.to_string(),
        genres: vec!["Drama".to_string()],
        rating: Some(Rating { average: rating }),
        image: Some(ShowImage {
            medium: Some(format!("https://static.tvmaze.com/{id}.jpg")),
            original: None,
        }),
        summary: Some(format!("<p>About {name}.</p>")),
    }
}

fn sample_catalog() -> Vec<Show> {
    vec![
        show(1, "Zeta", Some(5.0)),
        show(2, "Alpha", None),
        show(3, "Gamma", Some(7.5)),
        show(4, "Magma", Some(2.0)),
    ]
}

async fn load(browser: &mut ShowBrowser, api: &dyn ShowsApi) {
    browser.begin_load();
    browser.apply_load_result(api.fetch_shows().await);
}

#[tokio::test]
async fn successful_load_shows_catalog_in_api_order() {
    let api = FakeShows::new(sample_catalog());
    let mut browser = ShowBrowser::new();
    load(&mut browser, &api).await;

    assert_eq!(api.call_count(), 1);
    assert!(browser.error().is_none());
    let names: Vec<_> = browser.displayed().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Gamma", "Magma"]);

    let cards = cards_for(browser.displayed());
    assert_eq!(cards[0].name, "Zeta");
    assert_eq!(cards[0].summary, "About Zeta.");
    assert_eq!(cards[0].genres, "Drama");
    assert_eq!(cards[0].rating, "5");
    assert_eq!(cards[1].rating, NO_RATING_LABEL);
}

#[tokio::test]
async fn server_error_sets_banner_with_status_code() {
    let api = FailingShows {
        status: StatusCode::INTERNAL_SERVER_ERROR,
    };
    let mut browser = ShowBrowser::new();
    load(&mut browser, &api).await;

    let message = browser.error().expect("load failure should set an error");
    assert!(message.starts_with("Failed to load shows. Try again later."));
    assert!(message.contains("500"));
    assert!(browser.catalog().is_empty());
    assert!(browser.displayed().is_empty());
}

#[tokio::test]
async fn parse_failure_sets_banner_and_keeps_nothing() {
    let mut browser = ShowBrowser::new();
    load(&mut browser, &GarbledShows).await;

    let message = browser.error().expect("parse failure should set an error");
    assert!(message.starts_with("Failed to load shows. Try again later."));
    assert!(message.contains("JSON parse failed"));
}

#[tokio::test]
async fn failed_reload_keeps_the_previous_catalog() {
    let good = FakeShows::new(sample_catalog());
    let bad = FailingShows {
        status: StatusCode::SERVICE_UNAVAILABLE,
    };
    let mut browser = ShowBrowser::new();

    load(&mut browser, &good).await;
    browser.set_search_term("ga");
    let before: Vec<_> = browser.displayed().iter().map(|s| s.id).collect();

    load(&mut browser, &bad).await;
    assert!(browser.error().unwrap().contains("503"));
    assert_eq!(browser.catalog().len(), 4);
    let after: Vec<_> = browser.displayed().iter().map(|s| s.id).collect();
    assert_eq!(before, after);

    // A later successful reload clears the banner and resets the view.
    load(&mut browser, &good).await;
    assert!(browser.error().is_none());
    assert_eq!(browser.search_term(), "");
    assert_eq!(browser.displayed().len(), 4);
}

#[tokio::test]
async fn search_sort_and_render_compose() {
    let api = FakeShows::new(sample_catalog());
    let mut browser = ShowBrowser::new();
    load(&mut browser, &api).await;

    browser.set_search_term("ma");
    browser.set_sort(SortKey::RatingAsc);
    let ids: Vec<_> = browser.displayed().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![4, 3]);

    browser.set_sort(SortKey::NameAsc);
    let names: Vec<_> = browser.displayed().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Gamma", "Magma"]);

    let cards = cards_for(browser.displayed());
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].image_url, "https://static.tvmaze.com/3.jpg");
}

#[tokio::test]
async fn sparse_shows_render_with_fallbacks() {
    let sparse = Show {
        id: 9,
        name: "Mystery".to_string(),
        genres: Vec::new(),
        rating: Some(Rating { average: None }),
        image: None,
        summary: Some("<p></p>".to_string()),
    };
    let api = FakeShows::new(vec![sparse]);
    let mut browser = ShowBrowser::new();
    load(&mut browser, &api).await;

    let cards = cards_for(browser.displayed());
    assert_eq!(cards[0].image_url, PLACEHOLDER_IMAGE_URL);
    assert_eq!(cards[0].genres, NO_GENRES_LABEL);
    assert_eq!(cards[0].rating, NO_RATING_LABEL);
    assert_eq!(cards[0].summary, NO_SUMMARY_MESSAGE);
}

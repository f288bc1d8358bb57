use std::cmp::Ordering;

use crate::models::Show;
use crate::tvmaze::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    NameAsc,
    NameDesc,
    RatingAsc,
    RatingDesc,
}

impl SortKey {
    /// Parses a criterion name as it appears on the command line. Unknown
    /// input yields `None` and callers leave the current order untouched.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "name-asc" => Some(SortKey::NameAsc),
            "name-desc" => Some(SortKey::NameDesc),
            "rating-asc" => Some(SortKey::RatingAsc),
            "rating-desc" => Some(SortKey::RatingDesc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::RatingAsc => "rating-asc",
            SortKey::RatingDesc => "rating-desc",
        }
    }
}

/// Rating used for ordering only: a missing or null average counts as 0.
/// The card renderer deliberately does not share this substitution; it
/// shows "N/A" instead.
pub fn effective_rating(show: &Show) -> f64 {
    show.rating
        .as_ref()
        .and_then(|r| r.average)
        .unwrap_or(0.0)
}

/// Case-insensitive substring match on the show name. A term that is empty
/// after trimming matches everything, so the result is the catalog itself.
pub fn filter_shows(catalog: &[Show], term: &str) -> Vec<Show> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.to_vec();
    }
    catalog
        .iter()
        .filter(|show| show.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn sort_shows(mut list: Vec<Show>, key: SortKey) -> Vec<Show> {
    match key {
        SortKey::NameAsc => list.sort_by(|a, b| name_order(a, b)),
        SortKey::NameDesc => list.sort_by(|a, b| name_order(b, a)),
        SortKey::RatingAsc => {
            list.sort_by(|a, b| effective_rating(a).total_cmp(&effective_rating(b)))
        }
        SortKey::RatingDesc => {
            list.sort_by(|a, b| effective_rating(b).total_cmp(&effective_rating(a)))
        }
    }
    list
}

// Case-folded comparison with the raw name as tiebreak, so "apple" and
// "Apple" order deterministically in both directions.
fn name_order(a: &Show, b: &Show) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Owns the loaded catalog and everything derived from it.
///
/// The displayed list is always `sort?(filter(catalog, term))`, recomputed
/// from the full catalog on every change; narrowing a search and widening
/// it again always round-trips through the same source data.
#[derive(Debug, Default)]
pub struct ShowBrowser {
    catalog: Vec<Show>,
    displayed: Vec<Show>,
    term: String,
    sort: Option<SortKey>,
    error: Option<String>,
}

impl ShowBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &[Show] {
        &self.catalog
    }

    pub fn displayed(&self) -> &[Show] {
        &self.displayed
    }

    pub fn search_term(&self) -> &str {
        &self.term
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Called when a load is kicked off: any stale error is dismissed.
    pub fn begin_load(&mut self) {
        self.error = None;
    }

    pub fn apply_load_result(&mut self, result: Result<Vec<Show>, CatalogError>) {
        match result {
            Ok(shows) => self.apply_catalog(shows),
            Err(err) => self.apply_load_error(&err),
        }
    }

    /// A successful load replaces the catalog wholesale and resets the view;
    /// search term and sort order do not survive a reload.
    pub fn apply_catalog(&mut self, shows: Vec<Show>) {
        self.catalog = shows;
        self.term.clear();
        self.sort = None;
        self.error = None;
        self.displayed = self.catalog.clone();
    }

    /// A failed load keeps whatever catalog was already on screen.
    pub fn apply_load_error(&mut self, err: &CatalogError) {
        self.error = Some(format!("Failed to load shows. Try again later. ({err})"));
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.recompute();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort = Some(key);
        self.recompute();
    }

    fn recompute(&mut self) {
        let mut next = filter_shows(&self.catalog, &self.term);
        if let Some(key) = self.sort {
            next = sort_shows(next, key);
        }
        self.displayed = next;
    }
}

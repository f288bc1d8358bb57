use crate::models::Show;

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/250x350?text=No+Image";
pub const NO_GENRES_LABEL: &str = "Not specified";
pub const NO_RATING_LABEL: &str = "N/A";
pub const NO_SUMMARY_MESSAGE: &str = "No description available.";
pub const EMPTY_LIST_MESSAGE: &str = "Nothing found.";

/// One show, flattened to display text. Every optional field is already
/// resolved to its fallback here, so the widget layer never sees a `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowCard {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub genres: String,
    pub rating: String,
    pub summary: String,
}

pub fn cards_for(shows: &[Show]) -> Vec<ShowCard> {
    shows.iter().map(card_for).collect()
}

pub fn card_for(show: &Show) -> ShowCard {
    let image_url = show
        .image
        .as_ref()
        .and_then(|img| img.medium.clone())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());

    let genres = if show.genres.is_empty() {
        NO_GENRES_LABEL.to_string()
    } else {
        show.genres.join(", ")
    };

    let rating = match show.rating.as_ref().and_then(|r| r.average) {
        Some(average) => average.to_string(),
        None => NO_RATING_LABEL.to_string(),
    };

    let summary = show
        .summary
        .as_deref()
        .map(strip_markup)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_SUMMARY_MESSAGE.to_string());

    ShowCard {
        id: show.id,
        name: show.name.clone(),
        image_url,
        genres,
        rating,
        summary,
    }
}

/// Removes every `<...>` span; TVMaze summaries are HTML fragments.
/// A `<` with no closing `>` is plain text and survives.
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        match rest[start..].find('>') {
            Some(end) => rest = &rest[start + end + 1..],
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out.trim().to_string()
}

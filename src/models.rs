use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Show {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub rating: Option<Rating>,
    pub image: Option<ShowImage>,
    pub summary: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Rating {
    // TVMaze sends {"average": null} for unrated shows.
    pub average: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ShowImage {
    pub medium: Option<String>,
    pub original: Option<String>,
}

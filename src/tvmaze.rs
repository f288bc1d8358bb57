use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use crate::models::Show;

pub const DEFAULT_SHOWS_URL: &str = "https://api.tvmaze.com/shows";

/// Why a catalog load failed. The distinction matters to callers: transport
/// and parse failures have no HTTP status to report, while `HttpStatus`
/// carries the code verbatim so the UI can surface it.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: StatusCode },
    #[error("JSON parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait ShowsApi: Send + Sync {
    async fn fetch_shows(&self) -> Result<Vec<Show>, CatalogError>;
}

#[derive(Debug, Clone)]
pub struct TvMazeClient {
    client: Client,
    url: String,
}

impl TvMazeClient {
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .user_agent(format!("showdeck/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build TVMaze HTTP client")?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl ShowsApi for TvMazeClient {
    async fn fetch_shows(&self) -> Result<Vec<Show>, CatalogError> {
        let res = self.client.get(&self.url).send().await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(CatalogError::HttpStatus { status });
        }
        let shows: Vec<Show> = serde_json::from_str(&text)?;
        Ok(shows)
    }
}

use serde::Deserialize;
use thiserror::Error;

/// Base URL of the picsum photo-listing endpoint
const LIST_URL: &str = "https://picsum.photos/v2/list";

/// Number of records requested per page
pub const PAGE_SIZE: u32 = 30;

/// One entry of the listing response.
///
/// Only the fields the gallery consumes are declared; anything else in the
/// payload (dimensions etc.) is ignored. Values are passed through unmodified.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageRecord {
    /// Stable identifier assigned by the API
    pub id: String,
    /// Photographer display name
    pub author: String,
    /// Detail page for the photo (off-site)
    pub url: String,
    /// Full-resolution download URL
    pub download_url: String,
}

/// The single failure mode of the gallery: a page request that didn't come
/// back with usable JSON. Never retried, never shown in the UI; logged only.
///
/// `Clone` so the error can travel inside an iced message.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Network(err.to_string()),
        }
    }
}

/// Build the listing URL for a 1-based page number.
pub fn page_url(page: u32) -> String {
    format!("{}?page={}&limit={}", LIST_URL, page, PAGE_SIZE)
}

/// Fetch one page of image metadata.
///
/// Single attempt: non-2xx statuses and transport errors both surface as
/// `FetchError` and are left to the caller to log.
pub async fn fetch_page(
    client: reqwest::Client,
    page: u32,
) -> Result<Vec<ImageRecord>, FetchError> {
    let records = client
        .get(page_url(page))
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<ImageRecord>>()
        .await?;

    Ok(records)
}

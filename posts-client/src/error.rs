use reqwest::{Response, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostsClientError {
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Not found")]
    NotFound,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Invalid base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Fetching page {page} failed: {source}")]
    PageFailed {
        page: u32,
        #[source]
        source: Box<PostsClientError>,
    },
}

impl PostsClientError {
    /// Maps a non-success response onto an error, keeping the body text for
    /// anything that is not an auth or lookup failure.
    pub async fn from_http_response(resp: Response) -> Self {
        match resp.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized,
            StatusCode::NOT_FOUND => Self::NotFound,
            status => Self::Http {
                status: status.as_u16(),
                message: resp.text().await.unwrap_or_default(),
            },
        }
    }
}

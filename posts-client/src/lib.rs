//! HTTP collaborators of the posts statistics tool: registration against the
//! posts API and the concurrent page fetch.

use async_trait::async_trait;
use posts_stats::PostRecord;

mod error;
mod fetch;
mod http_client;

pub use error::PostsClientError;
pub use fetch::fetch_all_pages;
pub use http_client::{DEFAULT_TIMEOUT, PostsClientHttp};

/// Identity exchanged for a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub email: String,
    pub name: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), PostsClientError> {
        if self.client_id.trim().is_empty() {
            return Err(PostsClientError::InvalidRequest(
                "client_id must not be empty".to_string(),
            ));
        }
        if !self.email.contains('@') {
            return Err(PostsClientError::InvalidRequest("Wrong email".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(PostsClientError::InvalidRequest(
                "name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn register(&self, credentials: &Credentials) -> Result<SessionToken, PostsClientError>;
    async fn fetch_page(
        &self,
        token: &SessionToken,
        page: u32,
    ) -> Result<Vec<PostRecord>, PostsClientError>;
}

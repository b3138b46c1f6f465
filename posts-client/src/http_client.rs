use crate::error::PostsClientError;
use crate::{Credentials, PostsApi, SessionToken};
use async_trait::async_trait;
use posts_stats::PostRecord;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct PostsClientHttp {
    client: Arc<Client>,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct RegisterData {
    sl_token: String,
}

#[derive(Debug, Deserialize)]
struct PostsPage {
    #[serde(default)]
    page: Option<u32>,
    posts: Vec<PostRecord>,
}

impl PostsClientHttp {
    pub async fn connect(endpoint: &str) -> Result<Self, PostsClientError> {
        Self::connect_with_timeout(endpoint, DEFAULT_TIMEOUT).await
    }

    pub async fn connect_with_timeout(
        endpoint: &str,
        timeout: Duration,
    ) -> Result<Self, PostsClientError> {
        let base_url = endpoint.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| PostsClientError::InvalidBaseUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client: Arc::new(Client::builder().timeout(timeout).build()?),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PostsApi for PostsClientHttp {
    async fn register(&self, credentials: &Credentials) -> Result<SessionToken, PostsClientError> {
        credentials.validate()?;

        let resp = self
            .client
            .post(format!("{}/register", self.base_url))
            .json(&serde_json::json!({
                "client_id": credentials.client_id,
                "email": credentials.email,
                "name": credentials.name,
            }))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(PostsClientError::from_http_response(resp).await);
        }

        let registered: Envelope<RegisterData> = resp.json().await?;
        if registered.data.sl_token.is_empty() {
            return Err(PostsClientError::Unauthorized);
        }

        info!(email = %credentials.email, "registered with posts api");
        Ok(SessionToken::new(registered.data.sl_token))
    }

    async fn fetch_page(
        &self,
        token: &SessionToken,
        page: u32,
    ) -> Result<Vec<PostRecord>, PostsClientError> {
        let page_param = page.to_string();
        let resp = self
            .client
            .get(format!("{}/posts", self.base_url))
            .query(&[("sl_token", token.as_str()), ("page", page_param.as_str())])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(PostsClientError::from_http_response(resp).await);
        }

        let body: Envelope<PostsPage> = resp.json().await?;
        debug!(
            page,
            served_page = ?body.data.page,
            posts = body.data.posts.len(),
            "page fetched"
        );
        Ok(body.data.posts)
    }
}

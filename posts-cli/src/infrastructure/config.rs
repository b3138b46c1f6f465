use std::time::Duration;

use anyhow::Context;
use posts_client::{Credentials, DEFAULT_TIMEOUT};

use crate::cli::Cli;

pub const DEFAULT_API_URL: &str = "https://api.supermetrics.com/assignment";
pub const DEFAULT_PAGES: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub client_id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub pages: u32,
    pub utc_offset_minutes: i32,
    pub timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("POSTS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        let pages = match lookup("POSTS_PAGES") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid POSTS_PAGES: {}", e))?,
            None => DEFAULT_PAGES,
        };
        let utc_offset_minutes = match lookup("POSTS_UTC_OFFSET_MINUTES") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid POSTS_UTC_OFFSET_MINUTES: {}", e))?,
            None => 0,
        };
        let timeout = match lookup("POSTS_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(
                v.trim()
                    .parse()
                    .map_err(|e| anyhow::anyhow!("invalid POSTS_TIMEOUT_SECS: {}", e))?,
            ),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_url,
            client_id: lookup("POSTS_CLIENT_ID"),
            email: lookup("POSTS_EMAIL"),
            name: lookup("POSTS_NAME"),
            pages,
            utc_offset_minutes,
            timeout,
        })
    }

    /// Command-line flags win over the environment.
    pub fn merge(mut self, args: &Cli) -> Self {
        if let Some(url) = &args.server {
            self.api_url = url.clone();
        }
        if let Some(client_id) = &args.client_id {
            self.client_id = Some(client_id.clone());
        }
        if let Some(email) = &args.email {
            self.email = Some(email.clone());
        }
        if let Some(name) = &args.name {
            self.name = Some(name.clone());
        }
        if let Some(pages) = args.pages {
            self.pages = pages;
        }
        if let Some(offset) = args.utc_offset {
            self.utc_offset_minutes = offset;
        }
        if let Some(secs) = args.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        self
    }

    pub fn credentials(&self) -> anyhow::Result<Credentials> {
        Ok(Credentials {
            client_id: self
                .client_id
                .clone()
                .context("POSTS_CLIENT_ID must be set")?,
            email: self.email.clone().context("POSTS_EMAIL must be set")?,
            name: self.name.clone().context("POSTS_NAME must be set")?,
        })
    }
}

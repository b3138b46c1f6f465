mod cli;
mod infrastructure;
mod output;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use posts_client::{PostsApi, PostsClientHttp, fetch_all_pages};
use posts_stats::{Aggregator, PostRecord};
use tracing::{error, info};

use crate::cli::Cli;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(args.log_json);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "run failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> anyhow::Result<()> {
    let config = AppConfig::from_env()?.merge(&args);
    let aggregator = Aggregator::from_utc_offset_minutes(config.utc_offset_minutes)?;

    // 1. Собираем посты: из файла или из API
    let records = match &args.input {
        Some(path) => load_records(path)?,
        None => fetch_records(&config).await?,
    };

    // 2. Считаем статистику
    let summary = aggregator
        .summarize_records(records)
        .context("failed to aggregate posts")?;

    // 3. Печатаем
    println!("{}", output::render(&summary, args.format, args.pretty)?);

    Ok(())
}

async fn fetch_records(config: &AppConfig) -> anyhow::Result<Vec<PostRecord>> {
    let credentials = config.credentials()?;
    let client = PostsClientHttp::connect_with_timeout(&config.api_url, config.timeout).await?;

    let token = client
        .register(&credentials)
        .await
        .context("registration failed")?;
    info!(pages = config.pages, api = %client.base_url(), "fetching posts");

    let records = fetch_all_pages(&client, &token, config.pages)
        .await
        .context("failed to fetch posts")?;
    Ok(records)
}

fn load_records(path: &Path) -> anyhow::Result<Vec<PostRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let records: Vec<PostRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of posts", path.display()))?;
    info!(posts = records.len(), path = %path.display(), "posts loaded from file");
    Ok(records)
}

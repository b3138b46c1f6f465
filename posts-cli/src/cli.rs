use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

/// Fetches posts from the posts API and prints monthly and weekly statistics.
#[derive(Parser, Debug)]
#[command(name = "posts-stats", version)]
pub struct Cli {
    /// Base URL of the posts API
    #[clap(short, long)]
    pub server: Option<String>,

    #[clap(long)]
    pub client_id: Option<String>,

    #[clap(long)]
    pub email: Option<String>,

    #[clap(long)]
    pub name: Option<String>,

    /// Number of pages to fetch, starting at page 1
    #[clap(long)]
    pub pages: Option<u32>,

    /// Offset from UTC, in minutes, used to assign posts to months and weeks
    #[clap(long, allow_negative_numbers = true)]
    pub utc_offset: Option<i32>,

    #[clap(long)]
    pub timeout_secs: Option<u64>,

    /// Summarize a JSON array of posts from this file instead of calling the API
    #[clap(long)]
    pub input: Option<PathBuf>,

    #[clap(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Indent JSON output
    #[clap(long)]
    pub pretty: bool,

    /// Emit logs as JSON lines
    #[clap(long)]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_json_output() {
        let args = Cli::parse_from(["posts-stats"]);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(!args.pretty);
        assert!(args.input.is_none());
    }

    #[test]
    fn parses_text_format_and_input() {
        let args = Cli::parse_from(["posts-stats", "--format", "text", "--input", "posts.json"]);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.input, Some(PathBuf::from("posts.json")));
    }
}

use std::fmt::Write;

use clap::ValueEnum;
use posts_stats::Summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

pub fn render(summary: &Summary, format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Json => Ok(serde_json::to_string(summary)?),
        OutputFormat::Text => Ok(render_text(summary)?),
    }
}

fn render_text(summary: &Summary) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Average message length per month")?;
    for avg in &summary.average_lengths {
        writeln!(out, "  {}  {:.2}", avg.month, avg.value)?;
    }

    writeln!(out, "Longest post per month")?;
    for longest in &summary.max_length_posts {
        writeln!(
            out,
            "  {}  {:>5}  {} by {}",
            longest.month, longest.length, longest.post.id, longest.post.from_name
        )?;
    }

    writeln!(out, "Posts per ISO week")?;
    for week in &summary.num_posts_per_week {
        writeln!(out, "  week {:>2}  {}", week.week, week.num_of_posts)?;
    }

    writeln!(out, "Posts per user per month")?;
    for month in &summary.user_counts_per_month {
        writeln!(out, "  {}", month.month)?;
        for user in &month.posts_per_user {
            writeln!(out, "    {}  {}", user.user, user.num_of_posts)?;
        }
    }

    Ok(out)
}

use chrono::{FixedOffset, Offset, Utc};
use tracing::{debug, instrument};

use crate::application::grouping::{group_by_month, group_by_week};
use crate::application::reports::{
    average_lengths, max_length_posts, posts_per_user_per_month, posts_per_week,
};
use crate::domain::error::StatsError;
use crate::domain::post::{Post, PostRecord};
use crate::domain::summary::Summary;

/// Computes the [`Summary`] of a post list.
///
/// Months and weeks are taken from `created_time` after converting it into
/// `offset`, so the result does not depend on the host's local time zone.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    offset: FixedOffset,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::utc()
    }
}

impl Aggregator {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    pub fn from_utc_offset_minutes(minutes: i32) -> Result<Self, StatsError> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
            .ok_or(StatsError::InvalidUtcOffset(minutes))
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    #[instrument(skip_all, fields(posts = posts.len()))]
    pub fn summarize(&self, posts: &[Post]) -> Summary {
        let months = group_by_month(posts, &self.offset);
        let weeks = group_by_week(posts, &self.offset);
        debug!(months = months.len(), weeks = weeks.len(), "posts grouped");

        Summary {
            average_lengths: average_lengths(&months),
            max_length_posts: max_length_posts(&months),
            num_posts_per_week: posts_per_week(&weeks),
            user_counts_per_month: posts_per_user_per_month(&months),
        }
    }

    /// Parses every record and summarizes them. A single malformed timestamp
    /// fails the whole run; nothing is aggregated from a partial list.
    pub fn summarize_records(&self, records: Vec<PostRecord>) -> Result<Summary, StatsError> {
        let posts = records
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.summarize(&posts))
    }
}

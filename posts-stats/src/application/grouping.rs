use std::collections::BTreeMap;

use chrono::{Datelike, FixedOffset};

use crate::domain::month::Month;
use crate::domain::post::Post;

/// Posts partitioned by calendar month. Only months that occur are present,
/// and every bucket keeps the input order of its posts.
pub type MonthBuckets<'a> = BTreeMap<Month, Vec<&'a Post>>;

/// Posts partitioned by ISO week number.
pub type WeekBuckets<'a> = BTreeMap<u32, Vec<&'a Post>>;

pub fn month_of(post: &Post, offset: &FixedOffset) -> Month {
    Month::of(&post.created_time.with_timezone(offset))
}

/// ISO 8601 week number (1..=53) of the post in the given offset.
pub fn week_of(post: &Post, offset: &FixedOffset) -> u32 {
    post.created_time.with_timezone(offset).iso_week().week()
}

pub fn group_by_month<'a>(posts: &'a [Post], offset: &FixedOffset) -> MonthBuckets<'a> {
    group_by(posts, |post| month_of(post, offset))
}

pub fn group_by_week<'a>(posts: &'a [Post], offset: &FixedOffset) -> WeekBuckets<'a> {
    group_by(posts, |post| week_of(post, offset))
}

fn group_by<'a, K, F>(posts: &'a [Post], key: F) -> BTreeMap<K, Vec<&'a Post>>
where
    K: Ord,
    F: Fn(&Post) -> K,
{
    let mut buckets: BTreeMap<K, Vec<&'a Post>> = BTreeMap::new();
    for post in posts {
        buckets.entry(key(post)).or_default().push(post);
    }
    buckets
}

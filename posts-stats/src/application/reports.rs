use std::collections::BTreeMap;

use crate::application::grouping::{MonthBuckets, WeekBuckets};
use crate::domain::post::Post;
use crate::domain::summary::{
    AverageLength, MaxLengthPost, MonthlyUserPostCounts, UserPostCount, WeeklyPostCount,
};

/// Mean message length for every month present in `buckets`.
pub fn average_lengths(buckets: &MonthBuckets<'_>) -> Vec<AverageLength> {
    buckets
        .iter()
        .map(|(&month, posts)| {
            // buckets are never empty, see group_by_month
            let total: usize = posts.iter().map(|post| post.message_length()).sum();
            AverageLength {
                month,
                value: total as f64 / posts.len() as f64,
            }
        })
        .collect()
}

/// Longest post of every month. On a tie the earliest post in input order wins.
pub fn max_length_posts(buckets: &MonthBuckets<'_>) -> Vec<MaxLengthPost> {
    buckets
        .iter()
        .filter_map(|(&month, posts)| {
            let longest = longest_post(posts)?;
            Some(MaxLengthPost {
                month,
                length: longest.message_length(),
                post: longest.clone(),
            })
        })
        .collect()
}

fn longest_post<'a>(posts: &[&'a Post]) -> Option<&'a Post> {
    let mut longest: Option<&'a Post> = None;
    for &post in posts {
        match longest {
            Some(current) if post.message_length() <= current.message_length() => {}
            _ => longest = Some(post),
        }
    }
    longest
}

pub fn posts_per_week(buckets: &WeekBuckets<'_>) -> Vec<WeeklyPostCount> {
    buckets
        .iter()
        .map(|(&week, posts)| WeeklyPostCount {
            week,
            num_of_posts: posts.len(),
        })
        .collect()
}

/// Post count of every author within each month, authors sorted by `from_id`.
pub fn posts_per_user_per_month(buckets: &MonthBuckets<'_>) -> Vec<MonthlyUserPostCounts> {
    buckets
        .iter()
        .map(|(&month, posts)| {
            let mut per_user: BTreeMap<&str, usize> = BTreeMap::new();
            for post in posts {
                *per_user.entry(post.from_id.as_str()).or_insert(0) += 1;
            }

            MonthlyUserPostCounts {
                month,
                posts_per_user: per_user
                    .into_iter()
                    .map(|(user, num_of_posts)| UserPostCount {
                        user: user.to_string(),
                        num_of_posts,
                    })
                    .collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::grouping::{group_by_month, group_by_week};
    use crate::domain::month::Month;
    use crate::testing::post;
    use chrono::FixedOffset;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn average_is_mean_of_lengths() {
        let posts = vec![
            post("p1", "u1", 3, "2024-05-01T10:00:00+00:00"),
            post("p2", "u1", 4, "2024-05-02T10:00:00+00:00"),
            post("p3", "u1", 4, "2024-05-03T10:00:00+00:00"),
            post("p4", "u1", 7, "2024-06-03T10:00:00+00:00"),
        ];
        let buckets = group_by_month(&posts, &utc());

        let averages = average_lengths(&buckets);
        assert_eq!(averages.len(), 2);
        assert_eq!(averages[0].month, Month::May);
        assert!((averages[0].value - 11.0 / 3.0).abs() < 1e-9);
        assert_eq!(averages[1].month, Month::Jun);
        assert!((averages[1].value - 7.0).abs() < 1e-9);
    }

    #[test]
    fn first_maximum_wins_on_tie() {
        let posts = vec![
            post("p1", "u1", 5, "2024-02-01T10:00:00+00:00"),
            post("p2", "u2", 9, "2024-02-02T10:00:00+00:00"),
            post("p3", "u3", 9, "2024-02-03T10:00:00+00:00"),
            post("p4", "u4", 2, "2024-02-04T10:00:00+00:00"),
        ];
        let buckets = group_by_month(&posts, &utc());

        let longest = max_length_posts(&buckets);
        assert_eq!(longest.len(), 1);
        assert_eq!(longest[0].month, Month::Feb);
        assert_eq!(longest[0].length, 9);
        assert_eq!(longest[0].post.id, "p2");
    }

    #[test]
    fn empty_message_can_still_be_the_longest() {
        let posts = vec![post("p1", "u1", 0, "2024-02-01T10:00:00+00:00")];
        let buckets = group_by_month(&posts, &utc());

        let longest = max_length_posts(&buckets);
        assert_eq!(longest[0].length, 0);
        assert_eq!(longest[0].post.id, "p1");
    }

    #[test]
    fn weekly_counts_sum_to_total_and_are_sorted() {
        let posts = vec![
            post("p1", "u1", 1, "2024-03-20T10:00:00+00:00"),
            post("p2", "u1", 1, "2024-01-02T10:00:00+00:00"),
            post("p3", "u1", 1, "2024-03-21T10:00:00+00:00"),
            post("p4", "u1", 1, "2024-02-14T10:00:00+00:00"),
        ];
        let buckets = group_by_week(&posts, &utc());

        let weekly = posts_per_week(&buckets);
        let weeks: Vec<u32> = weekly.iter().map(|w| w.week).collect();
        assert_eq!(weeks, vec![1, 7, 12]);
        assert_eq!(weekly[2].num_of_posts, 2);
        let total: usize = weekly.iter().map(|w| w.num_of_posts).sum();
        assert_eq!(total, posts.len());
    }

    #[test]
    fn user_counts_are_sorted_by_author_and_sum_to_month_total() {
        let posts = vec![
            post("p1", "user_9", 1, "2024-04-01T10:00:00+00:00"),
            post("p2", "user_10", 1, "2024-04-02T10:00:00+00:00"),
            post("p3", "user_9", 1, "2024-04-03T10:00:00+00:00"),
            post("p4", "user_1", 1, "2024-04-04T10:00:00+00:00"),
            post("p5", "user_1", 1, "2024-07-04T10:00:00+00:00"),
        ];
        let buckets = group_by_month(&posts, &utc());

        let counts = posts_per_user_per_month(&buckets);
        assert_eq!(counts.len(), 2);

        let april = &counts[0];
        assert_eq!(april.month, Month::Apr);
        let users: Vec<&str> = april.posts_per_user.iter().map(|u| u.user.as_str()).collect();
        // lexicographic, so user_10 sorts before user_9
        assert_eq!(users, vec!["user_1", "user_10", "user_9"]);
        let total: usize = april.posts_per_user.iter().map(|u| u.num_of_posts).sum();
        assert_eq!(total, 4);

        assert_eq!(counts[1].month, Month::Jul);
        assert_eq!(counts[1].posts_per_user.len(), 1);
    }
}

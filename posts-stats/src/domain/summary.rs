use serde::{Deserialize, Serialize};

use crate::domain::month::Month;
use crate::domain::post::Post;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageLength {
    pub month: Month,
    /// Mean message length of the month, in UTF-16 code units.
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxLengthPost {
    pub month: Month,
    pub length: usize,
    pub post: Post,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPostCount {
    pub week: u32,
    pub num_of_posts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPostCount {
    pub user: String,
    pub num_of_posts: usize,
}

/// Per-author post counts within one month.
///
/// Published as `averagePerUserPerMonth` in [`Summary`] even though the values
/// are raw counts, not averages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyUserPostCounts {
    pub month: Month,
    pub posts_per_user: Vec<UserPostCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub average_lengths: Vec<AverageLength>,
    pub max_length_posts: Vec<MaxLengthPost>,
    pub num_posts_per_week: Vec<WeeklyPostCount>,
    #[serde(rename = "averagePerUserPerMonth")]
    pub user_counts_per_month: Vec<MonthlyUserPostCounts>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.average_lengths.is_empty()
            && self.max_length_posts.is_empty()
            && self.num_posts_per_week.is_empty()
            && self.user_counts_per_month.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_serializes_with_published_field_names() {
        let summary = Summary {
            average_lengths: vec![AverageLength {
                month: Month::Jan,
                value: 20.0,
            }],
            max_length_posts: vec![],
            num_posts_per_week: vec![WeeklyPostCount {
                week: 2,
                num_of_posts: 3,
            }],
            user_counts_per_month: vec![MonthlyUserPostCounts {
                month: Month::Jan,
                posts_per_user: vec![UserPostCount {
                    user: "u1".into(),
                    num_of_posts: 3,
                }],
            }],
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            json!({
                "averageLengths": [{"month": "JAN", "value": 20.0}],
                "maxLengthPosts": [],
                "numPostsPerWeek": [{"week": 2, "numOfPosts": 3}],
                "averagePerUserPerMonth": [
                    {"month": "JAN", "postsPerUser": [{"user": "u1", "numOfPosts": 3}]}
                ]
            })
        );
    }
}

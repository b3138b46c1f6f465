use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::error::StatsError;

/// A post exactly as the API serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub from_name: String,
    pub from_id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub post_type: String,
    pub created_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub from_name: String,
    pub from_id: String,
    pub message: String,
    #[serde(rename = "type")]
    pub post_type: String,
    pub created_time: DateTime<FixedOffset>,
}

impl Post {
    /// Message length in UTF-16 code units.
    pub fn message_length(&self) -> usize {
        self.message.encode_utf16().count()
    }
}

impl TryFrom<PostRecord> for Post {
    type Error = StatsError;

    fn try_from(record: PostRecord) -> Result<Self, Self::Error> {
        let created_time = DateTime::parse_from_rfc3339(&record.created_time).map_err(|_| {
            StatsError::MalformedTimestamp {
                post_id: record.id.clone(),
                value: record.created_time.clone(),
            }
        })?;

        Ok(Self {
            id: record.id,
            from_name: record.from_name,
            from_id: record.from_id,
            message: record.message,
            post_type: record.post_type,
            created_time,
        })
    }
}

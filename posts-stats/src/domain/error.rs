use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("post {post_id} has malformed created_time: {value:?}")]
    MalformedTimestamp { post_id: String, value: String },
    #[error("invalid utc offset: {0} minutes")]
    InvalidUtcOffset(i32),
}

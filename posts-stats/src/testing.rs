use chrono::DateTime;

use crate::domain::post::Post;

pub(crate) fn post(id: &str, from_id: &str, message_len: usize, created_time: &str) -> Post {
    Post {
        id: id.to_string(),
        from_name: format!("name of {from_id}"),
        from_id: from_id.to_string(),
        message: "x".repeat(message_len),
        post_type: "status".to_string(),
        created_time: DateTime::parse_from_rfc3339(created_time).unwrap(),
    }
}

pub mod error;
pub mod month;
pub mod post;
pub mod summary;

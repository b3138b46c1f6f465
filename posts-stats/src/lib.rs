//! Descriptive statistics over a batch of fetched posts.
//!
//! Everything here is pure: the caller hands in posts that are already
//! fetched and gets back a [`Summary`] with four independent reports.

pub mod application;
pub mod domain;

#[cfg(test)]
mod testing;

pub use application::aggregator::Aggregator;
pub use domain::error::StatsError;
pub use domain::month::Month;
pub use domain::post::{Post, PostRecord};
pub use domain::summary::{
    AverageLength, MaxLengthPost, MonthlyUserPostCounts, Summary, UserPostCount, WeeklyPostCount,
};

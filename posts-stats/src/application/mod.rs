pub mod aggregator;
pub mod grouping;
pub mod reports;

pub mod ratings;
pub mod recap;

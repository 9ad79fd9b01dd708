pub mod rating;
pub mod recap;

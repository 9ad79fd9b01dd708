mod entry;
mod movie;
mod person;
mod rating;
mod snapshot;

pub use entry::Entry;
pub use movie::Movie;
pub use person::Person;
pub use rating::Rating;
pub use snapshot::FactSnapshot;

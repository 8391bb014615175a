//! sea-orm entities for the dictionary service.

pub mod users;
pub mod word_records;

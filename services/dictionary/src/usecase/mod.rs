pub mod lookup;
pub mod user;
pub mod word_record;

#[cfg(test)]
pub(crate) mod mock;

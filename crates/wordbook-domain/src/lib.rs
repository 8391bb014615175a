//! Domain types shared across Wordbook crates.
//!
//! This crate contains only pure types and functions with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod history;
pub mod id;
pub mod language;
pub mod prompt;

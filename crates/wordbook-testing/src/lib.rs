//! Test utilities for wordbook services.
//!
//! Import in `#[cfg(test)]` blocks and integration tests only.

pub mod session;

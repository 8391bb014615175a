//! Rules for the query-history view.

use serde::{Deserialize, Serialize};

/// Number of entries returned when the caller does not ask for a limit.
pub const DEFAULT_HISTORY_LIMIT: u64 = 20;

/// Upper bound accepted from clients.
pub const MAX_HISTORY_LIMIT: u64 = 100;

/// Definitions longer than this many characters are shortened in history entries.
pub const DEFINITION_PREVIEW_CHARS: usize = 200;

/// Appended to a shortened definition.
pub const ELLIPSIS: &str = "...";

/// Maximum number of history entries to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLimit(pub u64);

impl Default for HistoryLimit {
    fn default() -> Self {
        Self(DEFAULT_HISTORY_LIMIT)
    }
}

impl HistoryLimit {
    /// Clamp to `1..=MAX_HISTORY_LIMIT`. Call on values taken from query params.
    pub fn clamped(self) -> Self {
        Self(self.0.clamp(1, MAX_HISTORY_LIMIT))
    }
}

/// Shorten `definition` to [`DEFINITION_PREVIEW_CHARS`] characters plus [`ELLIPSIS`].
///
/// Counts Unicode scalar values, so CJK text is never split inside a character.
/// Definitions at or under the limit are returned unchanged.
pub fn preview_definition(definition: &str) -> String {
    match definition.char_indices().nth(DEFINITION_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &definition[..cut]),
        None => definition.to_owned(),
    }
}

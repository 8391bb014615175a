//! Plain-text rows for the admin commands.

use wordbook_core::serde::format_minute;
use wordbook_dictionary::domain::types::{HistoryEntry, User};

pub fn history_lines(entries: &[HistoryEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| {
            format!(
                "{:>5}  {:<8} {}  [{}]",
                e.query_times,
                e.language.as_str(),
                e.word,
                format_minute(&e.updated_at),
            )
        })
        .collect()
}

pub fn user_lines(users: &[User]) -> Vec<String> {
    users
        .iter()
        .map(|u| {
            let status = if u.is_active { "active" } else { "disabled" };
            let last_login = u
                .last_login
                .as_ref()
                .map(format_minute)
                .unwrap_or_else(|| "never".to_owned());
            format!(
                "{:>5}  {:<20} {:<30} {status:<8} last login {last_login}",
                u.id, u.username, u.email
            )
        })
        .collect()
}

// Module name shadows the `serde` crate; use `::serde` for the external crate.
use ::serde::Serializer;
use chrono::{DateTime, SecondsFormat, Utc};

/// `strftime` pattern for minute-precision timestamps shown to users.
pub const MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format `dt` as `YYYY-MM-DD HH:MM` (UTC).
pub fn format_minute(dt: &DateTime<Utc>) -> String {
    dt.format(MINUTE_FORMAT).to_string()
}

/// Serialize `DateTime<Utc>` with [`MINUTE_FORMAT`].
pub fn to_minute<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&format_minute(dt))
}

/// Serialize an optional `DateTime<Utc>` as RFC 3339 with millisecond precision, or `null`.
pub fn to_rfc3339_ms_opt<S>(dt: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => s.serialize_none(),
    }
}

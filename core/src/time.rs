//! Time related utils.

use crate::{Error, Result};
use chrono::SecondsFormat;
use chrono::Utc;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a datetime of the current time in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a datetime into an RFC 3339 timestamp with second precision:
/// "2011-01-01T07:20:04Z".
pub fn format_rfc3339(t: DateTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an RFC 3339 timestamp into a datetime.
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::unexpected(format!("parsing timestamp {s} failed")).with_source(e))
}

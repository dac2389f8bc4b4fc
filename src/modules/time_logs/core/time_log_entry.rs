// A recorded timestamp and its stored representation.
//
// Purpose
// - Convert between the zoned instant and the naive UTC text kept in the store.
//
// Responsibilities
// - Parse stored rows into entries, skipping rows that cannot be parsed.

use chrono::{DateTime, NaiveDateTime, SubsecRound, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

pub const STORED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepts optional fractional seconds, which are truncated.
const STORED_TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLogEntry {
    pub id: i64,
    pub timestamp: DateTime<Tz>,
}

/// A row as read from the store, before its timestamp is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRow {
    pub id: i64,
    pub timestamp: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimestampParseError {
    #[error("malformed stored timestamp '{0}'")]
    Malformed(String),
}

/// Stored values are UTC wall-clock time; the zone is only applied for display.
pub fn stored_utc(instant: &DateTime<Tz>) -> NaiveDateTime {
    instant.naive_utc().trunc_subsecs(0)
}

pub fn format_stored_timestamp(instant: &DateTime<Tz>) -> String {
    stored_utc(instant)
        .format(STORED_TIMESTAMP_FORMAT)
        .to_string()
}

pub fn parse_stored_timestamp(raw: &str, zone: Tz) -> Result<DateTime<Tz>, TimestampParseError> {
    let naive = NaiveDateTime::parse_from_str(raw.trim(), STORED_TIMESTAMP_PARSE_FORMAT)
        .map_err(|_| TimestampParseError::Malformed(raw.to_string()))?;

    Ok(Utc
        .from_utc_datetime(&naive.trunc_subsecs(0))
        .with_timezone(&zone))
}

/// Rows that fail to parse are logged and dropped; the rest keep their order.
pub fn entries_from_rows(rows: Vec<StoredRow>, zone: Tz) -> Vec<TimeLogEntry> {
    rows.into_iter()
        .filter_map(|row| match parse_stored_timestamp(&row.timestamp, zone) {
            Ok(timestamp) => Some(TimeLogEntry {
                id: row.id,
                timestamp,
            }),
            Err(error) => {
                tracing::warn!(id = row.id, %error, "skipping time log row");
                None
            }
        })
        .collect()
}

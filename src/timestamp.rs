//! Timestamp conversions for UserAssist counters.
//!
//! The extended layout stores its two times with different encodings:
//! last execution is a Windows FILETIME (100ns ticks since 1601-01-01),
//! focus time is a millisecond count since 1970-01-01. The two conversions
//! are kept separate and must not be swapped.
//!
//! A raw value of zero means "never recorded" and converts to `None`.

use crate::error::{DecodeError, Result, TimestampField};
use chrono::{DateTime, Utc};

/// A UTC calendar timestamp, truncated to whole seconds.
pub type CalendarTimestamp = DateTime<Utc>;

/// Output format for timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Seconds between 1601-01-01 and 1970-01-01.
const FILETIME_UNIX_DIFF: i64 = 11_644_473_600;

/// FILETIME ticks per second.
const FILETIME_TICKS_PER_SECOND: u64 = 10_000_000;

/// Milliseconds per second.
const MILLIS_PER_SECOND: u64 = 1_000;

/// Converts a FILETIME last-execution counter to a calendar timestamp.
///
/// # Errors
///
/// Returns [`DecodeError::TimestampOutOfRange`] if the date cannot be
/// represented.
///
/// # Examples
///
/// ```rust
/// use userassist_decoder::timestamp::{format_timestamp, last_execution_time};
///
/// let ts = last_execution_time(116444736000000000).unwrap().unwrap();
/// assert_eq!(format_timestamp(&ts), "1970-01-01 00:00:00 UTC");
/// assert!(last_execution_time(0).unwrap().is_none());
/// ```
pub fn last_execution_time(raw: u64) -> Result<Option<CalendarTimestamp>> {
    if raw == 0 {
        return Ok(None);
    }

    let seconds = i64::try_from(raw / FILETIME_TICKS_PER_SECOND)
        .ok()
        .and_then(|s| s.checked_sub(FILETIME_UNIX_DIFF));

    seconds
        .and_then(|s| DateTime::from_timestamp(s, 0))
        .map(Some)
        .ok_or_else(|| DecodeError::timestamp_out_of_range(TimestampField::LastExecution, raw))
}

/// Converts a focus-time counter (milliseconds since 1970) to a calendar
/// timestamp.
///
/// # Errors
///
/// Returns [`DecodeError::TimestampOutOfRange`] if the date cannot be
/// represented.
pub fn focus_time(raw: u64) -> Result<Option<CalendarTimestamp>> {
    if raw == 0 {
        return Ok(None);
    }

    i64::try_from(raw / MILLIS_PER_SECOND)
        .ok()
        .and_then(|s| DateTime::from_timestamp(s, 0))
        .map(Some)
        .ok_or_else(|| DecodeError::timestamp_out_of_range(TimestampField::FocusTime, raw))
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn format_timestamp(ts: &CalendarTimestamp) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Serde helpers for optional timestamps.
#[cfg(feature = "serde")]
pub(crate) mod serde_opt {
    use super::{format_timestamp, CalendarTimestamp};
    use serde::Serializer;

    pub fn serialize<S>(value: &Option<CalendarTimestamp>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_some(&format_timestamp(ts)),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(ts: Option<CalendarTimestamp>) -> String {
        format_timestamp(&ts.unwrap())
    }

    #[test]
    fn test_last_execution_zero_is_absent() {
        assert_eq!(last_execution_time(0).unwrap(), None);
    }

    #[test]
    fn test_last_execution_unix_epoch() {
        let ts = last_execution_time(116_444_736_000_000_000).unwrap();
        assert_eq!(fmt(ts), "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_last_execution_truncates_subseconds() {
        let ts = last_execution_time(132_543_270_229_999_999).unwrap();
        assert_eq!(fmt(ts), "2021-01-05 13:30:22 UTC");
    }

    #[test]
    fn test_last_execution_before_unix_epoch() {
        // One tick after the FILETIME epoch
        let ts = last_execution_time(1).unwrap();
        assert_eq!(fmt(ts), "1601-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_last_execution_max() {
        // u64::MAX ticks is still within chrono's range (year 60056)
        let ts = last_execution_time(u64::MAX).unwrap().unwrap();
        assert_eq!(chrono::Datelike::year(&ts), 60056);
    }

    #[test]
    fn test_focus_time_zero_is_absent() {
        assert_eq!(focus_time(0).unwrap(), None);
    }

    #[test]
    fn test_focus_time_one_day() {
        let ts = focus_time(86_400_000).unwrap();
        assert_eq!(fmt(ts), "1970-01-02 00:00:00 UTC");
    }

    #[test]
    fn test_focus_time_sub_second() {
        let ts = focus_time(1_000).unwrap();
        assert_eq!(fmt(ts), "1970-01-01 00:00:01 UTC");
        let ts = focus_time(999).unwrap();
        assert_eq!(fmt(ts), "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_focus_time_out_of_range() {
        assert_eq!(
            focus_time(u64::MAX),
            Err(DecodeError::TimestampOutOfRange {
                field: TimestampField::FocusTime,
                raw: u64::MAX
            })
        );
    }

    #[test]
    fn test_encodings_differ() {
        // Same raw value, different epochs and granularity
        let raw = 86_400_000;
        assert_ne!(last_execution_time(raw).unwrap(), focus_time(raw).unwrap());
    }
}

//! Output records.

use crate::counters::DecodedCounters;
use crate::error::{DecodeError, Result};
use crate::format::FormatVersion;
use crate::keyname::KeyName;
use crate::timestamp::{focus_time, format_timestamp, last_execution_time, CalendarTimestamp};
use std::fmt;

/// One decoded UserAssist entry.
///
/// Field order follows the usual output columns: username, name, last
/// execution, GUID, count, focus time, source file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UsageRecord {
    /// Profile owning the hive.
    pub username: String,

    /// Decoded name with the GUID token removed.
    pub name: String,

    /// Last execution time, absent if never recorded or unconvertible.
    #[cfg_attr(
        feature = "serde",
        serde(serialize_with = "crate::timestamp::serde_opt::serialize")
    )]
    pub last_execution: Option<CalendarTimestamp>,

    /// Leading `{...}` token of the decoded name, or empty.
    pub guid: String,

    /// Run count.
    pub count: u32,

    /// Focus time, absent for the legacy layout or when not recorded.
    #[cfg_attr(
        feature = "serde",
        serde(serialize_with = "crate::timestamp::serde_opt::serialize")
    )]
    pub focus_time: Option<CalendarTimestamp>,

    /// Hive the entry came from.
    pub source_file: String,

    /// Layout the value was decoded with.
    pub version: FormatVersion,

    /// Name with the GUID replaced by its known-folder name, when resolved.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub folder_path: Option<String>,

    /// UserAssist container key the value was read from.
    pub container_guid: Option<String>,

    /// What the container tracks, when it is a well-known one.
    pub container: Option<&'static str>,
}

/// A record plus any fields that had to be dropped while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
    /// The assembled record.
    pub record: UsageRecord,

    /// Field-scoped errors (timestamps that could not be converted).
    pub field_errors: Vec<DecodeError>,
}

/// Builds a record from decoded parts.
///
/// Never fails: a timestamp that cannot be converted is left absent and
/// reported in [`Assembled::field_errors`].
pub fn assemble(
    key: &KeyName,
    counters: &DecodedCounters,
    version: FormatVersion,
    profile_name: &str,
    source_hive_path: &str,
) -> Assembled {
    let mut field_errors = Vec::new();

    let mut convert = |raw: Option<u64>, f: fn(u64) -> Result<Option<CalendarTimestamp>>| {
        match raw.map(f).transpose() {
            Ok(ts) => ts.flatten(),
            Err(err) => {
                field_errors.push(err);
                None
            }
        }
    };

    let last_execution = convert(counters.last_execution_raw, last_execution_time);
    let focus_time = convert(counters.focus_time_raw, focus_time);

    Assembled {
        record: UsageRecord {
            username: profile_name.to_string(),
            name: key.name.clone(),
            last_execution,
            guid: key.guid.clone(),
            count: counters.run_count,
            focus_time,
            source_file: source_hive_path.to_string(),
            version,
            folder_path: None,
            container_guid: None,
            container: None,
        },
        field_errors,
    }
}

impl UsageRecord {
    /// Returns the last execution time formatted for output.
    pub fn last_execution_display(&self) -> Option<String> {
        self.last_execution.as_ref().map(format_timestamp)
    }

    /// Returns the focus time formatted for output.
    pub fn focus_time_display(&self) -> Option<String> {
        self.focus_time.as_ref().map(format_timestamp)
    }

    /// Returns the GUID token and name rejoined.
    pub fn full_name(&self) -> String {
        format!("{}{}", self.guid, self.name)
    }
}

impl fmt::Display for UsageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (count: {}, last execution: {}, focus time: {})",
            self.username,
            self.full_name(),
            self.count,
            self.last_execution_display().as_deref().unwrap_or("Never"),
            self.focus_time_display().as_deref().unwrap_or("Never"),
        )
    }
}

//! Per-entry decoding and batch collection.
//!
//! [`decode_entry`] runs one [`RawEntry`] through name decoding,
//! classification, field extraction and record assembly. It holds no
//! state, so entries can be decoded in any order or in parallel. Errors
//! come back as [`Diagnostic`] values and never stop a batch.

use crate::counters::extract;
use crate::error::DecodeError;
use crate::format::{classify, FormatVersion};
use crate::keyname::KeyName;
use crate::known_folders::{container_description, resolve_path};
use crate::record::{assemble, UsageRecord};
use crate::source::RawEntry;
use crate::utils::hex_preview;
use std::fmt;
use tracing::{debug, instrument, warn};

/// Run-time decoding options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Fill [`UsageRecord::folder_path`] by replacing known-folder GUIDs
    /// with folder names.
    pub resolve_known_folders: bool,
}

/// A problem found while decoding one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    /// Hive the entry came from.
    pub source_hive_path: String,

    /// Profile owning the hive.
    pub profile_name: String,

    /// Value name as stored (still encoded).
    pub encoded_name: String,

    /// Length of the value data.
    pub data_len: usize,

    /// Hex of the leading bytes of the value.
    pub data_preview: String,

    /// What went wrong.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_error"))]
    pub error: DecodeError,
}

#[cfg(feature = "serde")]
fn serialize_error<S>(error: &DecodeError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(error)
}

impl Diagnostic {
    fn new(entry: &RawEntry, error: DecodeError) -> Self {
        Diagnostic {
            source_hive_path: entry.source_hive_path.clone(),
            profile_name: entry.profile_name.clone(),
            encoded_name: entry.encoded_name.clone(),
            data_len: entry.data.len(),
            data_preview: hex_preview(&entry.data),
            error,
        }
    }

    /// Returns true if the entry produced no record.
    pub fn skipped_entry(&self) -> bool {
        self.error.is_entry_fatal()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.source_hive_path, self.profile_name, self.encoded_name, self.error
        )
    }
}

/// Result of decoding one entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodeOutcome {
    /// The record, unless the entry was skipped.
    pub record: Option<UsageRecord>,

    /// Problems found along the way.
    pub diagnostics: Vec<Diagnostic>,
}

/// Decodes a single entry.
#[instrument(
    level = "debug",
    skip(entry, options),
    fields(name = %entry.encoded_name, len = entry.data.len())
)]
pub fn decode_entry(entry: &RawEntry, options: &DecodeOptions) -> DecodeOutcome {
    let key = KeyName::from_encoded(&entry.encoded_name);

    let version = classify(&entry.data);
    if version == FormatVersion::Unrecognized {
        let error = DecodeError::UnrecognizedFormat {
            length: entry.data.len(),
        };
        warn!(hive = %entry.source_hive_path, %error, "Skipping UserAssist entry");
        return DecodeOutcome {
            record: None,
            diagnostics: vec![Diagnostic::new(entry, error)],
        };
    }

    let counters = match extract(&entry.data, version) {
        Ok(counters) => counters,
        Err(error) => {
            warn!(hive = %entry.source_hive_path, %error, "Skipping UserAssist entry");
            return DecodeOutcome {
                record: None,
                diagnostics: vec![Diagnostic::new(entry, error)],
            };
        }
    };
    debug!(%version, count = counters.run_count, "Decoded counters");

    let assembled = assemble(
        &key,
        &counters,
        version,
        &entry.profile_name,
        &entry.source_hive_path,
    );

    let diagnostics = assembled
        .field_errors
        .into_iter()
        .map(|error| {
            warn!(hive = %entry.source_hive_path, %error, "Dropping UserAssist field");
            Diagnostic::new(entry, error)
        })
        .collect();

    let mut record = assembled.record;
    if let Some(container_guid) = &entry.container_guid {
        record.container = container_description(container_guid);
        record.container_guid = Some(container_guid.clone());
    }
    if options.resolve_known_folders {
        record.folder_path = resolve_path(&record.guid, &record.name);
    }

    DecodeOutcome {
        record: Some(record),
        diagnostics,
    }
}

/// Counts summarizing a [`DecodeReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Records emitted.
    pub records: usize,

    /// Entries that produced no record.
    pub skipped_entries: usize,

    /// Timestamp fields dropped from emitted records.
    pub dropped_fields: usize,
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, {} skipped entries, {} dropped fields",
            self.records, self.skipped_entries, self.dropped_fields
        )
    }
}

/// Records and diagnostics collected across a run.
///
/// Owned by the caller; the engine only appends to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// Decoded records, in input order.
    pub records: Vec<UsageRecord>,

    /// Diagnostics, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

impl DecodeReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the outcome of one entry.
    pub fn push(&mut self, outcome: DecodeOutcome) {
        self.records.extend(outcome.record);
        self.diagnostics.extend(outcome.diagnostics);
    }

    /// Appends everything from another report, e.g. one built by a
    /// different worker.
    pub fn merge(&mut self, other: DecodeReport) {
        self.records.extend(other.records);
        self.diagnostics.extend(other.diagnostics);
    }

    /// Returns counts of records, skipped entries and dropped fields.
    pub fn summary(&self) -> ReportSummary {
        let skipped_entries = self.diagnostics.iter().filter(|d| d.skipped_entry()).count();
        ReportSummary {
            records: self.records.len(),
            skipped_entries,
            dropped_fields: self.diagnostics.len() - skipped_entries,
        }
    }
}

/// Decodes every entry into `report`.
///
/// Entry-scoped errors are recorded and decoding continues with the next
/// entry.
pub fn decode_batch<'a, I>(entries: I, options: &DecodeOptions, report: &mut DecodeReport)
where
    I: IntoIterator<Item = &'a RawEntry>,
{
    for entry in entries {
        report.push(decode_entry(entry, options));
    }
    debug!(summary = %report.summary(), "Batch decoded");
}

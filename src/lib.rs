//! # Windows UserAssist Decoder
//!
//! Decodes the per-application usage counters Explorer keeps under
//! `Software\Microsoft\Windows\CurrentVersion\Explorer\UserAssist` in each
//! user's NTUSER.DAT hive.
//!
//! ## Features
//!
//! - **Name decoding**: ROT13 value names back to `{GUID}\path` form
//! - **Both layouts**: 16-byte legacy and 72-byte extended values
//! - **Correct times**: FILETIME last execution and millisecond focus time,
//!   never mixed up, with "never recorded" kept distinct from real dates
//! - **Non-fatal errors**: malformed entries become diagnostics, the rest of
//!   the batch still decodes
//!
//! ## Architecture
//!
//! The engine takes one `(encoded name, value bytes)` pair at a time. Reading
//! the hive itself is left to the caller.
//!
//! 1. **Key name** ([`keyname`]): ROT13 decode and GUID split
//! 2. **Format** ([`format`]): layout chosen by value length
//! 3. **Counters** ([`counters`]): fixed-offset little-endian reads
//! 4. **Timestamps** ([`timestamp`]): FILETIME and Unix-millisecond conversion
//! 5. **Record** ([`record`]): one [`UsageRecord`] per entry
//!
//! ## Binary Layout
//!
//! ```text
//! Legacy (16 bytes)            Extended (72 bytes)
//!   0x04  u32 run count          0x04  u32 run count
//!   0x08  u64 last execution     0x0C  u64 focus time (ms since 1970)
//!                                0x3C  u64 last execution (FILETIME)
//! ```
//!
//! ## Examples
//!
//! ### Decoding a batch
//!
//! ```rust
//! use userassist_decoder::{decode_batch, DecodeOptions, DecodeReport, RawEntry};
//!
//! let mut data = vec![0u8; 72];
//! data[4..8].copy_from_slice(&5u32.to_le_bytes());
//! data[60..68].copy_from_slice(&132543270220000000u64.to_le_bytes());
//!
//! let entries = vec![
//!     RawEntry::from_hive_path(
//!         "{1NP14R77-02R7-4R5Q-O744-2RO1NR5198O7}\\pzq.rkr",
//!         data,
//!         r"C:\Users\alice\NTUSER.DAT",
//!     ),
//!     RawEntry::from_hive_path("UEME_CTLSESSION", vec![0u8; 50], r"C:\Users\alice\NTUSER.DAT"),
//! ];
//!
//! let mut report = DecodeReport::new();
//! decode_batch(&entries, &DecodeOptions::default(), &mut report);
//!
//! assert_eq!(report.records.len(), 1);
//! assert_eq!(report.records[0].name, "\\cmd.exe");
//! assert_eq!(report.records[0].count, 5);
//! assert_eq!(report.diagnostics.len(), 1);
//! ```
//!
//! ### Decoding a single value
//!
//! ```rust
//! use userassist_decoder::{classify, extract, keyname, FormatVersion};
//!
//! let mut data = [0u8; 16];
//! data[4..8].copy_from_slice(&3u32.to_le_bytes());
//!
//! assert_eq!(keyname::decode("pzq.rkr"), "cmd.exe");
//! assert_eq!(classify(&data), FormatVersion::Legacy);
//! assert_eq!(extract(&data, FormatVersion::Legacy).unwrap().run_count, 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod counters;
pub mod engine;
pub mod error;
pub mod format;
pub mod keyname;
pub mod known_folders;
pub mod record;
pub mod source;
pub mod timestamp;
pub mod utils;

// Python bindings (only compiled when python feature is enabled)
#[cfg(feature = "python")]
pub mod python;

// Re-export main types for convenience
pub use counters::{extract, DecodedCounters};
pub use engine::{
    decode_batch, decode_entry, DecodeOptions, DecodeOutcome, DecodeReport, Diagnostic,
    ReportSummary,
};
pub use error::{DecodeError, Result, TimestampField};
pub use format::{classify, FieldOffsets, FormatVersion};
pub use keyname::KeyName;
pub use record::{assemble, Assembled, UsageRecord};
pub use source::{profile_name_from_hive_path, RawEntry, USERASSIST_KEY_PATH};
pub use timestamp::{focus_time, format_timestamp, last_execution_time, CalendarTimestamp};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

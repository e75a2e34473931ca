//! Error types for UserAssist decoding operations.
//!
//! Every error in this crate is scoped to a single registry value. None of
//! them abort a batch: the engine turns them into diagnostics and moves on
//! to the next entry.

use std::fmt;
use thiserror::Error;

/// Result type alias for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Timestamp fields carried by a UserAssist value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimestampField {
    /// Last execution time (FILETIME ticks since 1601).
    LastExecution,

    /// Focus time (milliseconds since 1970).
    FocusTime,
}

impl TimestampField {
    /// Returns the output column name for this field.
    pub fn name(&self) -> &'static str {
        match self {
            TimestampField::LastExecution => "last_execution",
            TimestampField::FocusTime => "focus_time",
        }
    }
}

impl fmt::Display for TimestampField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while decoding a UserAssist value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Value length matches neither the legacy nor the extended layout.
    #[error("Unrecognized format: value is {length} bytes (expected 16 or 72)")]
    UnrecognizedFormat {
        /// Length of the rejected value.
        length: usize,
    },

    /// A fixed-offset read would run past the end of the value.
    #[error("Truncated value at offset {offset:#x}: expected {expected} bytes, got {actual} bytes")]
    TruncatedValue {
        /// Offset of the field being read.
        offset: usize,
        /// Width of the field.
        expected: usize,
        /// Bytes actually available from `offset`.
        actual: usize,
    },

    /// A raw timestamp does not map to a representable calendar date.
    #[error("Timestamp out of range: {field} raw value {raw}")]
    TimestampOutOfRange {
        /// Which timestamp failed to convert.
        field: TimestampField,
        /// The raw counter as stored in the value.
        raw: u64,
    },
}

impl DecodeError {
    /// Creates a truncated value error for a read of `expected` bytes at
    /// `offset` from a buffer of `len` bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use userassist_decoder::error::DecodeError;
    /// let err = DecodeError::truncated(60, 8, 64);
    /// assert_eq!(err, DecodeError::TruncatedValue { offset: 60, expected: 8, actual: 4 });
    /// ```
    pub fn truncated(offset: usize, expected: usize, len: usize) -> Self {
        Self::TruncatedValue {
            offset,
            expected,
            actual: len.saturating_sub(offset),
        }
    }

    /// Creates an out-of-range error for a timestamp field.
    pub fn timestamp_out_of_range(field: TimestampField, raw: u64) -> Self {
        Self::TimestampOutOfRange { field, raw }
    }

    /// Returns true if this error drops the whole entry.
    ///
    /// Timestamp errors only drop the affected field; the rest of the
    /// record is still emitted.
    pub fn is_entry_fatal(&self) -> bool {
        !matches!(self, DecodeError::TimestampOutOfRange { .. })
    }

    /// Short machine-readable kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::UnrecognizedFormat { .. } => "unrecognized_format",
            DecodeError::TruncatedValue { .. } => "truncated_value",
            DecodeError::TimestampOutOfRange { .. } => "timestamp_out_of_range",
        }
    }
}

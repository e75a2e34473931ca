//! Field extraction from classified UserAssist values.

use crate::error::{DecodeError, Result};
use crate::format::FormatVersion;
use crate::utils::{read_u32_le, read_u64_le};

/// Raw counters read from a UserAssist value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodedCounters {
    /// Number of times the item was run.
    pub run_count: u32,

    /// Focus time accumulator in milliseconds (extended layout only).
    pub focus_time_raw: Option<u64>,

    /// Last execution time as FILETIME ticks.
    pub last_execution_raw: Option<u64>,
}

/// Reads the counters of `data` using the layout for `version`.
///
/// # Errors
///
/// Returns [`DecodeError::UnrecognizedFormat`] for
/// [`FormatVersion::Unrecognized`] and [`DecodeError::TruncatedValue`] if a
/// field lies past the end of `data`.
pub fn extract(data: &[u8], version: FormatVersion) -> Result<DecodedCounters> {
    let offsets = version
        .offsets()
        .ok_or(DecodeError::UnrecognizedFormat { length: data.len() })?;

    let run_count = read_u32_le(data, offsets.run_count)?;
    let focus_time_raw = offsets
        .focus_time
        .map(|offset| read_u64_le(data, offset))
        .transpose()?;
    let last_execution_raw = Some(read_u64_le(data, offsets.last_execution)?);

    Ok(DecodedCounters {
        run_count,
        focus_time_raw,
        last_execution_raw,
    })
}

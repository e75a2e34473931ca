//! UserAssist value layouts and version classification.
//!
//! Two layouts exist in the wild and they are told apart by length alone:
//!
//! ```text
//! Legacy (16 bytes, Windows XP era)
//!   0x00  u32  session id
//!   0x04  u32  run count
//!   0x08  u64  last execution (FILETIME)
//!
//! Extended (72 bytes, Windows 7 and later)
//!   0x00  u32  session id
//!   0x04  u32  run count
//!   0x08  u32  focus count
//!   0x0C  u64  focus time (milliseconds)
//!   0x14  ...  usage ratios
//!   0x3C  u64  last execution (FILETIME)
//!   0x44  u32  unknown
//! ```

use std::fmt;

/// Size of a legacy UserAssist value in bytes.
pub const LEGACY_SIZE: usize = 16;

/// Size of an extended UserAssist value in bytes.
pub const EXTENDED_SIZE: usize = 72;

/// On-disk encoding version of a UserAssist value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FormatVersion {
    /// 16-byte layout: run count and one timestamp.
    Legacy,

    /// 72-byte layout: run count, focus time and last execution.
    Extended,

    /// Any other length.
    Unrecognized,
}

/// Byte offsets of the fields within one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOffsets {
    /// Offset of the u32 run count.
    pub run_count: usize,

    /// Offset of the u64 focus time accumulator, if the layout has one.
    pub focus_time: Option<usize>,

    /// Offset of the u64 last execution FILETIME.
    pub last_execution: usize,
}

const LEGACY_OFFSETS: FieldOffsets = FieldOffsets {
    run_count: 0x04,
    focus_time: None,
    last_execution: 0x08,
};

const EXTENDED_OFFSETS: FieldOffsets = FieldOffsets {
    run_count: 0x04,
    focus_time: Some(0x0C),
    last_execution: 0x3C,
};

impl FormatVersion {
    /// Classifies a value by its length.
    pub fn from_len(len: usize) -> Self {
        match len {
            LEGACY_SIZE => FormatVersion::Legacy,
            EXTENDED_SIZE => FormatVersion::Extended,
            _ => FormatVersion::Unrecognized,
        }
    }

    /// Returns the field offsets for this layout, or `None` for
    /// [`FormatVersion::Unrecognized`].
    pub fn offsets(&self) -> Option<&'static FieldOffsets> {
        match self {
            FormatVersion::Legacy => Some(&LEGACY_OFFSETS),
            FormatVersion::Extended => Some(&EXTENDED_OFFSETS),
            FormatVersion::Unrecognized => None,
        }
    }

    /// Returns the expected value size, or `None` for
    /// [`FormatVersion::Unrecognized`].
    pub fn size(&self) -> Option<usize> {
        match self {
            FormatVersion::Legacy => Some(LEGACY_SIZE),
            FormatVersion::Extended => Some(EXTENDED_SIZE),
            FormatVersion::Unrecognized => None,
        }
    }

    /// Returns a human-readable name for this version.
    pub fn name(&self) -> &'static str {
        match self {
            FormatVersion::Legacy => "legacy",
            FormatVersion::Extended => "extended",
            FormatVersion::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies raw value data. Only the length is consulted.
///
/// # Examples
///
/// ```rust
/// use userassist_decoder::format::{classify, FormatVersion};
///
/// assert_eq!(classify(&[0u8; 16]), FormatVersion::Legacy);
/// assert_eq!(classify(&[0u8; 72]), FormatVersion::Extended);
/// assert_eq!(classify(&[0u8; 50]), FormatVersion::Unrecognized);
/// ```
pub fn classify(data: &[u8]) -> FormatVersion {
    FormatVersion::from_len(data.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_lengths() {
        assert_eq!(classify(&[0u8; 16]), FormatVersion::Legacy);
        assert_eq!(classify(&[0xFFu8; 72]), FormatVersion::Extended);
    }

    #[test]
    fn test_classify_other_lengths() {
        for len in [0usize, 1, 15, 17, 68, 71, 73, 1000, 1612] {
            assert_eq!(
                FormatVersion::from_len(len),
                FormatVersion::Unrecognized,
                "length {}",
                len
            );
        }
    }

    #[test]
    fn test_offsets_fit_layout() {
        for version in [FormatVersion::Legacy, FormatVersion::Extended] {
            let offsets = version.offsets().unwrap();
            let size = version.size().unwrap();
            assert!(offsets.run_count + 4 <= size);
            assert!(offsets.last_execution + 8 <= size);
            if let Some(focus) = offsets.focus_time {
                assert!(focus + 8 <= size);
            }
        }
    }

    #[test]
    fn test_unrecognized_has_no_layout() {
        assert!(FormatVersion::Unrecognized.offsets().is_none());
        assert!(FormatVersion::Unrecognized.size().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(FormatVersion::Extended.to_string(), "extended");
    }
}

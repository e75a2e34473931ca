//! Utility functions for fixed-offset binary reads.

use crate::error::{DecodeError, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// Number of leading bytes shown in a diagnostic preview.
pub const PREVIEW_LEN: usize = 16;

/// Returns the `width`-byte window at `offset`, or a truncation error.
fn window(data: &[u8], offset: usize, width: usize) -> Result<&[u8]> {
    offset
        .checked_add(width)
        .filter(|&end| end <= data.len())
        .map(|end| &data[offset..end])
        .ok_or_else(|| DecodeError::truncated(offset, width, data.len()))
}

/// Reads a u32 from a byte slice at the given offset.
pub fn read_u32_le(data: &[u8], offset: usize) -> Result<u32> {
    let mut cursor = Cursor::new(window(data, offset, 4)?);
    cursor
        .read_u32::<LittleEndian>()
        .map_err(|_| DecodeError::truncated(offset, 4, data.len()))
}

/// Reads a u64 from a byte slice at the given offset.
pub fn read_u64_le(data: &[u8], offset: usize) -> Result<u64> {
    let mut cursor = Cursor::new(window(data, offset, 8)?);
    cursor
        .read_u64::<LittleEndian>()
        .map_err(|_| DecodeError::truncated(offset, 8, data.len()))
}

/// Hex-encodes the first [`PREVIEW_LEN`] bytes of a value.
///
/// Longer values get a trailing `..` so a truncated preview is never
/// mistaken for the whole value.
pub fn hex_preview(data: &[u8]) -> String {
    if data.len() <= PREVIEW_LEN {
        hex::encode(data)
    } else {
        format!("{}..", hex::encode(&data[..PREVIEW_LEN]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u32_le() {
        let data = [0x01, 0x02, 0x03, 0x04];
        assert_eq!(read_u32_le(&data, 0).unwrap(), 0x04030201);
    }

    #[test]
    fn test_read_u64_le() {
        let data = [0xAA, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80];
        assert_eq!(read_u64_le(&data, 1).unwrap(), 0x8000_0000_0000_0001);
    }

    #[test]
    fn test_read_past_end() {
        let data = [0u8; 10];
        assert_eq!(
            read_u64_le(&data, 4),
            Err(DecodeError::TruncatedValue {
                offset: 4,
                expected: 8,
                actual: 6
            })
        );
        assert!(read_u32_le(&data, 7).is_err());
        assert!(read_u32_le(&data, 6).is_ok());
    }

    #[test]
    fn test_offset_overflow() {
        let data = [0u8; 4];
        assert!(read_u32_le(&data, usize::MAX).is_err());
        assert!(read_u64_le(&data, usize::MAX - 3).is_err());
    }

    #[test]
    fn test_hex_preview() {
        assert_eq!(hex_preview(&[]), "");
        assert_eq!(hex_preview(&[0x00, 0xff]), "00ff");

        let long = [0x11u8; 20];
        assert_eq!(hex_preview(&long), format!("{}..", "11".repeat(16)));
    }
}

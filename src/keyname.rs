//! UserAssist value name decoding.
//!
//! Explorer stores each tracked item under a value whose name is ROT13
//! encoded. Decoding recovers a path such as
//! `{1AC14E77-02E7-4E5D-B744-2EB1AE5198B7}\cmd.exe`, where the leading
//! brace-delimited token is a known-folder GUID.

/// Rotates a single ASCII letter 13 places within its own case.
#[inline]
fn rot13(c: char) -> char {
    match c {
        'a'..='m' | 'A'..='M' => ((c as u8) + 13) as char,
        'n'..='z' | 'N'..='Z' => ((c as u8) - 13) as char,
        _ => c,
    }
}

/// Decodes a ROT13-encoded value name.
///
/// ASCII letters are rotated 13 places within their case; everything else
/// (digits, braces, backslashes, non-ASCII) passes through. The transform
/// is its own inverse.
///
/// # Examples
///
/// ```rust
/// use userassist_decoder::keyname::decode;
///
/// assert_eq!(decode("pzq.rkr"), "cmd.exe");
/// assert_eq!(decode(&decode("Rust")), "Rust");
/// ```
pub fn decode(encoded: &str) -> String {
    encoded.chars().map(rot13).collect()
}

/// A decoded value name split into its GUID token and the remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyName {
    /// Full decoded name.
    pub decoded: String,

    /// Leading `{...}` token including braces, or empty if there is none.
    pub guid: String,

    /// Everything after the GUID token, including a leading separator.
    pub name: String,
}

impl KeyName {
    /// Decodes `encoded` and splits off its leading GUID token.
    pub fn from_encoded(encoded: &str) -> Self {
        Self::split(decode(encoded))
    }

    /// Splits an already decoded name.
    ///
    /// The GUID is the first `{...}` token, and only when the name starts
    /// with `{`. Anything else leaves `guid` empty and keeps the whole
    /// string as `name`.
    pub fn split(decoded: String) -> Self {
        let (guid, name) = match decoded.strip_prefix('{').and_then(|rest| rest.find('}')) {
            // `close` indexes into `rest`, which starts one byte in
            Some(close) => {
                let end = close + 2;
                (decoded[..end].to_string(), decoded[end..].to_string())
            }
            None => (String::new(), decoded.clone()),
        };

        KeyName { decoded, guid, name }
    }

    /// Returns true if a GUID token was found.
    pub fn has_guid(&self) -> bool {
        !self.guid.is_empty()
    }
}

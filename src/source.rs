//! Where UserAssist data lives and what the engine consumes from it.
//!
//! Opening hives and walking their keys is left to the caller. Whatever
//! does that hands the engine one [`RawEntry`] per value found under
//! `<container GUID>\Count`.

use std::path::Path;

/// Registry path of the UserAssist key inside an NTUSER.DAT hive.
pub const USERASSIST_KEY_PATH: &str =
    r"Software\Microsoft\Windows\CurrentVersion\Explorer\UserAssist";

/// Subkey of each container that holds the encoded values.
pub const COUNT_SUBKEY: &str = "Count";

/// File name of the per-user hive.
pub const NTUSER_FILE_NAME: &str = "NTUSER.DAT";

/// One encoded value as read from a hive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// ROT13-encoded value name.
    pub encoded_name: String,

    /// Raw value data.
    pub data: Vec<u8>,

    /// Path of the hive the value came from.
    pub source_hive_path: String,

    /// Profile (user) owning the hive.
    pub profile_name: String,

    /// Name of the UserAssist container key the value sits under, e.g.
    /// `{CEBFF5CD-ACE2-4F4F-9178-9926F41749EA}`.
    pub container_guid: Option<String>,
}

impl RawEntry {
    /// Creates an entry with an explicit profile name.
    pub fn new(
        encoded_name: impl Into<String>,
        data: impl Into<Vec<u8>>,
        source_hive_path: impl Into<String>,
        profile_name: impl Into<String>,
    ) -> Self {
        RawEntry {
            encoded_name: encoded_name.into(),
            data: data.into(),
            source_hive_path: source_hive_path.into(),
            profile_name: profile_name.into(),
            container_guid: None,
        }
    }

    /// Creates an entry whose profile name is taken from the hive path.
    ///
    /// See [`profile_name_from_hive_path`].
    pub fn from_hive_path(
        encoded_name: impl Into<String>,
        data: impl Into<Vec<u8>>,
        source_hive_path: impl Into<String>,
    ) -> Self {
        let source_hive_path = source_hive_path.into();
        let profile_name = profile_name_from_hive_path(&source_hive_path);
        RawEntry {
            encoded_name: encoded_name.into(),
            data: data.into(),
            source_hive_path,
            profile_name,
            container_guid: None,
        }
    }

    /// Sets the container key GUID the value was read from.
    pub fn with_container(mut self, container_guid: impl Into<String>) -> Self {
        self.container_guid = Some(container_guid.into());
        self
    }
}

/// Returns the profile name for a hive path: the name of the directory
/// holding the hive, e.g. `alice` for `C:\Users\alice\NTUSER.DAT`.
///
/// Both `\` and `/` separators are accepted so Windows paths decode the
/// same on every host. Returns an empty string if there is no parent
/// directory name.
pub fn profile_name_from_hive_path(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    Path::new(&normalized)
        .parent()
        .and_then(|parent| parent.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_name_windows_path() {
        assert_eq!(
            profile_name_from_hive_path(r"C:\Users\alice\NTUSER.DAT"),
            "alice"
        );
    }

    #[test]
    fn test_profile_name_unix_path() {
        assert_eq!(
            profile_name_from_hive_path("/mnt/image/Users/bob/NTUSER.DAT"),
            "bob"
        );
    }

    #[test]
    fn test_profile_name_no_parent() {
        assert_eq!(profile_name_from_hive_path("NTUSER.DAT"), "");
        assert_eq!(profile_name_from_hive_path(""), "");
    }

    #[test]
    fn test_from_hive_path() {
        let hive = r"D:\Users\carol\NTUSER.DAT";
        let entry = RawEntry::from_hive_path("pzq.rkr", vec![0u8; 16], hive);
        assert_eq!(entry.profile_name, "carol");
        assert_eq!(entry.source_hive_path, hive);
        assert_eq!(entry.container_guid, None);
    }

    #[test]
    fn test_with_container() {
        let entry = RawEntry::new("pzq.rkr", vec![0u8; 72], "hive", "dave")
            .with_container("{F4E57C4B-2036-45F0-A9AB-443BCFE33D9F}");
        assert_eq!(
            entry.container_guid.as_deref(),
            Some("{F4E57C4B-2036-45F0-A9AB-443BCFE33D9F}")
        );
        assert_eq!(entry.profile_name, "dave");
    }
}

//! Well-known GUIDs seen in UserAssist data.
//!
//! Decoded value names usually start with a KNOWNFOLDERID rather than a
//! drive letter, and the values themselves live under one of a handful of
//! container keys named by GUID.

/// KNOWNFOLDERID GUIDs and the folder each one names.
const KNOWN_FOLDERS: &[(&str, &str)] = &[
    ("{1AC14E77-02E7-4E5D-B744-2EB1AE5198B7}", "System"),
    ("{D65231B0-B2F1-4857-A4CE-A8E7C6EA7D27}", "SystemX86"),
    ("{F38BF404-1D43-42F2-9305-67DE0B28FC23}", "Windows"),
    ("{905E63B6-C1BF-494E-B29C-65B732D3D21A}", "ProgramFiles"),
    ("{6D809377-6AF0-444B-8957-A3773F02200E}", "ProgramFilesX64"),
    ("{7C5A40EF-A0FB-4BFC-874A-C0F2E0B9FA8E}", "ProgramFilesX86"),
    ("{F7F1ED05-9F6D-47A2-AAAE-29D317C6F066}", "ProgramFilesCommon"),
    ("{6365D5A7-0F0D-45E5-87F6-0DA56B6A4F7D}", "ProgramFilesCommonX64"),
    ("{DE974D24-D9C6-4D3E-BF91-F4455120B917}", "ProgramFilesCommonX86"),
    ("{A77F5D77-2E2B-44C3-A6A2-ABA601054A51}", "Programs"),
    ("{0139D44E-6AFE-49F2-8690-3DAFCAE6FFB8}", "CommonPrograms"),
    ("{625B53C3-AB48-4EC1-BA1F-A1EF4146FC19}", "StartMenu"),
    ("{A4115719-D62E-491D-AA7C-E74B8BE3B067}", "CommonStartMenu"),
    ("{B97D20BB-F46A-4C97-BA10-5E3608430854}", "Startup"),
    ("{82A5EA35-D9CD-47C5-9629-E15D2F714E6E}", "CommonStartup"),
    ("{B4BFCC3A-DB2C-424C-B029-7FE99A87C641}", "Desktop"),
    ("{FDD39AD0-238F-46AF-ADB4-6C85480369C7}", "Documents"),
    ("{374DE290-123F-4565-9164-39C4925E467B}", "Downloads"),
    ("{3EB685DB-65F9-4CF6-A03A-E3EF65729F3D}", "RoamingAppData"),
    ("{F1B32785-6FBA-4FCF-9D55-7B8E7F157091}", "LocalAppData"),
    ("{62AB5D82-FDC1-4DC3-A9DD-070D1D495D97}", "ProgramData"),
    ("{9E3995AB-1F9C-4F13-B827-48B24B6C7174}", "UserPinned"),
    ("{5CD7AEE2-2219-4A67-B85D-6C9CE15660CB}", "UserProgramFiles"),
];

/// UserAssist container keys and what they track.
const CONTAINERS: &[(&str, &str)] = &[
    ("{CEBFF5CD-ACE2-4F4F-9178-9926F41749EA}", "Executable File Execution"),
    ("{F4E57C4B-2036-45F0-A9AB-443BCFE33D9F}", "Shortcut File Execution"),
    ("{5E6AB780-7743-11CF-A12B-00AA004AE837}", "Internet Explorer Toolbar"),
    ("{75048700-EF1F-11D0-9888-006097DEACF9}", "Active Desktop"),
    ("{0D6D4F41-2994-4BA0-8FEF-620E43CD2812}", "Internet Explorer 7"),
    ("{BCB48336-4DDD-48FF-BB0B-D3190DACB3E2}", "Windows Explorer 7"),
    ("{CAA59E3C-4792-41A5-9909-6A6A8D32490E}", "Windows Explorer 7"),
    ("{B267E3AD-A825-4A09-82B9-EEC22AA3B847}", "Windows Explorer 7"),
    ("{A3D53349-6E61-4557-8FC7-0028EDCEEBF6}", "Windows Explorer 7"),
    ("{F2A1CB5A-E3CC-4A2E-AF9D-505A7009D442}", "Windows Explorer 7"),
    ("{FA99DFC7-6AC2-453A-A5E2-5E2AFF4507BD}", "Windows Explorer 8"),
];

fn lookup(table: &'static [(&'static str, &'static str)], guid: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(guid))
        .map(|(_, name)| *name)
}

/// Returns the folder name for a braced KNOWNFOLDERID GUID.
///
/// Matching ignores ASCII case.
pub fn folder_name(guid: &str) -> Option<&'static str> {
    lookup(KNOWN_FOLDERS, guid)
}

/// Returns a description of a UserAssist container key GUID.
///
/// # Examples
///
/// ```rust
/// use userassist_decoder::known_folders::container_description;
///
/// assert_eq!(
///     container_description("{CEBFF5CD-ACE2-4F4F-9178-9926F41749EA}"),
///     Some("Executable File Execution")
/// );
/// ```
pub fn container_description(guid: &str) -> Option<&'static str> {
    lookup(CONTAINERS, guid)
}

/// Replaces a leading known-folder GUID in `guid` + `name` with the folder
/// name.
///
/// Returns `None` when the GUID is empty or not in the table.
pub fn resolve_path(guid: &str, name: &str) -> Option<String> {
    folder_name(guid).map(|folder| format!("{}{}", folder, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_name() {
        assert_eq!(
            folder_name("{1AC14E77-02E7-4E5D-B744-2EB1AE5198B7}"),
            Some("System")
        );
        assert_eq!(
            folder_name("{6d809377-6af0-444b-8957-a3773f02200e}"),
            Some("ProgramFilesX64")
        );
        assert_eq!(folder_name("{00000000-0000-0000-0000-000000000000}"), None);
        assert_eq!(folder_name(""), None);
    }

    #[test]
    fn test_container_description() {
        assert_eq!(
            container_description("{F4E57C4B-2036-45F0-A9AB-443BCFE33D9F}"),
            Some("Shortcut File Execution")
        );
        assert_eq!(container_description("Count"), None);
    }

    #[test]
    fn test_resolve_path() {
        assert_eq!(
            resolve_path(
                "{7C5A40EF-A0FB-4BFC-874A-C0F2E0B9FA8E}",
                "\\Mozilla Firefox\\firefox.exe"
            ),
            Some("ProgramFilesX86\\Mozilla Firefox\\firefox.exe".to_string())
        );
        assert_eq!(resolve_path("", "C:\\tool.exe"), None);
    }

    #[test]
    fn test_tables_are_braced() {
        for (guid, _) in KNOWN_FOLDERS.iter().chain(CONTAINERS.iter()) {
            assert_eq!(guid.len(), 38, "{}", guid);
            assert!(guid.starts_with('{') && guid.ends_with('}'));
        }
    }
}

//! Property-based tests for the decoding stages.

use proptest::prelude::*;
use userassist_decoder::{
    classify, decode_entry, extract, focus_time, keyname, last_execution_time, DecodeOptions,
    FormatVersion, RawEntry,
};

proptest! {
    #[test]
    fn rot13_is_an_involution(s in r"[A-Za-z0-9{}\\]*") {
        prop_assert_eq!(keyname::decode(&keyname::decode(&s)), s);
    }

    #[test]
    fn rot13_preserves_non_letters(s in r"[0-9{}\\:._ -]*") {
        prop_assert_eq!(keyname::decode(&s), s);
    }

    #[test]
    fn rot13_preserves_length(s in ".*") {
        prop_assert_eq!(keyname::decode(&s).chars().count(), s.chars().count());
    }

    #[test]
    fn classify_depends_only_on_length(data in proptest::collection::vec(any::<u8>(), 0..200)) {
        let expected = match data.len() {
            16 => FormatVersion::Legacy,
            72 => FormatVersion::Extended,
            _ => FormatVersion::Unrecognized,
        };
        prop_assert_eq!(classify(&data), expected);
    }

    #[test]
    fn decode_never_panics(
        name in ".*",
        data in proptest::collection::vec(any::<u8>(), 0..100),
    ) {
        let entry = RawEntry::new(name, data.clone(), "hive", "user");
        let outcome = decode_entry(&entry, &DecodeOptions { resolve_known_folders: true });

        match classify(&data) {
            FormatVersion::Unrecognized => {
                prop_assert!(outcome.record.is_none());
                prop_assert_eq!(outcome.diagnostics.len(), 1);
            }
            _ => prop_assert!(outcome.record.is_some()),
        }
    }

    #[test]
    fn extended_run_count_roundtrip(count in any::<u32>(), filler in any::<u8>()) {
        let mut data = vec![filler; 72];
        data[4..8].copy_from_slice(&count.to_le_bytes());
        let counters = extract(&data, FormatVersion::Extended).unwrap();
        prop_assert_eq!(counters.run_count, count);
        prop_assert!(counters.focus_time_raw.is_some());
    }

    #[test]
    fn nonzero_filetime_always_converts(raw in 1u64..) {
        prop_assert!(last_execution_time(raw).unwrap().is_some());
    }

    #[test]
    fn focus_time_seconds_match(raw in 1u64..=253_402_300_799_000) {
        // Up to 9999-12-31 23:59:59
        let ts = focus_time(raw).unwrap().unwrap();
        prop_assert_eq!(ts.timestamp() as u64, raw / 1000);
    }
}

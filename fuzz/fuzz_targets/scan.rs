#![no_main]

use libfuzzer_sys::fuzz_target;
use sascheck_syntax::{CategoryId, scan, scan_bytes};

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 must fail cleanly; anything else must scan
    match scan_bytes(data) {
        Ok(report) => {
            assert_eq!(report.iter().count(), CategoryId::COUNT);
            if let Ok(s) = std::str::from_utf8(data) {
                assert_eq!(report, scan(s));
            }
        }
        Err(_) => assert!(std::str::from_utf8(data).is_err()),
    }
});

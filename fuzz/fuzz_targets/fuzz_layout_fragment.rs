#![no_main]

use libfuzzer_sys::fuzz_target;

use layout_merge::xml::parse_fragment;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // A parsed fragment must serialize back to something parseable
        if let Ok(fragment) = parse_fragment(content) {
            let reparsed = parse_fragment(&fragment.inner_xml());
            assert!(reparsed.is_ok());
        }
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;

use layout_merge::infrastructure::LayoutUpdateRecord;

#[derive(serde::Deserialize)]
struct Updates {
    #[allow(dead_code)]
    updates: Vec<LayoutUpdateRecord>,
}

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Stored update files are user-edited; parsing must never panic
        let _ = toml::from_str::<Updates>(content);
    }
});

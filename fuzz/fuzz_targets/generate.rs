#![no_main]

use chanmock::GenerateConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Any declaration that parses must render to valid Rust.
        let mut out = Vec::new();
        if let Err(chanmock::Error::Generate(e)) = chanmock::generate(s, &GenerateConfig::default(), &mut out) {
            panic!("generation failed for parsed input: {e}");
        }
    }
});

#![no_main]
use libfuzzer_sys::fuzz_target;

// Decoding is total: no byte sequence may panic it, and the only Err is
// malformed JSON.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = cvnorm::decode::from_json_str(s);
    }
});

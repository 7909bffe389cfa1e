#![no_main]
use libfuzzer_sys::fuzz_target;

// normalize must be total and deterministic over anything decode produces.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(value) = cvnorm::decode::from_json_str(s) {
            let first = cvnorm::normalize(&value);
            let second = cvnorm::normalize(&value);
            if first != second {
                panic!("normalize is not deterministic\ninput: {}", s);
            }
            // output must always be directly serializable
            serde_json::to_string(&first).unwrap();
            let _ = cvnorm::response_outcome(&value);
        }
    }
});

#![no_main]
use libfuzzer_sys::fuzz_target;

use dynval::CodecOptions;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(value) = dynval::decode_from_str(s) {
            let options = CodecOptions::with_dynamic_converter();
            let _ = dynval::encode_to_string(&value, &options);
        }
    }
});

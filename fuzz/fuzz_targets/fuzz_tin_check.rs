#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Run every handler over the same body. Rejections are fine, panics are bugs.
        for country in taxid::supported_countries() {
            let tin = taxid::Tin::new(country, s);
            let _ = tin.check();
            let _ = tin.check_strict();
            let _ = tin.identify_tin_type();
            let _ = tin.input_mask();
        }
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let tin = taxid::Tin::from_slug(s);
        let _ = tin.parse(taxid::ParseMode::Strict);
        let _ = tin.check();
        let _ = tin.format_input(s);
    }
});

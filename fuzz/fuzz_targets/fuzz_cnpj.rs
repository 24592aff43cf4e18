#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. A FormatError from mask is fine, panics are bugs.
        let _ = cadastro::cnpj::validate(s);
        let _ = cadastro::cnpj::is_valid_format(s);
        let _ = cadastro::cnpj::unmask(s);
        let _ = cadastro::cnpj::mask(s);
    }
});

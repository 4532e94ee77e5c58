#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Fuzz tokenization with arbitrary strings
    // This must not panic and must never yield empty or
    // whitespace-carrying tokens
    for token in wlx::index::tokenize(data) {
        assert!(!token.is_empty());
        assert!(!token.chars().any(char::is_whitespace));
    }
});

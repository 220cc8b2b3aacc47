#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Normalized tokens only ever contain ASCII lowercase letters and
    // apostrophes, regardless of input
    for token in concord::utils::tokenize(data) {
        assert!(token.chars().all(|ch| ch.is_ascii_lowercase() || ch == '\''));
    }
    let _ = concord::utils::normalize_word(data);
});

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let concordance = concord::index::Concordance::from_lines(data.lines());

    // Every indexed word must be findable with a consistent count, and the
    // count is never below the number of context lines
    for (word, count) in concordance.top_words(0) {
        let result = concordance.lookup(word).expect("indexed word must be found");
        assert_eq!(result.count, count);
        assert!(result.count as usize >= result.contexts.len());
    }
});

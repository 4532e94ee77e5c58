#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use wlx::query::QueryEngine;

fuzz_target!(|data: &str| {
    // Fuzz index construction with arbitrary text
    // Building must not panic, and every indexed word must resolve
    // back to stored lines that actually contain it
    let index = wlx::index::build_from_reader(Cursor::new(data));
    let engine = QueryEngine::new(&index);

    for line in data.lines().take(64) {
        for token in wlx::index::tokenize(line).take(64) {
            let result = engine.lookup(token);
            assert!(result.count() > 0);
            for (_, text) in result.occurrences() {
                assert!(wlx::index::tokenize(text).any(|t| t == token));
            }
        }
    }
});

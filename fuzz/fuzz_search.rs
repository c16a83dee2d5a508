//! Fuzz target for the search engine.
//!
//! Run with: cargo +nightly fuzz run fuzz_search
//!
//! Exercises `SearchEngine::search` with arbitrary query and filter strings
//! against a small fixed corpus to find panics or non-termination.

#![no_main]

use std::sync::Arc;

use libfuzzer_sys::fuzz_target;
use specdex_core::{Fragment, FragmentStore, SearchEngine};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // Use the first byte as a split point to divide data into query and filter
    let split = (data[0] as usize % (data.len() - 1)).max(1);
    let query = std::str::from_utf8(&data[1..split]).unwrap_or("attach");
    let filter = std::str::from_utf8(&data[split..]).unwrap_or("ts_124301");

    let store = FragmentStore::from_fragments(vec![
        Fragment {
            id: "a".to_string(),
            text: "attach procedure for EMM cause #7".to_string(),
            source: Some("ts_124301".to_string()),
            position: Some(0),
        },
        Fragment {
            id: "b".to_string(),
            text: "registration reject with back-off timer".to_string(),
            source: None,
            position: None,
        },
    ]);
    let engine = SearchEngine::new(Arc::new(store));

    // Should never panic regardless of input
    let _ = engine.search(query, Some(filter), Some(data[0] as usize));
    let _ = engine.search(query, None, None);
});

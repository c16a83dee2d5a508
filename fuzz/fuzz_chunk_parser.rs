//! Fuzz target for the corpus file parser.
//!
//! Run with: cargo +nightly fuzz run fuzz_chunk_parser
//!
//! This exercises `FragmentStore::parse()` with arbitrary byte sequences to
//! find panics, hangs, or memory issues in the JSON parsing and record
//! normalization pipeline.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try to parse arbitrary bytes as a corpus file
    if let Ok(s) = std::str::from_utf8(data) {
        // We don't care about the result, just that it doesn't panic
        let _ = specdex_core::FragmentStore::parse(s);
    }
});

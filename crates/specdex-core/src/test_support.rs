//! Crate-internal test fixtures.
//!
//! These mirror `specdex-test-utils::store`, but live inside the crate so the
//! in-crate unit tests construct *this* crate's `Fragment` type. The
//! `specdex-test-utils` helpers build the type through the crate's own
//! (dev-dependency-cycle) copy of `specdex-core`, which the lib-test target
//! sees as a distinct type; importing those here would not type-check.

use std::sync::Arc;

use crate::fragment::Fragment;
use crate::store::FragmentStore;

/// A fragment with a source label.
pub fn fragment(id: &str, text: &str, source: &str) -> Fragment {
    Fragment {
        id: id.to_string(),
        text: text.to_string(),
        source: Some(source.to_string()),
        position: None,
    }
}

/// A fragment without source metadata ("unknown" source).
pub fn fragment_without_source(id: &str, text: &str) -> Fragment {
    Fragment {
        id: id.to_string(),
        text: text.to_string(),
        source: None,
        position: None,
    }
}

/// A shared store populated with the given fragments, in order.
pub fn store_with(fragments: Vec<Fragment>) -> Arc<FragmentStore> {
    Arc::new(FragmentStore::from_fragments(fragments))
}

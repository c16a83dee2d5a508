//! Fragment-store fixtures.
//!
//! Builds in-memory corpora directly from literals, bypassing the file
//! loader, so search and lookup tests can inject exactly the fragments they
//! need.

use std::sync::Arc;

use specdex_core::fragment::Fragment;
use specdex_core::store::FragmentStore;

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

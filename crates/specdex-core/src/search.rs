//! Keyword search over the fragment store.
//!
//! Queries are split into lower-cased whitespace tokens. A fragment is a
//! candidate only if *every* token appears somewhere in its lower-cased text
//! (AND semantics — precision over recall; this is a product choice and could
//! be relaxed to OR). Candidates are scored by summing per-token occurrence
//! counts and ranked by descending score, ties keeping store order.
//!
//! Tokens are matched as literal substrings, never compiled into regular
//! expressions, so hostile queries cannot trigger pathological backtracking.

use std::sync::Arc;

use serde::Serialize;

use crate::fragment::Fragment;
use crate::store::FragmentStore;

/// Result count used when the caller does not provide a usable limit.
pub const DEFAULT_LIMIT: usize = 5;

/// A ranked search hit. Ephemeral, produced per call.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub fragment: Fragment,
    /// Sum of per-token non-overlapping occurrence counts.
    pub score: usize,
}

/// Keyword search engine over a shared fragment store.
///
/// Holds the store behind an [`Arc`]; all operations take `&self` and never
/// write, so the engine is freely cloneable and safe to call concurrently.
#[derive(Clone)]
pub struct SearchEngine {
    store: Arc<FragmentStore>,
    default_limit: usize,
}

impl SearchEngine {
    /// Create an engine over the given store with the stock default limit.
    pub fn new(store: Arc<FragmentStore>) -> Self {
        Self {
            store,
            default_limit: DEFAULT_LIMIT,
        }
    }

    /// Override the limit applied when a caller omits one.
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        if limit > 0 {
            self.default_limit = limit;
        }
        self
    }

    /// The store this engine searches.
    pub fn store(&self) -> &FragmentStore {
        &self.store
    }

    /// Run a keyword query.
    ///
    /// An empty or whitespace-only query yields an empty result set — a
    /// defined edge case, not an error. `limit` of `None` or `Some(0)` falls
    /// back to the engine's default. The returned sequence is sorted by
    /// descending score; equal scores keep their store order.
    pub fn search(
        &self,
        query: &str,
        source_filter: Option<&str>,
        limit: Option<usize>,
    ) -> Vec<QueryResult> {
        let tokens: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if tokens.is_empty() {
            return Vec::new();
        }

        let filter = source_filter.and_then(normalize_source_filter);
        let limit = match limit {
            Some(n) if n > 0 => n,
            _ => self.default_limit,
        };

        let mut results: Vec<QueryResult> = self
            .store
            .all()
            .iter()
            .filter(|fragment| passes_filter(fragment, filter.as_deref()))
            .filter_map(|fragment| {
                let text = fragment.text.to_lowercase();
                if !tokens.iter().all(|t| text.contains(t.as_str())) {
                    return None;
                }
                let score = tokens
                    .iter()
                    .map(|t| text.matches(t.as_str()).count())
                    .sum();
                Some(QueryResult {
                    fragment: fragment.clone(),
                    score,
                })
            })
            .collect();

        // sort_by is stable: ties keep store order
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(limit);
        results
    }
}

/// Whether a fragment's source label passes the normalized filter.
///
/// Fragments without a source never pass a live filter.
fn passes_filter(fragment: &Fragment, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(needle) => fragment
            .source
            .as_deref()
            .is_some_and(|source| normalize_source_label(source).contains(needle)),
    }
}

/// Normalize a caller-supplied source filter.
///
/// Lower-cases, removes whitespace and dot separators, and strips one
/// leading "ts" series prefix, so that "TS 24.301", "ts24.301" and
/// "24.301" all match the corpus label `ts_124301`. Matching is best-effort
/// substring containment; label conventions outside the `ts_*` family may
/// not normalize cleanly. A filter that normalizes to the empty string is
/// treated as no filter.
pub fn normalize_source_filter(raw: &str) -> Option<String> {
    let collapsed: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();
    let stripped = collapsed.strip_prefix("ts").unwrap_or(&collapsed);
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// Normalize a fragment's source label for filter comparison.
fn normalize_source_label(label: &str) -> String {
    label.to_lowercase()
}

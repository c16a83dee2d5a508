//! Cause-code lookup with corpus enrichment.
//!
//! Resolves a cause code against one of the static tables, substituting the
//! designated fallback entry for undefined codes. Defined hits are enriched
//! with a handful of supporting fragments from the corpus; enrichment is
//! purely additive and an empty store simply yields no excerpts.

use tracing::debug;

use crate::causes::{CauseEntry, CauseTable};
use crate::search::{QueryResult, SearchEngine};

/// Supporting fragments requested per lookup.
const RELATED_LIMIT: usize = 2;

/// Outcome of a cause-code lookup. Never an error: undefined codes resolve
/// to the fallback entry with `defined = false`.
#[derive(Debug)]
pub struct CauseLookup {
    /// Table the lookup ran against.
    pub table: CauseTable,
    /// The code as requested by the caller.
    pub code: u16,
    /// The resolved entry — the fallback when `defined` is false.
    pub entry: &'static CauseEntry,
    /// Whether the requested code is defined in the table.
    pub defined: bool,
    /// Supporting specification excerpts, possibly empty.
    pub related: Vec<QueryResult>,
}

/// Resolves cause codes and attaches supporting corpus excerpts.
#[derive(Clone)]
pub struct LookupService {
    engine: SearchEngine,
}

impl LookupService {
    pub fn new(engine: SearchEngine) -> Self {
        Self { engine }
    }

    /// Look up `code` in `table`.
    ///
    /// A defined code returns its entry verbatim plus up to [`RELATED_LIMIT`]
    /// supporting fragments found by querying `"#<code> <name>"` against the
    /// table's specification. An undefined code returns the fallback entry
    /// and no excerpts.
    pub fn lookup(&self, table: CauseTable, code: u16) -> CauseLookup {
        match table.get(code) {
            Some(entry) => {
                let query = format!("#{code} {}", entry.name);
                let related =
                    self.engine
                        .search(&query, Some(table.source_label()), Some(RELATED_LIMIT));
                debug!(
                    code,
                    table = table.acronym(),
                    related = related.len(),
                    "resolved cause"
                );
                CauseLookup {
                    table,
                    code,
                    entry,
                    defined: true,
                    related,
                }
            }
            None => {
                debug!(code, table = table.acronym(), "undefined cause, substituting fallback");
                CauseLookup {
                    table,
                    code,
                    entry: table.fallback(),
                    defined: false,
                    related: Vec::new(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::causes::FALLBACK_CODE;
    use pretty_assertions::assert_eq;
    use crate::test_support::{fragment, store_with};
    use std::sync::Arc;

    fn service(fragments: Vec<crate::fragment::Fragment>) -> LookupService {
        LookupService::new(SearchEngine::new(store_with(fragments)))
    }

    #[test]
    fn test_defined_code_returns_entry_verbatim() {
        let service = service(Vec::new());
        let result = service.lookup(CauseTable::Emm, 7);
        assert!(result.defined);
        assert_eq!(result.code, 7);
        assert_eq!(result.entry.name, "EPS services not allowed");
    }

    #[test]
    fn test_undefined_code_substitutes_fallback() {
        let service = service(Vec::new());
        let result = service.lookup(CauseTable::Emm, 9999);
        assert!(!result.defined);
        assert_eq!(result.code, 9999);
        assert_eq!(result.entry.code, FALLBACK_CODE);
        assert_eq!(result.entry.name, "Protocol error, unspecified");
        assert!(result.related.is_empty());
    }

    #[test]
    fn test_empty_store_does_not_fail_lookup() {
        let service = LookupService::new(SearchEngine::new(Arc::new(
            crate::store::FragmentStore::new(),
        )));
        let result = service.lookup(CauseTable::FiveGmm, 22);
        assert!(result.defined);
        assert_eq!(result.entry.name, "Congestion");
        assert!(result.related.is_empty());
    }

    #[test]
    fn test_enrichment_from_matching_spec() {
        let service = service(vec![
            fragment(
                "a",
                "If the UE receives EMM cause #7 EPS services not allowed, the UE shall set the update status",
                "ts_124301",
            ),
            fragment("b", "unrelated text about cause #7 EPS services not allowed", "ts_124501"),
        ]);
        let result = service.lookup(CauseTable::Emm, 7);
        assert!(result.defined);
        // only the TS 24.301 fragment qualifies: enrichment is filtered to
        // the table's own specification
        assert_eq!(result.related.len(), 1);
        assert_eq!(result.related[0].fragment.id, "a");
    }

    #[test]
    fn test_enrichment_capped_at_two() {
        let fragments = (0..4)
            .map(|i| {
                fragment(
                    &format!("f{i}"),
                    "cause #22 Congestion back-off timer handling",
                    "ts_124301",
                )
            })
            .collect();
        let result = service(fragments).lookup(CauseTable::Emm, 22);
        assert_eq!(result.related.len(), 2);
    }
}

//! Tool surface — named, JSON-Schema-described operations for an AI
//! assistant host.
//!
//! Three operations are exposed: `search-documents`, `lookup-code`, and
//! `list-sources`. Each declares its argument schema via a
//! [`ToolDefinition`], and every call renders a textual payload — malformed
//! arguments produce a descriptive message rather than a fault, so a host
//! can always forward the result verbatim. Binding these operations to a
//! concrete transport is the host's concern, not this crate's.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use specdex_config::SearchConfig;

use crate::causes::CauseTable;
use crate::lookup::LookupService;
use crate::search::SearchEngine;
use crate::specs;
use crate::store::FragmentStore;

/// Operation name: ranked keyword search over the corpus.
pub const SEARCH_DOCUMENTS: &str = "search-documents";
/// Operation name: cause-code lookup with fallback substitution.
pub const LOOKUP_CODE: &str = "lookup-code";
/// Operation name: corpus source enumeration.
pub const LIST_SOURCES: &str = "list-sources";

/// A tool the host can invoke: name, description, and a JSON Schema for
/// the accepted arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Errors surfaced to the caller of [`ToolSurface::call`].
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

/// Dispatches named operations against the loaded corpus and the static
/// cause tables.
///
/// All operations take `&self` and perform no writes; the surface is safe
/// to share behind an [`Arc`] and call concurrently.
pub struct ToolSurface {
    store: Arc<FragmentStore>,
    engine: SearchEngine,
    lookup: LookupService,
    preview_chars: usize,
    related_preview_chars: usize,
}

impl ToolSurface {
    /// Build the surface over a loaded (possibly empty) store.
    pub fn new(store: Arc<FragmentStore>, search: &SearchConfig) -> Self {
        let engine =
            SearchEngine::new(Arc::clone(&store)).with_default_limit(search.default_limit);
        let lookup = LookupService::new(engine.clone());
        Self {
            store,
            engine,
            lookup,
            preview_chars: search.preview_chars,
            related_preview_chars: search.related_preview_chars,
        }
    }

    /// Build the surface with stock result shaping.
    pub fn with_defaults(store: Arc<FragmentStore>) -> Self {
        Self::new(store, &SearchConfig::default())
    }

    /// The argument schemas published to the host.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: SEARCH_DOCUMENTS.to_string(),
                description: "Search 3GPP specification documents (TS 24.008, TS 24.301, \
                              TS 24.501, TS 36.300) by keywords."
                    .to_string(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Search query (e.g. 'EMM cause reject', 'attach procedure', 'tracking area update')"
                        },
                        "sourceFilter": {
                            "type": "string",
                            "description": "Optional specification filter (e.g. 'TS 24.301', 'TS 24.501')"
                        },
                        "limit": {
                            "type": "integer",
                            "description": "Maximum number of results to return (default: 5)"
                        }
                    },
                    "required": ["query"]
                }),
            },
            ToolDefinition {
                name: LOOKUP_CODE.to_string(),
                description: "Get detailed information about EMM cause (LTE) or 5GMM cause (5G) \
                              values."
                    .to_string(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "code": {
                            "type": "integer",
                            "description": "The cause number (e.g. 3, 7, 15, 22)"
                        },
                        "table": {
                            "type": "string",
                            "description": "Cause table: 'lte' for EMM causes (TS 24.301), '5g' for 5GMM causes (TS 24.501). Default: 'lte'",
                            "enum": ["lte", "5g"]
                        }
                    },
                    "required": ["code"]
                }),
            },
            ToolDefinition {
                name: LIST_SOURCES.to_string(),
                description: "List the 3GPP specifications present in the loaded corpus."
                    .to_string(),
                parameters: json!({
                    "type": "object",
                    "properties": {},
                    "required": []
                }),
            },
        ]
    }

    /// Invoke a tool by name.
    ///
    /// Always yields a textual payload for a known tool; argument problems
    /// are described in the payload itself. The only error is an unknown
    /// tool name.
    pub fn call(&self, name: &str, args: &Value) -> Result<String, ToolError> {
        debug!(tool = name, "tool call");
        match name {
            SEARCH_DOCUMENTS => Ok(self.handle_search(args)),
            LOOKUP_CODE => Ok(self.handle_lookup(args)),
            LIST_SOURCES => Ok(self.handle_list_sources()),
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }

    // ── Operation handlers ──────────────────────────────────────────────

    fn handle_search(&self, args: &Value) -> String {
        let Some(query) = args.get("query").and_then(Value::as_str) else {
            return format!("{SEARCH_DOCUMENTS} requires a string 'query' argument.");
        };
        let source_filter = args.get("sourceFilter").and_then(Value::as_str);

        let limit = match args.get("limit") {
            None | Some(Value::Null) => None,
            Some(value) => match value.as_i64() {
                // non-positive limits fall back to the default
                Some(n) if n > 0 => Some(n as usize),
                Some(_) => None,
                None => {
                    return format!(
                        "The 'limit' argument must be an integer, got {value}."
                    );
                }
            },
        };

        let results = self.engine.search(query, source_filter, limit);
        let scope = source_filter
            .map(|f| format!(" in {f}"))
            .unwrap_or_default();

        if results.is_empty() {
            return format!("No results found for \"{query}\"{scope}");
        }

        let formatted: Vec<String> = results
            .iter()
            .enumerate()
            .map(|(i, r)| {
                format!(
                    "[{}] Source: {}\n{}",
                    i + 1,
                    r.fragment.source_label(),
                    preview(&r.fragment.text, self.preview_chars)
                )
            })
            .collect();

        format!(
            "Found {} results for \"{query}\"{scope}:\n\n{}",
            results.len(),
            formatted.join("\n\n---\n\n")
        )
    }

    fn handle_lookup(&self, args: &Value) -> String {
        let Some(code) = args.get("code").and_then(Value::as_i64) else {
            return format!("{LOOKUP_CODE} requires an integer 'code' argument.");
        };
        let Ok(code) = u16::try_from(code) else {
            return format!("Cause code {code} is out of range for NAS cause values.");
        };
        let table = args
            .get("table")
            .and_then(Value::as_str)
            .map(CauseTable::from_selector)
            .unwrap_or_default();

        let result = self.lookup.lookup(table, code);
        let acronym = table.acronym();
        let title = table.title();

        if !result.defined {
            return format!(
                "{acronym} Cause #{code} is not defined.\n\
                 Per {title}, undefined cause values are treated as #{} \"{}\".\n\n\
                 Description: {}",
                result.entry.code, result.entry.name, result.entry.description
            );
        }

        let mut text = format!(
            "## {acronym} Cause #{code} ({title})\n\n\
             **Name:** {}\n\n\
             **Description:** {}",
            result.entry.name, result.entry.description
        );

        if !result.related.is_empty() {
            let excerpts: Vec<String> = result
                .related
                .iter()
                .map(|r| preview(&r.fragment.text, self.related_preview_chars))
                .collect();
            text.push_str("\n\nRelated specification text:\n");
            text.push_str(&excerpts.join("\n\n"));
        }

        text
    }

    fn handle_list_sources(&self) -> String {
        let sources = self.store.sources();
        let listing = if sources.is_empty() {
            "(no sources loaded)".to_string()
        } else {
            sources
                .iter()
                .map(|s| format!("- {}", specs::display_name(s)))
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            "## Available 3GPP Specifications\n\n\
             Total chunks: {}\n\n\
             {listing}\n\n\
             ### Usage Examples:\n\
             - {SEARCH_DOCUMENTS}: \"EMM cause reject\"\n\
             - {LOOKUP_CODE}: code=3, table=\"lte\"\n\
             - {LOOKUP_CODE}: code=7, table=\"5g\"",
            self.store.len()
        )
    }
}

/// First `max_chars` characters of `text`, with an ellipsis when truncated.
/// Counts characters, not bytes, so multi-byte text never splits mid-char.
fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max_chars).collect();
        out.push_str("...");
        out
    }
}

//! End-to-end tests for the tool surface over a file-loaded corpus.
//!
//! These exercise the full startup path an assistant host goes through:
//! write a corpus file, load it into a store, build the surface, and drive
//! the three operations with JSON arguments.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;

use specdex_config::SearchConfig;
use specdex_core::tools::{LIST_SOURCES, LOOKUP_CODE, SEARCH_DOCUMENTS};
use specdex_core::{FragmentStore, ToolSurface};

const CORPUS: &str = r#"[
    {"id": "ts_124301_chunk_0",
     "content": "attach procedure for EMM: the UE initiates the attach procedure",
     "metadata": {"source": "ts_124301", "chunk_index": 0}},
    {"id": "ts_124301_chunk_1",
     "content": "ATTACH REJECT with EMM cause #7 EPS services not allowed",
     "metadata": {"source": "ts_124301", "chunk_index": 1}},
    {"id": "ts_124501_chunk_0",
     "content": "registration procedure for 5GMM over N1",
     "metadata": {"source": "ts_124501", "chunk_index": 0}}
]"#;

async fn surface_from(dir: &TempDir, corpus: &str) -> ToolSurface {
    let path = dir.path().join("chunks.json");
    tokio::fs::write(&path, corpus).await.unwrap();

    let mut store = FragmentStore::new();
    store.load_or_empty(&path).await;
    ToolSurface::new(Arc::new(store), &SearchConfig::default())
}

#[tokio::test]
async fn test_search_over_loaded_corpus() {
    specdex_test_utils::tracing_setup::init_test_tracing();
    let tmp = TempDir::new().unwrap();
    let surface = surface_from(&tmp, CORPUS).await;

    let text = surface
        .call(SEARCH_DOCUMENTS, &json!({"query": "attach"}))
        .unwrap();
    assert!(text.starts_with("Found 2 results for \"attach\":"));

    let text = surface
        .call(
            SEARCH_DOCUMENTS,
            &json!({"query": "procedure", "sourceFilter": "TS 24.501"}),
        )
        .unwrap();
    assert!(text.contains("registration procedure"));
    assert!(!text.contains("attach procedure"));
}

#[tokio::test]
async fn test_lookup_enriched_from_corpus() {
    let tmp = TempDir::new().unwrap();
    let surface = surface_from(&tmp, CORPUS).await;

    let text = surface.call(LOOKUP_CODE, &json!({"code": 7})).unwrap();
    assert!(text.starts_with("## EMM Cause #7 (TS 24.301)"));
    assert!(text.contains("**Name:** EPS services not allowed"));
    assert!(text.contains("Related specification text:"));
    assert!(text.contains("ATTACH REJECT"));
}

#[tokio::test]
async fn test_list_sources_over_loaded_corpus() {
    let tmp = TempDir::new().unwrap();
    let surface = surface_from(&tmp, CORPUS).await;

    let text = surface.call(LIST_SOURCES, &json!({})).unwrap();
    assert!(text.contains("Total chunks: 3"));
    assert!(text.contains("TS 24.301 - LTE NAS (EMM/ESM)"));
    assert!(text.contains("TS 24.501 - 5G NAS (5GMM/5GSM)"));
}

#[tokio::test]
async fn test_degraded_mode_without_corpus() {
    // No corpus file at all: search yields no results, lookup keeps working.
    let mut store = FragmentStore::new();
    store
        .load_or_empty(Path::new("/nonexistent/chunks.json"))
        .await;
    let surface = ToolSurface::new(Arc::new(store), &SearchConfig::default());

    let text = surface
        .call(SEARCH_DOCUMENTS, &json!({"query": "anything"}))
        .unwrap();
    assert_eq!(text, "No results found for \"anything\"");

    let text = surface.call(LOOKUP_CODE, &json!({"code": 7})).unwrap();
    assert!(text.contains("EPS services not allowed"));
    assert!(!text.contains("Related specification text:"));

    let text = surface.call(LIST_SOURCES, &json!({})).unwrap();
    assert!(text.contains("Total chunks: 0"));
}

#[tokio::test]
async fn test_corrupt_corpus_degrades_gracefully() {
    let tmp = TempDir::new().unwrap();
    let surface = surface_from(&tmp, "[{not json").await;

    let text = surface
        .call(SEARCH_DOCUMENTS, &json!({"query": "attach"}))
        .unwrap();
    assert!(text.starts_with("No results found"));
}

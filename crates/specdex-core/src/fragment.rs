//! Corpus record types.
//!
//! The chunking pipeline emits a JSON array of raw chunk records. Those are
//! normalized into [`Fragment`] values exactly once, at load time, so the
//! rest of the crate never re-checks optional field presence.

use serde::{Deserialize, Serialize};

/// A raw chunk record as serialized in the corpus file.
///
/// Only `id` and `content` are required; everything under `metadata` is
/// optional and varies between pipeline versions.
#[derive(Debug, Clone, Deserialize)]
pub struct RawChunk {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub metadata: Option<RawChunkMetadata>,
}

/// Optional per-chunk metadata from the pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawChunkMetadata {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub chunk_index: Option<u64>,
    #[serde(default)]
    pub start_char: Option<u64>,
    #[serde(default)]
    pub end_char: Option<u64>,
}

/// Source label used when a fragment carries no source metadata.
pub const UNKNOWN_SOURCE: &str = "unknown";

/// One unit of searchable specification text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    /// Unique identifier within the store.
    pub id: String,
    /// The fragment's text content.
    pub text: String,
    /// Label of the originating document, if known.
    pub source: Option<String>,
    /// Ordinal of this fragment within its source. Informational only,
    /// never consulted by ranking.
    pub position: Option<u64>,
}

impl Fragment {
    /// The source label for display, substituting [`UNKNOWN_SOURCE`] when absent.
    pub fn source_label(&self) -> &str {
        self.source.as_deref().unwrap_or(UNKNOWN_SOURCE)
    }
}

impl From<RawChunk> for Fragment {
    fn from(raw: RawChunk) -> Self {
        let metadata = raw.metadata.unwrap_or_default();
        Self {
            id: raw.id,
            text: raw.content,
            source: metadata.source,
            position: metadata.chunk_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_full_record() {
        let raw: RawChunk = serde_json::from_str(
            r#"{
                "id": "ts_124301_chunk_17",
                "content": "attach procedure",
                "metadata": {
                    "source": "ts_124301",
                    "chunk_index": 17,
                    "start_char": 25500,
                    "end_char": 27000
                }
            }"#,
        )
        .unwrap();

        let fragment = Fragment::from(raw);
        assert_eq!(fragment.id, "ts_124301_chunk_17");
        assert_eq!(fragment.text, "attach procedure");
        assert_eq!(fragment.source.as_deref(), Some("ts_124301"));
        assert_eq!(fragment.position, Some(17));
        assert_eq!(fragment.source_label(), "ts_124301");
    }

    #[test]
    fn test_normalize_without_metadata() {
        let raw: RawChunk =
            serde_json::from_str(r#"{"id": "x", "content": "text"}"#).unwrap();
        let fragment = Fragment::from(raw);
        assert_eq!(fragment.source, None);
        assert_eq!(fragment.position, None);
        assert_eq!(fragment.source_label(), UNKNOWN_SOURCE);
    }

    #[test]
    fn test_normalize_partial_metadata() {
        let raw: RawChunk = serde_json::from_str(
            r#"{"id": "x", "content": "text", "metadata": {"chunk_index": 3}}"#,
        )
        .unwrap();
        let fragment = Fragment::from(raw);
        assert_eq!(fragment.source, None);
        assert_eq!(fragment.position, Some(3));
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let result: Result<RawChunk, _> = serde_json::from_str(r#"{"id": "x"}"#);
        assert!(result.is_err());
    }
}

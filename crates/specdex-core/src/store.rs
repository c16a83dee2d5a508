//! Fragment store — the in-memory corpus.
//!
//! The store is populated once at startup from the corpus file and is
//! read-only afterwards. Every query performs a full scan; there is no
//! secondary index. Corpus absence or corruption is a recoverable condition:
//! the process continues with an empty store (lookup-only mode).

use std::path::Path;

use tracing::{info, warn};

use crate::fragment::{Fragment, RawChunk, UNKNOWN_SOURCE};

/// Errors from loading the corpus file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse corpus file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory collection of text fragments, ordered as loaded.
#[derive(Debug, Default)]
pub struct FragmentStore {
    fragments: Vec<Fragment>,
}

impl FragmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from already-normalized fragments.
    ///
    /// Intended for tests and fixtures that inject corpus content directly
    /// instead of going through the file loader.
    pub fn from_fragments(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// Parse a corpus JSON string into a store.
    ///
    /// The whole input must parse as one array of chunk records; a single
    /// malformed record fails the parse as a unit.
    pub fn parse(s: &str) -> Result<Self, LoadError> {
        let raw: Vec<RawChunk> = serde_json::from_str(s)?;
        let fragments = raw.into_iter().map(Fragment::from).collect();
        Ok(Self { fragments })
    }

    /// Load the corpus file at `path`, replacing any prior content.
    ///
    /// Performs exactly one full read of the file. On failure the store is
    /// left empty, never partially populated.
    pub async fn load(&mut self, path: &Path) -> Result<usize, LoadError> {
        self.fragments.clear();
        let content = tokio::fs::read_to_string(path).await?;
        let loaded = Self::parse(&content)?;
        self.fragments = loaded.fragments;
        Ok(self.fragments.len())
    }

    /// Load the corpus file, degrading to an empty store on failure.
    ///
    /// The error is logged and swallowed so that corpus unavailability never
    /// prevents the process from starting; search returns no results and
    /// cause lookup keeps working.
    pub async fn load_or_empty(&mut self, path: &Path) -> usize {
        match self.load(path).await {
            Ok(count) => {
                info!(path = %path.display(), count, "loaded corpus");
                count
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "corpus unavailable, continuing with empty store");
                0
            }
        }
    }

    /// Read-only view of all fragments, in load order.
    pub fn all(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of fragments in the store.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the store holds no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Distinct source labels present in the store, in first-seen order.
    ///
    /// Fragments without a source are reported under [`UNKNOWN_SOURCE`].
    pub fn sources(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for fragment in &self.fragments {
            let label = fragment.source.as_deref().unwrap_or(UNKNOWN_SOURCE);
            if !seen.iter().any(|s| s == label) {
                seen.push(label.to_string());
            }
        }
        seen
    }
}

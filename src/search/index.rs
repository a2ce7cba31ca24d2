//! Boundary to the site's pre-built full-text index.
//!
//! Indexing and ranking belong to the index itself; this crate only consumes
//! ranked hits and renders them.

use super::options::SearchOptions;
use crate::error::{LoadError, read_json};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Stored fields of an indexed page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// One ranked match returned by the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Page URL
    #[serde(rename = "ref")]
    pub reference: String,
    pub doc: Document,
}

impl SearchHit {
    pub fn new(reference: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            doc: Document {
                title: title.into(),
                body: body.into(),
            },
        }
    }
}

/// A full-text index that answers queries with ranked hits, best first.
pub trait SearchIndex {
    fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchHit>;
}

/// Replays an already-ranked hit list for every query.
///
/// Used where results were computed ahead of time, e.g. exported from the
/// browser index for offline rendering.
#[derive(Debug, Clone, Default)]
pub struct StaticHits {
    hits: Vec<SearchHit>,
}

impl StaticHits {
    pub const fn new(hits: Vec<SearchHit>) -> Self {
        Self { hits }
    }

    /// Load hits from a JSON array of `{"ref": ..., "doc": {"title": ..., "body": ...}}`.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let hits: Vec<SearchHit> = read_json(path)?;
        tracing::info!("Loaded {} search hits from {}", hits.len(), path.display());
        Ok(Self::new(hits))
    }
}

impl SearchIndex for StaticHits {
    fn search(&self, query: &str, _options: &SearchOptions) -> Vec<SearchHit> {
        tracing::debug!("Replaying {} hits for '{}'", self.hits.len(), query);
        self.hits.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_hit_json_uses_ref_key() {
        let hit: SearchHit = serde_json::from_str(
            r#"{"ref": "https://example.org/docs/intro", "doc": {"title": "Intro", "body": "Hello"}}"#,
        )
        .unwrap();
        check!(hit == SearchHit::new("https://example.org/docs/intro", "Intro", "Hello"));
    }

    #[test]
    fn test_missing_doc_fields_default_empty() {
        let hit: SearchHit = serde_json::from_str(r#"{"ref": "/a", "doc": {}}"#).unwrap();
        check!(hit.doc.body.is_empty());
        check!(hit.doc.title.is_empty());
    }

    #[test]
    fn test_static_hits_replay_in_order() {
        let index = StaticHits::new(vec![
            SearchHit::new("/b", "B", "second"),
            SearchHit::new("/a", "A", "first"),
        ]);
        let hits = index.search("anything", &SearchOptions::default());
        check!(hits.iter().map(|h| h.reference.as_str()).collect::<Vec<_>>() == vec!["/b", "/a"]);
    }
}

//! Shared test fixtures for integration tests.
//!
//! [`SiteFiles`] lays out the data files the site ships alongside its search
//! index (pre-computed hits, glossary, configuration) in a temp directory that
//! is removed when dropped.

use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HITS_JSON: &str = r#"[
  {
    "ref": "https://example.org/docs/arvo/ames",
    "doc": {
      "title": "Ames",
      "body": "Ames is the name of our network and the vane that communicates over it. It is an encrypted peer-to-peer network. Every ship talks to other ships over Ames, and packets are retried until acknowledged."
    }
  },
  {
    "ref": "https://example.org/docs/glossary/empty",
    "doc": { "title": "Stub", "body": "" }
  },
  {
    "ref": "https://example.org/blog/hosting",
    "doc": {
      "title": "Hosting your ship",
      "body": "Running a ship in the cloud. A hosted ship stays online while your laptop sleeps."
    }
  }
]"#;

pub const GLOSSARY_JSON: &str = r#"[
  { "name": "ames", "symbol": "", "desc": "The network and the vane that runs it.", "link": "/docs/glossary/ames" },
  { "name": "gate", "symbol": "|=", "desc": "A function.", "link": "/docs/glossary/gate" }
]"#;

/// A temporary directory of site data files.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct SiteFiles {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl SiteFiles {
    /// Creates an empty temp directory.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes `content` to `name` and returns its full path.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(name);
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", name, e));
        full_path
    }

    pub fn hits(&self) -> PathBuf {
        self.root.join("hits.json")
    }

    pub fn glossary(&self) -> PathBuf {
        self.root.join("glossary.json")
    }
}

impl Default for SiteFiles {
    fn default() -> Self {
        Self::new()
    }
}

/// Site data directory with hits and glossary files in place.
#[fixture]
pub fn site_files() -> SiteFiles {
    let files = SiteFiles::new();
    files.create_file("hits.json", HITS_JSON);
    files.create_file("glossary.json", GLOSSARY_JSON);
    files
}

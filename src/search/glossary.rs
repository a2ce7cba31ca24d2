//! Glossary lookup shown above search results.
//!
//! A query naming a glossary term (or typing its symbol) surfaces a short
//! definition card linking to the full entry.

use super::results::escape_html;
use crate::error::{LoadError, read_json};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub desc: String,
    pub link: String,
}

/// How a query matched a glossary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlossaryMatch {
    /// Query equals the entry name, ignoring case
    Name,
    /// Query equals the entry symbol exactly
    Symbol,
}

/// The glossary card for a matched entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryCard {
    pub entry: GlossaryEntry,
    pub matched: GlossaryMatch,
}

impl GlossaryCard {
    pub fn to_html(&self) -> String {
        let entry = &self.entry;
        let (heading, read_more) = match self.matched {
            GlossaryMatch::Name => (escape_html(&entry.name), "Glossary"),
            GlossaryMatch::Symbol => (
                format!(
                    r#"<code class="pa0 red3 mr1">{}</code>{}"#,
                    escape_html(&entry.symbol),
                    escape_html(&entry.name)
                ),
                "Documentation",
            ),
        };

        format!(
            r#"<a href="{}"><h3 class="black">{}</h3><p class="black">{}</p><span class="db tr black fw5 mb3">Read more in {} -></span></a>"#,
            escape_html(&entry.link),
            heading,
            escape_html(&entry.desc),
            read_more
        )
    }

    pub fn to_text(&self) -> String {
        let entry = &self.entry;
        match self.matched {
            GlossaryMatch::Name => format!("{}\n  {}\n  -> {}", entry.name, entry.desc, entry.link),
            GlossaryMatch::Symbol => format!(
                "{} {}\n  {}\n  -> {}",
                entry.symbol, entry.name, entry.desc, entry.link
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Glossary {
    entries: Vec<GlossaryEntry>,
}

impl Glossary {
    pub const fn new(entries: Vec<GlossaryEntry>) -> Self {
        Self { entries }
    }

    /// Load a JSON array of glossary entries.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let entries: Vec<GlossaryEntry> = read_json(path)?;
        tracing::info!("Loaded {} glossary entries from {}", entries.len(), path.display());
        Ok(Self::new(entries))
    }

    /// Find the glossary card for a trimmed query.
    ///
    /// Entries are scanned in order. A name match ends the scan; a symbol
    /// match is kept but a later entry may still replace it.
    pub fn lookup(&self, term: &str) -> Option<GlossaryCard> {
        let lowered = term.to_lowercase();
        let mut found = None;

        for entry in &self.entries {
            if entry.name == lowered {
                found = Some((entry, GlossaryMatch::Name));
                break;
            } else if !entry.symbol.is_empty() && entry.symbol == term {
                found = Some((entry, GlossaryMatch::Symbol));
            }
        }

        found.map(|(entry, matched)| GlossaryCard {
            entry: entry.clone(),
            matched,
        })
    }
}

//! Site search: teaser extraction and the results panel built around it.
//!
//! Ranking and indexing live in the site's pre-built full-text index; this
//! module consumes its hits, picks a teaser for each and assembles what the
//! search window shows.

// Module declarations
pub mod glossary;
pub mod index;
pub mod options;
pub mod results;
pub mod session;
pub mod stem;
pub mod teaser;

// Public re-exports
pub use glossary::{Glossary, GlossaryCard, GlossaryEntry, GlossaryMatch};
pub use index::{Document, SearchHit, SearchIndex, StaticHits};
pub use options::{BoolMode, FieldOptions, SearchOptions};
pub use results::{ResultItem, ResultTitle, ResultsPanel};
pub use session::{LiveSearch, SearchSession};
pub use stem::{EnglishStemmer, Stem};
pub use teaser::{TRUNCATION_MARKER, TeaserExtractor, extract_teaser, query_terms};

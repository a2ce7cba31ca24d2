//! Turning the text typed into the search box into a results panel.

use super::glossary::Glossary;
use super::index::SearchIndex;
use super::results::{ResultItem, ResultTitle, ResultsPanel};
use super::stem::{EnglishStemmer, Stem};
use super::teaser::{TeaserExtractor, query_terms};
use crate::config::SiteConfig;
use crate::ui::debounce::Debouncer;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Runs queries against the site index and builds the results panel.
pub struct SearchSession<I, S = EnglishStemmer> {
    index: I,
    glossary: Glossary,
    config: SiteConfig,
    extractor: TeaserExtractor<S>,
}

impl<I: SearchIndex> SearchSession<I> {
    pub fn new(index: I, glossary: Glossary, config: SiteConfig) -> Self {
        Self::with_extractor(index, glossary, config, TeaserExtractor::default())
    }
}

impl<I: SearchIndex, S: Stem> SearchSession<I, S> {
    pub fn with_extractor(
        index: I,
        glossary: Glossary,
        config: SiteConfig,
        extractor: TeaserExtractor<S>,
    ) -> Self {
        Self {
            index,
            glossary,
            config,
            extractor,
        }
    }

    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Build the panel for the current contents of the search box.
    pub fn run(&self, input: &str) -> ResultsPanel {
        let query = input.trim();
        if query.is_empty() {
            return ResultsPanel::hidden();
        }

        let glossary = self.glossary.lookup(query);

        let hits: Vec<_> = self
            .index
            .search(query, &self.config.search)
            .into_iter()
            .filter(|hit| !hit.doc.body.is_empty())
            .collect();

        let total = hits.len();
        tracing::debug!("Query '{}' matched {} documents", query, total);

        let terms = query_terms(std::slice::from_ref(&query));
        let items = hits
            .into_iter()
            .take(self.config.max_items)
            .map(|hit| ResultItem {
                title: ResultTitle::from_hit(&hit),
                teaser: self.extractor.extract(&hit.doc.body, &terms),
                href: hit.reference,
            })
            .collect();

        ResultsPanel {
            query: query.to_string(),
            visible: true,
            reset_visible: true,
            glossary,
            header: Some(ResultsPanel::header_for(query, total)),
            total,
            items,
        }
    }
}

/// Search-as-you-type: each keystroke reschedules the query, and only the
/// input present once typing pauses is searched.
pub struct LiveSearch<I, S = EnglishStemmer> {
    session: Arc<SearchSession<I, S>>,
    debouncer: Debouncer,
}

impl<I, S> LiveSearch<I, S>
where
    I: SearchIndex + Send + Sync + 'static,
    S: Stem + Send + Sync + 'static,
{
    pub fn new(session: SearchSession<I, S>) -> Self {
        let debouncer = Debouncer::new(session.config().debounce());
        Self {
            session: Arc::new(session),
            debouncer,
        }
    }

    /// The search box changed. Resolves to the panel for `input`, or `None`
    /// when a later keystroke superseded it.
    pub fn on_input(&mut self, input: impl Into<String>) -> JoinHandle<Option<ResultsPanel>> {
        let session = Arc::clone(&self.session);
        let input = input.into();
        self.debouncer.call(async move { session.run(&input) })
    }
}

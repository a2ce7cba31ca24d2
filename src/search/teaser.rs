//! Teaser extraction for search results.
//!
//! Every word of a document gets a weight: words matching a query term (stemmer
//! aware) score 40, the first word of a sentence scores 8, any other word scores 2.
//! A window holding a fixed number of words slides over the document, and the
//! window with the largest weight sum becomes the teaser.

use super::stem::{EnglishStemmer, Stem};
use ahash::AHashMap;

const TERM_WEIGHT: u32 = 40;
const FIRST_WORD_WEIGHT: u32 = 8;
const NORMAL_WORD_WEIGHT: u32 = 2;

/// Character budget the leading words of a document are measured against
/// to size the window.
const TEASER_MAX_CHARS: usize = 63;

const SENTENCE_DELIMITER: &str = ". ";

/// Appended to every windowed teaser.
pub const TRUNCATION_MARKER: &str = "???";

/// A document word with its score and byte offset into the original body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WeightedWord<'a> {
    text: &'a str,
    weight: u32,
    offset: usize,
}

impl WeightedWord<'_> {
    const fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Selects and reconstructs the most relevant excerpt of a document.
#[derive(Debug)]
pub struct TeaserExtractor<S = EnglishStemmer> {
    stemmer: S,
}

impl Default for TeaserExtractor {
    fn default() -> Self {
        Self::new(EnglishStemmer::default())
    }
}

impl<S: Stem> TeaserExtractor<S> {
    pub const fn new(stemmer: S) -> Self {
        Self { stemmer }
    }

    /// Extract the teaser for `body` given the user's query `terms`.
    ///
    /// Returns `body` unchanged when it has no words. Otherwise the excerpt is
    /// copied verbatim from `body` (original casing and spacing) and ends with
    /// [`TRUNCATION_MARKER`].
    pub fn extract<T: AsRef<str>>(&self, body: &str, terms: &[T]) -> String {
        let stemmed_terms: Vec<String> = terms
            .iter()
            .map(|term| {
                self.stemmer
                    .stem(&term.as_ref().to_lowercase())
                    .into_owned()
            })
            .collect();

        let (weighted, term_found) = self.weigh(body, &stemmed_terms);
        if weighted.is_empty() {
            return body.to_owned();
        }

        let size = window_size(&weighted);
        let sums = window_sums(&weighted, size);

        // Without any match the opening of the document is the best teaser
        let start = if term_found { best_window(&sums) } else { 0 };

        tracing::trace!(
            words = weighted.len(),
            window_size = size,
            start,
            term_found,
            "Selected teaser window"
        );

        reconstruct(body, &weighted[start..start + size])
    }

    /// Split `body` into sentences and words, scoring each non-empty word.
    ///
    /// Returns the weighted words in document order and whether any of them
    /// matched a query term.
    fn weigh<'a>(&self, body: &'a str, stemmed_terms: &[String]) -> (Vec<WeightedWord<'a>>, bool) {
        // Lower-cased word -> does it match any term
        let mut matches: AHashMap<String, bool> = AHashMap::new();
        let mut weighted = Vec::new();
        let mut term_found = false;
        let mut sentence_start = 0;

        for sentence in body.split(SENTENCE_DELIMITER) {
            let mut offset = sentence_start;
            let mut weight = FIRST_WORD_WEIGHT;

            for word in sentence.split(' ') {
                if !word.is_empty() {
                    let is_term = *matches
                        .entry(word.to_lowercase())
                        .or_insert_with_key(|lowered| {
                            let stem = self.stemmer.stem(lowered);
                            stemmed_terms
                                .iter()
                                .any(|term| stem.starts_with(term.as_str()))
                        });

                    if is_term {
                        weight = TERM_WEIGHT;
                        term_found = true;
                    }

                    weighted.push(WeightedWord {
                        text: word,
                        weight,
                        offset,
                    });
                    weight = NORMAL_WORD_WEIGHT;
                }

                // Word plus the following ' ' (or '.' for the last word of a sentence)
                offset += word.len() + 1;
            }

            sentence_start += sentence.len() + SENTENCE_DELIMITER.len();
        }

        (weighted, term_found)
    }
}

/// Split query terms into the words they contain.
///
/// Terms may carry padding or hold several words; blank terms yield nothing.
/// An empty term would match every word, so callers pass terms through this
/// before extraction.
pub fn query_terms<T: AsRef<str>>(terms: &[T]) -> Vec<&str> {
    terms.iter().flat_map(|term| term.as_ref().split_whitespace()).collect()
}

/// Extract a teaser using the English stemmer.
pub fn extract_teaser<T: AsRef<str>>(body: &str, terms: &[T]) -> String {
    TeaserExtractor::<EnglishStemmer>::default().extract(body, terms)
}

/// Number of leading words whose combined length fits [`TEASER_MAX_CHARS`].
///
/// Computed once per document; every window holds this many words.
fn window_size(weighted: &[WeightedWord<'_>]) -> usize {
    let mut chars = 0;
    weighted
        .iter()
        .take_while(|word| {
            chars += word.text.chars().count();
            chars <= TEASER_MAX_CHARS
        })
        .count()
}

/// Weight sum of every window of `size` words, indexed by start word.
fn window_sums(weighted: &[WeightedWord<'_>], size: usize) -> Vec<u32> {
    let mut sum: u32 = weighted[..size].iter().map(|word| word.weight).sum();
    let mut sums = Vec::with_capacity(weighted.len() - size + 1);
    sums.push(sum);

    for (dropped, added) in weighted.iter().zip(&weighted[size..]) {
        sum = sum + added.weight - dropped.weight;
        sums.push(sum);
    }

    sums
}

/// Start index of the highest-scoring window. Ties resolve to the earliest window.
fn best_window(sums: &[u32]) -> usize {
    let mut best = 0;
    let mut max = 0;
    for (index, &sum) in sums.iter().enumerate().rev() {
        if sum >= max {
            max = sum;
            best = index;
        }
    }
    best
}

/// Copy the window's words and the text between them out of the original body.
fn reconstruct(body: &str, window: &[WeightedWord<'_>]) -> String {
    let mut teaser = String::new();

    if let Some(first) = window.first() {
        let mut cursor = first.offset;
        for word in window {
            if cursor < word.offset {
                teaser.push_str(&body[cursor..word.offset]);
            }
            teaser.push_str(&body[word.offset..word.end()]);
            cursor = word.end();
        }
    }

    teaser.push_str(TRUNCATION_MARKER);
    teaser
}

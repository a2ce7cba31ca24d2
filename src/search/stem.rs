//! Stemming seam shared by query terms and document words.

use rust_stemmers::{Algorithm, Stemmer};
use std::borrow::Cow;

/// Reduces a lower-cased word to its root form.
///
/// Implementations must agree with the stemmer used when the site's search
/// index was built, otherwise teaser term matching drifts from result ranking.
pub trait Stem {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

/// Snowball English stemmer.
pub struct EnglishStemmer {
    inner: Stemmer,
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self {
            inner: Stemmer::create(Algorithm::English),
        }
    }
}

impl std::fmt::Debug for EnglishStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishStemmer").finish_non_exhaustive()
    }
}

impl Stem for EnglishStemmer {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.inner.stem(word)
    }
}

impl<S: Stem + ?Sized> Stem for &S {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        (**self).stem(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("foxes", "fox")]
    #[case("barked", "bark")]
    #[case("searching", "search")]
    #[case("fox", "fox")]
    fn test_english_stems(#[case] input: &str, #[case] expected: &str) {
        let stemmer = EnglishStemmer::default();
        check!(stemmer.stem(input) == expected);
    }

    fn stem_owned(stemmer: impl Stem, word: &str) -> String {
        stemmer.stem(word).into_owned()
    }

    #[test]
    fn test_stem_through_reference() {
        let stemmer = EnglishStemmer::default();
        check!(stem_owned(&stemmer, "plurals") == "plural");
    }
}

use assert2::check;
use rstest::rstest;
use site_search::search::{Stem, TRUNCATION_MARKER, TeaserExtractor, extract_teaser, query_terms};
use std::borrow::Cow;

const NO_TERMS: &[&str] = &[];

/// "Intro", twenty filler words, then a sentence mentioning the fox.
fn late_fox_body() -> String {
    format!("Intro {}. The Fox ran.", vec!["word"; 20].join(" "))
}

#[test]
fn empty_body_returns_empty() {
    check!(extract_teaser("", &["fox"]).is_empty());
    check!(extract_teaser("", NO_TERMS).is_empty());
}

#[rstest]
#[case("     ")]
#[case(" ")]
fn space_only_body_is_unchanged(#[case] body: &str) {
    check!(extract_teaser(body, &["fox"]) == body);
}

#[rstest]
#[case("The quick brown fox. The dog barked loudly at the fox.", &["fox"])]
#[case("One sentence only", &["missing"])]
#[case("Trailing period. ", &[])]
#[case(&late_fox_body(), &["fox"])]
fn windowed_output_ends_with_marker(#[case] body: &str, #[case] terms: &[&str]) {
    check!(extract_teaser(body, terms).ends_with(TRUNCATION_MARKER));
}

#[test]
fn end_to_end_example() {
    let body = "The quick brown fox. The dog barked loudly at the fox.";
    let teaser = extract_teaser(body, &["fox"]);
    check!(teaser.contains("fox"));
    check!(&teaser[teaser.len() - 3..] == "???");
    // Short enough to fit one window
    check!(teaser == format!("{body}???"));
}

#[test]
fn short_body_keeps_every_word() {
    let body = "Ships talk over Ames. Packets retry.";
    let teaser = extract_teaser(body, &["ames"]);
    check!(teaser.strip_suffix(TRUNCATION_MARKER) == Some(body));
}

#[test]
fn case_insensitive_term_match() {
    check!(extract_teaser("The Fox ran.", &["fox"]) == "The Fox ran.???");

    let body = late_fox_body();
    for terms in [["fox"], ["FOX"]] {
        let teaser = extract_teaser(&body, &terms);
        check!(teaser.ends_with("The Fox???"), "teaser: {}", teaser);
        check!(!teaser.starts_with("Intro"));
    }
}

#[test]
fn without_match_first_window_is_used() {
    let body = late_fox_body();
    check!(extract_teaser(&body, NO_TERMS).starts_with("Intro word"));
    check!(extract_teaser(&body, &["badger"]).starts_with("Intro word"));
}

#[test]
fn tie_picks_earliest_window() {
    let lorem = vec!["lorem"; 20].join(" ");
    let ipsum = vec!["ipsum"; 20].join(" ");
    let body = format!("fox {lorem} fox {ipsum}");

    let expected = format!("fox {}{}", vec!["lorem"; 12].join(" "), TRUNCATION_MARKER);
    check!(extract_teaser(&body, &["fox"]) == expected);
}

#[test]
fn stemmed_variants_match() {
    let body = format!("Intro {}. Several foxes ran.", vec!["word"; 20].join(" "));
    let teaser = extract_teaser(&body, &["fox"]);
    check!(teaser.contains("foxes"), "teaser: {}", teaser);
}

/// Leaves words as they are, so only literal prefixes match.
struct NoStem;

impl Stem for NoStem {
    fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(word)
    }
}

#[test]
fn custom_stemmer_matches_by_prefix() {
    let extractor = TeaserExtractor::new(NoStem);
    let body = format!("Intro {}. The networking vane.", vec!["word"; 20].join(" "));
    let teaser = extractor.extract(&body, &["net"]);
    check!(teaser.contains("networking"), "teaser: {}", teaser);
}

#[test]
fn padded_terms_give_same_excerpt_as_clean_terms() {
    let body = late_fox_body();
    let clean = extract_teaser(&body, &["fox"]);
    check!(clean.ends_with("The Fox???"));

    let padded = extract_teaser(&body, &query_terms(&["fox  ", "", " "]));
    check!(padded == clean);
}

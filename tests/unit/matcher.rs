//! Fingerprint extraction.

use crate::common::{fingerprint_of, GREEK, RESERVED};
use keyclique::testing::naive_fingerprint;
use keyclique::{KeywordIndex, PatternMatcher};

#[test]
fn fingerprint_lists_occurrences_in_text_order() {
    let index = KeywordIndex::new(RESERVED).unwrap();
    let matcher = PatternMatcher::new(&index);
    let text = b"while (x) { if (y) break; else return z; }";

    let fp = matcher.fingerprint(text);
    assert_eq!(index.describe(&fp), "while if break else return");
}

#[test]
fn matches_inside_identifiers_are_counted() {
    // Plain substring matching: "elsewhere" contains "else", "format" contains "for".
    let index = KeywordIndex::new(RESERVED).unwrap();
    let matcher = PatternMatcher::new(&index);

    let fp = matcher.fingerprint(b"elsewhere format");
    assert_eq!(index.describe(&fp), "else for");
}

#[test]
fn overlapping_occurrences_are_all_reported() {
    let index = KeywordIndex::new(["aba", "bab"]).unwrap();
    let matcher = PatternMatcher::new(&index);

    let fp = matcher.fingerprint(b"ababa");
    assert_eq!(fp, fingerprint_of(&index, &["aba", "bab", "aba"]));
}

#[test]
fn matching_is_case_sensitive() {
    let index = KeywordIndex::new(GREEK).unwrap();
    let matcher = PatternMatcher::new(&index);

    assert!(matcher.fingerprint(b"ALPHA Beta").is_empty());
    assert_eq!(matcher.fingerprint(b"ALPHA beta").len(), 1);
}

#[test]
fn text_shorter_than_every_keyword_is_empty() {
    let index = KeywordIndex::new(GREEK).unwrap();
    let matcher = PatternMatcher::new(&index);

    assert!(matcher.fingerprint(b"").is_empty());
    assert!(matcher.fingerprint(b"bet").is_empty());
}

#[test]
fn offsets_accompany_matches() {
    let index = KeywordIndex::new(GREEK).unwrap();
    let matcher = PatternMatcher::new(&index);
    let beta = index.code_of("beta").unwrap();
    let delta = index.code_of("delta").unwrap();

    assert_eq!(matcher.matches(b"xbeta delta"), vec![(1, beta), (6, delta)]);
}

#[test]
fn agrees_with_brute_force_on_source_code() {
    let index = KeywordIndex::new(RESERVED).unwrap();
    let matcher = PatternMatcher::new(&index);
    let text = br#"
        for (int i = 0; i < n; i++) {
            switch (a[i]) {
                case 1: continue;
                default: if (done) break; else return -1;
            }
        }
        while (forever) {}
    "#;

    assert_eq!(matcher.fingerprint(text), naive_fingerprint(&index, text));
}

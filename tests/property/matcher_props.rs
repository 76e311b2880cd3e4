//! Wu-Manber against brute force.

use proptest::prelude::*;

use super::strategies::{text, vocabulary};
use keyclique::testing::naive_fingerprint;
use keyclique::{KeywordIndex, PatternMatcher};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every occurrence, in start order, vocabulary order on ties.
    #[test]
    fn fingerprint_matches_brute_force(words in vocabulary(), text in text()) {
        let index = KeywordIndex::new(&words).unwrap();
        let matcher = PatternMatcher::new(&index);

        prop_assert_eq!(matcher.fingerprint(&text), naive_fingerprint(&index, &text));
    }

    #[test]
    fn fingerprint_is_deterministic(words in vocabulary(), text in text()) {
        let index = KeywordIndex::new(&words).unwrap();
        let first = PatternMatcher::new(&index).fingerprint(&text);
        let second = PatternMatcher::new(&index).fingerprint(&text);

        prop_assert_eq!(first, second);
    }

    /// Offsets point at the keyword they claim, and never go backwards.
    #[test]
    fn offsets_are_sorted_and_accurate(words in vocabulary(), text in text()) {
        let index = KeywordIndex::new(&words).unwrap();
        let matches = PatternMatcher::new(&index).matches(&text);

        for pair in matches.windows(2) {
            prop_assert!(pair[0].0 <= pair[1].0);
        }
        for (start, code) in matches {
            let keyword = index.keyword(code).unwrap();
            prop_assert!(text[start..].starts_with(keyword));
        }
    }
}

//! Suffix-tree comparison against dynamic programming.

use proptest::prelude::*;

use super::strategies::{fingerprint, weighted_index};
use keyclique::testing::{naive_common_run_weight, naive_longest_common_run};
use keyclique::{meets_threshold, Fingerprint, SimilarityOracle};

const VOCAB: usize = 6;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn common_run_length_matches_dp(a in fingerprint(VOCAB, 40), b in fingerprint(VOCAB, 40)) {
        let index = weighted_index(VOCAB);
        let run = SimilarityOracle::new(&index).common_run(&a, &b);

        prop_assert_eq!(run.len(), naive_longest_common_run(&a, &b));
    }

    /// Among runs of maximal length, the heaviest is chosen.
    #[test]
    fn common_run_weight_matches_dp(a in fingerprint(VOCAB, 40), b in fingerprint(VOCAB, 40)) {
        let index = weighted_index(VOCAB);
        let run = SimilarityOracle::new(&index).common_run(&a, &b);

        prop_assert_eq!(run.weight, naive_common_run_weight(&a, &b, |c| index.byte_len(c)));
        prop_assert_eq!(run.weight, index.weighted_len(&run.codes));
    }

    #[test]
    fn common_run_occurs_in_both(a in fingerprint(VOCAB, 40), b in fingerprint(VOCAB, 40)) {
        let index = weighted_index(VOCAB);
        let run = SimilarityOracle::new(&index).common_run(&a, &b);

        if !run.is_empty() {
            prop_assert!(a.windows(run.len()).any(|w| w == run.codes.as_slice()));
            prop_assert!(b.windows(run.len()).any(|w| w == run.codes.as_slice()));
        }
    }

    #[test]
    fn comparison_is_symmetric(a in fingerprint(VOCAB, 40), b in fingerprint(VOCAB, 40)) {
        let index = weighted_index(VOCAB);
        let oracle = SimilarityOracle::new(&index);

        prop_assert_eq!(oracle.compare(&a, &b), oracle.compare(&b, &a));
        prop_assert_eq!(oracle.common_run(&a, &b), oracle.common_run(&b, &a));
    }

    /// The decision is exactly the threshold rule over the DP answer.
    #[test]
    fn decision_follows_threshold(a in fingerprint(VOCAB, 40), b in fingerprint(VOCAB, 40)) {
        let index = weighted_index(VOCAB);
        let oracle = SimilarityOracle::new(&index);
        let smaller = index.weighted_len(&a).min(index.weighted_len(&b));
        let common = naive_common_run_weight(&a, &b, |c| index.byte_len(c));

        prop_assert_eq!(oracle.is_similar(&a, &b), meets_threshold(common, smaller));
    }

    #[test]
    fn weighted_length_is_additive(a in fingerprint(VOCAB, 40), b in fingerprint(VOCAB, 40)) {
        let index = weighted_index(VOCAB);
        let oracle = SimilarityOracle::new(&index);
        let joined: Fingerprint = a.iter().chain(b.iter()).copied().collect();

        prop_assert_eq!(
            oracle.weighted_length(&joined),
            oracle.weighted_length(&a) + oracle.weighted_length(&b)
        );
    }

    #[test]
    fn nonempty_fingerprint_is_similar_to_itself(a in fingerprint(VOCAB, 40)) {
        let index = weighted_index(VOCAB);
        let oracle = SimilarityOracle::new(&index);

        prop_assert_eq!(oracle.is_similar(&a, &a), !a.is_empty());
    }
}

//! Shared generators.

use proptest::prelude::*;

use keyclique::{Fingerprint, KeywordCode, KeywordIndex};

/// Distinct short keywords over a tiny alphabet, so matches are frequent.
pub fn vocabulary() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[abc]{1,4}", 1..8).prop_map(|set| set.into_iter().collect())
}

/// Text over the same alphabet plus a separator byte.
pub fn text() -> impl Strategy<Value = Vec<u8>> {
    "[abc ]{0,80}".prop_map(String::into_bytes)
}

/// Vocabulary with a fixed size and byte lengths 1..=9.
pub fn weighted_index(size: usize) -> KeywordIndex {
    let words: Vec<String> = (0..size)
        .map(|i| std::iter::repeat_n(char::from(b'a' + i as u8), i % 9 + 1).collect())
        .collect();
    KeywordIndex::new(&words).expect("valid vocabulary")
}

/// Fingerprint over the first `size` codes. Small `size` keeps shared runs likely.
pub fn fingerprint(size: usize, max_len: usize) -> impl Strategy<Value = Fingerprint> {
    prop::collection::vec(0..size, 0..max_len).prop_map(|positions| {
        positions
            .into_iter()
            .filter_map(KeywordCode::from_position)
            .collect()
    })
}

/// Symmetric adjacency matrix with an empty diagonal.
pub fn adjacency(max_vertices: usize) -> impl Strategy<Value = Vec<Vec<bool>>> {
    (1..=max_vertices).prop_flat_map(|n| {
        prop::collection::vec(any::<bool>(), n * n).prop_map(move |bits| {
            let mut m = vec![vec![false; n]; n];
            for a in 0..n {
                for b in a + 1..n {
                    let edge = bits[a * n + b];
                    m[a][b] = edge;
                    m[b][a] = edge;
                }
            }
            m
        })
    })
}

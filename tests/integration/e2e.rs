//! End-to-end runs of the finder.

use crate::common::{Workspace, GREEK, RESERVED};
use keyclique::run;

#[test]
fn two_related_documents_out_of_three() {
    let ws = Workspace::new();
    let doc1 = ws.document("doc1.txt", "alpha beta gamma text filler");
    let doc2 = ws.document("doc2.txt", "filler alpha beta gamma more");
    let doc3 = ws.document("doc3.txt", "nothing to see here");
    let config = ws.config(&[&doc1, &doc2, &doc3], &["alpha", "beta", "gamma"]);

    let report = run(&config).unwrap();

    assert_eq!(ws.output_lines(), vec![doc1, doc2]);
    assert_eq!(report.stats.documents, 3);
    assert_eq!(report.stats.comparisons, 2);
    assert_eq!(report.stats.matches, 1);
}

#[test]
fn keyword_broken_across_lines_still_matches() {
    let ws = Workspace::new();
    let doc1 = ws.document("doc1.txt", "ret\nurn x;\r\nwhile (y) {}\n");
    let doc2 = ws.document("doc2.txt", "return x; while (y) {}");
    let config = ws.config(&[&doc1, &doc2], &RESERVED);

    run(&config).unwrap();
    assert_eq!(ws.output_lines(), vec![doc1, doc2]);
}

#[test]
fn pivot_alone_when_nothing_resembles_it() {
    let ws = Workspace::new();
    let pivot = ws.document("pivot.txt", "alpha alpha alpha alpha alpha");
    let a = ws.document("a.txt", "gamma delta epsilon");
    let b = ws.document("b.txt", "gamma delta epsilon");
    let config = ws.config(&[&pivot, &a, &b], &GREEK);

    let report = run(&config).unwrap();

    // a and b are similar to each other, but never to the pivot, so they are
    // never considered.
    assert_eq!(ws.output_lines(), vec![pivot]);
    assert_eq!(report.vertices, 1);
    assert_eq!(report.stats.comparisons, 2);
}

#[test]
fn unrelated_document_is_left_out_of_the_group() {
    let ws = Workspace::new();
    let shared = "if (a) return b; else while (c) break;";
    let pivot = ws.document("p.txt", shared);
    let x = ws.document("x.txt", &format!("// header\n{shared}"));
    let odd = ws.document("odd.txt", "switch (q) { case 1: default: continue; }");
    let y = ws.document("y.txt", &format!("{shared}\n// footer"));
    let config = ws.config(&[&pivot, &x, &odd, &y], &RESERVED);

    let report = run(&config).unwrap();

    assert_eq!(ws.output_lines(), vec![pivot, x, y]);
    assert!(!report.clique.contains(&odd));
    // p-x, p-odd, p-y, then y-x once three vertices exist
    assert_eq!(report.stats.comparisons, 4);
}

#[test]
fn unreadable_document_only_loses_itself() {
    let ws = Workspace::new();
    let doc1 = ws.document("doc1.txt", "alpha beta gamma");
    let missing = ws.path("missing.txt").display().to_string();
    let doc2 = ws.document("doc2.txt", "alpha beta gamma");
    let config = ws.config(&[&doc1, &missing, &doc2], &["alpha", "beta", "gamma"]);

    let report = run(&config).unwrap();

    assert_eq!(ws.output_lines(), vec![doc1, doc2]);
    assert!(!report.clique.contains(&missing));
}

#[test]
fn empty_document_list_writes_empty_output() {
    let ws = Workspace::new();
    let config = ws.config(&[], &GREEK);

    let report = run(&config).unwrap();

    assert!(report.clique.is_empty());
    assert!(ws.output_lines().is_empty());
}

#[test]
fn listing_a_document_twice_does_not_duplicate_it() {
    let ws = Workspace::new();
    let doc1 = ws.document("doc1.txt", "alpha beta gamma");
    let doc2 = ws.document("doc2.txt", "alpha beta gamma");
    let config = ws.config(&[&doc1, &doc2, &doc2], &GREEK);

    run(&config).unwrap();
    assert_eq!(ws.output_lines(), vec![doc1, doc2]);
}

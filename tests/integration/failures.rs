//! Fatal errors: what stops a run and how it is reported.

use std::fs;

use crate::common::Workspace;
use keyclique::config::MAX_KEYWORDS;
use keyclique::{run, ConfigError, Error, FinderConfig};

#[test]
fn too_many_keywords_is_a_config_error() {
    let ws = Workspace::new();
    let doc = ws.document("doc.txt", "anything");
    let words: Vec<String> = (0..=MAX_KEYWORDS).map(|i| format!("word{i}")).collect();
    let words: Vec<&str> = words.iter().map(String::as_str).collect();
    let config = ws.config(&[&doc], &words);

    let err = run(&config).unwrap_err();

    assert!(err.is_config());
    assert!(matches!(
        err,
        Error::Config(ConfigError::TooManyKeywords { found, .. }) if found == MAX_KEYWORDS + 1
    ));
    assert!(err.to_string().contains("keyword limit overrun"));
    assert!(!ws.path("vystup.txt").exists());
}

#[test]
fn empty_keyword_list_is_a_config_error() {
    let ws = Workspace::new();
    let doc = ws.document("doc.txt", "anything");
    let config = ws.config(&[&doc], &[]);

    assert!(matches!(
        run(&config).unwrap_err(),
        Error::Config(ConfigError::NoKeywords)
    ));
}

#[test]
fn missing_document_list_is_an_io_error() {
    let ws = Workspace::new();
    let config = FinderConfig {
        input: ws.path("absent.txt"),
        keywords: ws.list("kslova.txt", &["alpha"]),
        output: ws.path("vystup.txt"),
    };

    let err = run(&config).unwrap_err();

    assert!(!err.is_config());
    assert!(matches!(&err, Error::Io { path, .. } if path == &ws.path("absent.txt")));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn missing_keyword_list_is_an_io_error() {
    let ws = Workspace::new();
    let config = FinderConfig {
        input: ws.list("vstup.txt", &[]),
        keywords: ws.path("absent.txt"),
        output: ws.path("vystup.txt"),
    };

    assert!(!run(&config).unwrap_err().is_config());
}

#[test]
fn unwritable_output_is_an_io_error() {
    let ws = Workspace::new();
    let doc = ws.document("doc.txt", "alpha");
    let mut config = ws.config(&[&doc], &["alpha"]);
    let blocker = ws.path("blocker");
    fs::write(&blocker, "").unwrap();
    config.output = blocker.join("vystup.txt");

    let err = run(&config).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

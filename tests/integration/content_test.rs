//! Integration tests for site content loading

use folio::content::{ContentError, Site};

use crate::helpers::write_site;

#[test]
fn partial_site_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_site(
        dir.path(),
        r#"
name = "Grace"
phrases = ["Hello", "Bonjour"]
"#,
    );

    let site = Site::load(&path).unwrap();
    assert_eq!(site.name, "Grace");
    assert_eq!(site.phrases, vec!["Hello", "Bonjour"]);
    assert_eq!(site.projects, Site::default().projects);
}

#[test]
fn custom_stats_and_skills() {
    let site = Site::from_toml(
        r#"
[[stats]]
label = "Talks"
count = " 12 "

[[skills]]
title = "Systems"
items = [
    { name = "Rust", level = 95 },
    { name = "C", level = 70, delay_ms = 400 },
]
"#,
    )
    .unwrap();

    assert_eq!(site.stat_targets().unwrap(), vec![12]);
    assert_eq!(site.skills[0].items[0].delay_ms, None);
    assert_eq!(
        site.skills[0].delay_overrides(),
        vec![None, Some(std::time::Duration::from_millis(400))]
    );
}

#[test]
fn empty_phrase_list_is_rejected() {
    let err = Site::from_toml("phrases = []\n").unwrap_err();
    assert!(matches!(err, ContentError::NoPhrases));
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    let err = Site::load(&path).unwrap_err();
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn malformed_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_site(dir.path(), "name = \n");
    let err = Site::load(&path).unwrap_err();
    assert!(matches!(err, ContentError::Parse { .. }));
    assert!(err.to_string().contains("site.toml"));
}

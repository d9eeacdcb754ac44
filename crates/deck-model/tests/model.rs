//! Tests for deck-model types and deck loading.

use std::fs;
use std::path::{Path, PathBuf};

use deck_model::{DeckError, Slide, SlideKind, load_deck};

fn decks_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../decks")
}

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "slidedeck-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

#[test]
fn loads_json_fixture() {
    let deck = load_deck(&decks_dir().join("part1_introduction.json")).expect("load deck");

    assert_eq!(deck.name(), "Part1_Introduction_Motivation");
    assert_eq!(deck.label(), Some("Part 1: Introduction & Motivation"));
    assert_eq!(deck.theme(), Some("blue"));
    assert_eq!(deck.len(), 8);
    assert!(deck.unknown_slides().is_empty());

    let kinds: Vec<&str> = deck.iter().map(Slide::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "title",
            "overview",
            "objectives",
            "caseStudy",
            "foundation",
            "comparison",
            "summary",
            "reflection"
        ]
    );
    assert_eq!(
        deck.get(0).map(Slide::heading),
        Some("Data Collection, Sampling & Synthetic Data")
    );
}

#[test]
fn loads_toml_fixture_with_unknown_slide() {
    let deck = load_deck(&decks_dir().join("part6_techniques.toml")).expect("load deck");

    assert_eq!(deck.len(), 5);
    assert_eq!(deck.theme(), Some("sky"));
    let unknown = deck.unknown_slides();
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].index, 4);
    assert_eq!(unknown[0].kind, "labExercise");
    assert!(unknown[0].problem.is_none());

    let Some(Slide::Technique(technique)) = deck.get(2) else {
        panic!("expected a technique slide at index 2");
    };
    assert_eq!(technique.properties.get("fidelity").map(String::as_str), Some("Medium"));
    assert_eq!(technique.example.len(), 2);
    assert_eq!(technique.advantages, vec!["Fast", "Interpretable"]);
}

#[test]
fn name_defaults_to_file_stem() {
    let dir = unique_temp_dir("stem");
    let path = dir.join("Part4_Challenges.json");
    write(
        &path,
        r#"[{"type": "title", "content": {"title": "Challenges & Mitigation"}}]"#,
    );

    let deck = load_deck(&path).expect("load deck");

    assert_eq!(deck.name(), "Part4_Challenges");
    assert_eq!(deck.export_file_name(), "Part4_Challenges.html");
    assert_eq!(deck.get(0).and_then(Slide::known_kind), Some(SlideKind::Title));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = unique_temp_dir("ext");
    let path = dir.join("deck.yaml");
    write(&path, "slides: []");

    let error = load_deck(&path).unwrap_err();
    assert!(matches!(error, DeckError::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_reports_path() {
    let path = decks_dir().join("does_not_exist.json");
    let error = load_deck(&path).unwrap_err();
    assert!(matches!(error, DeckError::Io { .. }));
    assert!(error.to_string().contains("does_not_exist.json"));
}

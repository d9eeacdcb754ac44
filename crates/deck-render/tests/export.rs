//! Export documents parsed back with an XML reader.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use deck_model::{load_deck, parse_json_deck};
use deck_render::{
    ExportOptions, INDEX_FILE_NAME, IndexEntry, RendererRegistry, SlideHandler, Theme, View,
    export_html, export_html_with, export_index, export_to_file, text_el,
};
use quick_xml::Reader;
use quick_xml::events::Event;

fn decks_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../decks")
}

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}-{}-{nanos}", std::process::id()))
}

fn entity(name: &[u8]) -> char {
    match name {
        b"amp" => '&',
        b"lt" => '<',
        b"gt" => '>',
        b"quot" => '"',
        b"apos" => '\'',
        other => panic!("unexpected entity {}", String::from_utf8_lossy(other)),
    }
}

/// Leading `<h1>` text of every `<section>`, in document order.
fn section_headings(html: &str) -> Vec<String> {
    let mut reader = Reader::from_str(html);
    let mut headings = Vec::new();
    let mut expect_heading = false;
    let mut current: Option<String> = None;
    loop {
        match reader.read_event().expect("well-formed export") {
            Event::Start(start) if start.name().as_ref() == b"section" => expect_heading = true,
            Event::Start(start) if start.name().as_ref() == b"h1" && expect_heading => {
                current = Some(String::new());
            }
            Event::Start(_) => expect_heading = false,
            Event::Text(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.push_str(&String::from_utf8_lossy(&text));
                }
            }
            Event::GeneralRef(reference) => {
                if let Some(heading) = current.as_mut() {
                    heading.push(entity(&reference));
                }
            }
            Event::End(end) if end.name().as_ref() == b"h1" => {
                if let Some(heading) = current.take() {
                    headings.push(heading);
                    expect_heading = false;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    headings
}

#[test]
fn three_slide_deck_yields_three_sections() {
    let deck = parse_json_deck(
        r#"{
            "name": "Part1_Introduction_Motivation",
            "slides": [
                {"type": "title", "content": {"title": "Data Collection, Sampling & Synthetic Data", "subtitle": "Level 7"}},
                {"type": "overview", "title": "Session Overview", "topics": ["Why data matters"]},
                {"type": "comparison", "title": "Real vs <Synthetic>", "headers": ["Aspect", "Real"], "rows": [["Cost", "High"]]}
            ]
        }"#,
    )
    .unwrap();
    let html = export_html(&deck, &ExportOptions::default()).unwrap();
    assert_eq!(
        section_headings(&html),
        [
            "Data Collection, Sampling & Synthetic Data",
            "Session Overview",
            "Real vs <Synthetic>",
        ]
    );
}

#[test]
fn fixture_exports_every_slide_in_order() {
    for name in ["part1_introduction.json", "part6_techniques.toml"] {
        let deck = load_deck(&decks_dir().join(name)).unwrap();
        let html = export_html(&deck, &ExportOptions::default()).unwrap();
        let expected: Vec<String> = deck
            .iter()
            .map(|slide| match slide.heading() {
                "" => "Slide".to_string(),
                heading => heading.to_string(),
            })
            .collect();
        assert_eq!(section_headings(&html), expected, "{name}");
    }
}

#[test]
fn unknown_slide_gets_minimal_section() {
    let deck = parse_json_deck(
        r#"[{"type": "labExercise", "duration": "20 min"}, {"type": "quiz", "title": "Check"}]"#,
    )
    .unwrap();
    let html = export_html(&deck, &ExportOptions::default()).unwrap();
    assert_eq!(section_headings(&html), ["Slide", "Check"]);
    assert!(html.contains("Content for labExercise"));
    assert!(html.contains("Content for quiz"));
}

struct LabTime;

impl SlideHandler for LabTime {
    fn view(&self, slide: &deck_model::UnknownSlide, _theme: &Theme) -> View {
        self.export(slide)
    }

    fn export(&self, slide: &deck_model::UnknownSlide) -> View {
        text_el("p", format!("Lab time: {}", slide.field_str("duration").unwrap_or("?"))).into()
    }
}

#[test]
fn registered_handler_fills_export_section() {
    let deck = parse_json_deck(r#"[{"type": "labExercise", "title": "Lab", "duration": "20 min"}]"#)
        .unwrap();
    let registry = RendererRegistry::new().with("labExercise", LabTime);
    let html = export_html_with(&deck, &ExportOptions::default(), &registry).unwrap();
    assert_eq!(section_headings(&html), ["Lab"]);
    assert!(html.contains("Lab time: 20 min"));
    assert!(!html.contains("Content for"));
}

#[test]
fn malformed_builtin_slide_keeps_its_fallback() {
    let deck = parse_json_deck(r#"[{"type": "reflection", "title": "Q", "questions": 3}]"#).unwrap();
    let registry = RendererRegistry::new().with("reflection", LabTime);
    let html = export_html_with(&deck, &ExportOptions::default(), &registry).unwrap();
    assert_eq!(section_headings(&html), ["Q"]);
    assert!(html.contains("Content for reflection"));
    assert!(!html.contains("Lab time"));
}

#[test]
fn empty_deck_exports_empty_body() {
    let deck = parse_json_deck("[]").unwrap();
    let html = export_html(&deck, &ExportOptions::default()).unwrap();
    assert!(section_headings(&html).is_empty());
    assert!(html.contains("<body>"));
    assert!(!html.contains("<section"));
}

#[test]
fn export_to_file_and_index() {
    let dir = unique_temp_dir("deck-render-export");
    let deck = load_deck(&decks_dir().join("part1_introduction.json")).unwrap();
    let options = ExportOptions::new().with_theme(Theme::named("emerald"));
    let path = export_to_file(&deck, &dir, &options).unwrap();
    assert_eq!(path, dir.join("Part1_Introduction_Motivation.html"));
    let html = fs::read_to_string(&path).unwrap();
    assert_eq!(section_headings(&html).len(), deck.len());
    assert!(html.contains("#059669"));

    let index = export_index(&[IndexEntry::for_deck(&deck)], &dir, &Theme::default()).unwrap();
    assert_eq!(index, dir.join(INDEX_FILE_NAME));
    let page = fs::read_to_string(&index).unwrap();
    assert!(page.contains(r#"href="Part1_Introduction_Motivation.html""#));
    assert!(page.contains("8 slides across 1 deck"));

    fs::remove_dir_all(&dir).unwrap();
}

//! Interactive renderer against the fixture decks.

use std::path::PathBuf;

use deck_model::{
    Deck, KeyPoint, Navigator, Slide, SummarySlide, UnknownSlide, load_deck, parse_json_deck,
};
use deck_render::{
    RendererRegistry, SlideHandler, Theme, View, el, render_frame, render_slide,
    render_slide_with, text_el,
};
use proptest::prelude::*;

fn decks_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../decks")
}

fn fixture_decks() -> Vec<Deck> {
    ["part1_introduction.json", "part6_techniques.toml"]
        .iter()
        .map(|name| load_deck(&decks_dir().join(name)).expect("load fixture deck"))
        .collect()
}

#[test]
fn every_slide_shows_its_heading() {
    for deck in fixture_decks() {
        let theme = Theme::resolve(None, deck.theme());
        for (index, slide) in deck.iter().enumerate() {
            let view = render_slide(slide, &theme);
            let heading = view.first_heading().expect("slide has an h1");
            if slide.is_known() {
                assert_eq!(heading, slide.heading(), "{} slide {index}", deck.name());
            }
            assert!(
                view.text_content().contains(slide.heading()),
                "{} slide {index}",
                deck.name()
            );
            assert!(!view.to_html().unwrap().is_empty());
        }
    }
}

#[test]
fn unknown_fixture_slide_falls_back() {
    let deck = load_deck(&decks_dir().join("part6_techniques.toml")).unwrap();
    let view = render_slide(&deck.slides()[4], &Theme::named("sky"));
    let text = view.to_text();
    assert!(text.contains("Slide type not implemented: labExercise"));
    assert!(!text.trim().is_empty());
}

struct LabHandler;

impl SlideHandler for LabHandler {
    fn view(&self, slide: &UnknownSlide, _theme: &Theme) -> View {
        el("div")
            .class("lab")
            .child(text_el("p", slide.field_str("duration").unwrap_or("untimed")))
            .into()
    }

    fn export(&self, slide: &UnknownSlide) -> View {
        text_el("p", slide.field_str("duration").unwrap_or("untimed")).into()
    }
}

#[test]
fn registry_handles_custom_tags() {
    let deck = load_deck(&decks_dir().join("part6_techniques.toml")).unwrap();
    let registry = RendererRegistry::new().with("labExercise", LabHandler);
    let view = render_slide_with(&deck.slides()[4], &Theme::default(), &registry);
    let text = view.text_content();
    assert!(!text.contains("not implemented"));
    assert_eq!(view.first_heading(), Some(deck.slides()[4].heading().to_string()));
    assert_eq!(view.find_all("h1").len(), 1);
}

#[test]
fn registry_tags_ignore_case() {
    let deck = parse_json_deck(r#"[{"type": "LABEXERCISE", "title": "Lab", "duration": "20 min"}]"#)
        .unwrap();
    let registry = RendererRegistry::new().with("labExercise", LabHandler);
    let text = render_slide_with(&deck.slides()[0], &Theme::default(), &registry).text_content();
    assert!(text.contains("20 min"));
    assert!(!text.contains("not implemented"));
}

#[test]
fn registry_cannot_claim_malformed_builtin_slide() {
    let deck = parse_json_deck(r#"[{"type": "reflection", "title": "Q", "questions": 3}]"#).unwrap();
    let registry = RendererRegistry::new().with("reflection", LabHandler);
    let view = render_slide_with(&deck.slides()[0], &Theme::default(), &registry);
    assert_eq!(view.first_heading(), Some("Q".to_string()));
    let text = view.text_content();
    assert!(text.contains("Slide type not implemented: reflection"));
    assert!(text.contains("Invalid slide fields:"));
    assert!(!text.contains("untimed"));
}

#[test]
fn summary_frame_text() {
    let summary = Slide::Summary(SummarySlide {
        title: "Part 1 Summary".to_string(),
        key_points: vec![
            KeyPoint {
                point: "Quality".to_string(),
                detail: "matters more than volume".to_string(),
            },
            KeyPoint {
                point: "Bias".to_string(),
                detail: "starts at collection".to_string(),
            },
        ],
        transition: Some("Next: Sampling Strategies".to_string()),
    });
    let deck = Deck::new("part1", vec![summary.clone(), summary])
        .with_label("Part 1: Introduction & Motivation");
    let view = render_frame(&deck, &Navigator::new(deck.len()), &Theme::default());
    insta::assert_snapshot!(view.to_text());
}

proptest! {
    #[test]
    fn html_heading_survives_escaping(title in "[A-Za-z0-9 &<>'\"!?.,:-]{1,40}") {
        let slide = Slide::Summary(SummarySlide {
            title: title.clone(),
            ..Default::default()
        });
        let view = render_slide(&slide, &Theme::default());
        prop_assert_eq!(view.first_heading(), Some(title.clone()));
        let html = view.to_html().unwrap();
        prop_assert_eq!(html.matches("<h1>").count(), 1);
        prop_assert_eq!(html.matches("</h1>").count(), 1);
    }
}

//! Static export: one standalone HTML document per deck.

use std::io::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use deck_model::{Deck, Slide};
use quick_xml::Writer;
use tracing::debug;

use crate::error::Result;
use crate::layout::{heading_or_default, slide_body};
use crate::registry::RendererRegistry;
use crate::theme::Theme;
use crate::view::{Element, View, el, text_el};

/// Value of the generator `<meta>` tag.
pub const GENERATOR: &str = concat!("deck-render ", env!("CARGO_PKG_VERSION"));

/// Options for export output.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Overrides the deck's own theme.
    pub theme: Option<Theme>,
    /// Written as a `generated` meta tag when set.
    pub generated_at: Option<DateTime<Utc>>,
    /// Write a `generator` meta tag.
    pub include_generator: bool,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    #[must_use]
    pub fn with_generator(mut self) -> Self {
        self.include_generator = true;
        self
    }

    /// The override theme, else the deck's, else the default.
    pub fn theme_for(&self, deck: &Deck) -> Theme {
        self.theme
            .unwrap_or_else(|| Theme::resolve(None, deck.theme()))
    }

    fn head_meta(&self) -> Vec<Element> {
        let mut meta = Vec::new();
        if self.include_generator {
            meta.push(named_meta("generator", GENERATOR));
        }
        if let Some(generated_at) = self.generated_at {
            meta.push(named_meta(
                "generated",
                generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }
        meta
    }
}

fn named_meta(name: &str, content: impl Into<String>) -> Element {
    el("meta").attr("name", name).attr("content", content)
}

/// Export section for the slide at `index` (0-based).
///
/// Always opens with an `<h1>` holding the slide heading.
pub fn export_section(index: usize, slide: &Slide, registry: &RendererRegistry) -> View {
    let section = el("section")
        .class("slide")
        .attr("id", format!("slide-{}", index + 1))
        .attr("data-kind", slide.kind());
    if let Some(body) = slide_body(slide) {
        return section
            .child(text_el("h1", slide.heading()))
            .children(body)
            .into();
    }
    let section = section.child(text_el("h1", heading_or_default(slide)));
    let Slide::Unknown(unknown) = slide else {
        return section.into();
    };
    match registry.handler_for(unknown) {
        Some(handler) => section.child(handler.export(unknown)).into(),
        None => section
            .child(text_el("p", format!("Content for {}", unknown.kind)))
            .into(),
    }
}

/// Export with the built-in layouts only.
pub fn export_html(deck: &Deck, options: &ExportOptions) -> Result<String> {
    export_html_with(deck, options, &RendererRegistry::new())
}

pub fn export_html_with(
    deck: &Deck,
    options: &ExportOptions,
    registry: &RendererRegistry,
) -> Result<String> {
    let mut buffer = Vec::new();
    write_export(deck, options, registry, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the export document for `deck` to `writer`.
///
/// The body holds one `<section class="slide">` per slide in deck order.
pub fn write_export<W: Write>(
    deck: &Deck,
    options: &ExportOptions,
    registry: &RendererRegistry,
    writer: W,
) -> Result<()> {
    let theme = options.theme_for(deck);
    let sections = deck
        .iter()
        .enumerate()
        .map(|(index, slide)| export_section(index, slide, registry));
    let body = el("body").children(sections);
    write_document(deck.display_name(), &theme, options.head_meta(), body, writer)?;
    debug!(
        deck = %deck.name(),
        slide_count = deck.len(),
        theme = %theme,
        "deck export rendered"
    );
    Ok(())
}

/// Doctype, `<head>` with the theme stylesheet, then `body`.
pub(crate) fn write_document<W: Write>(
    title: &str,
    theme: &Theme,
    meta: Vec<Element>,
    body: Element,
    writer: W,
) -> Result<()> {
    let head = el("head")
        .child(el("meta").attr("charset", "UTF-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(text_el("title", title))
        .children(meta)
        .child(text_el("style", theme.stylesheet()));
    let html: View = el("html").attr("lang", "en").child(head).child(body).into();

    let mut xml = Writer::new_with_indent(writer, b' ', 2);
    xml.get_mut().write_all(b"<!DOCTYPE html>\n")?;
    html.write_html(&mut xml)?;
    let mut writer = xml.into_inner();
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use deck_model::parse_json_deck;

    #[test]
    fn document_head_and_sections() {
        let deck = parse_json_deck(
            r#"{
                "name": "part2",
                "label": "Part 2: Sampling",
                "theme": "red",
                "slides": [
                    {"type": "reflection", "title": "Why sample?", "questions": ["How?"]},
                    {"type": "quiz", "title": "Pop Quiz"}
                ]
            }"#,
        )
        .unwrap();
        let stamp = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let options = ExportOptions::new().with_generator().with_timestamp(stamp);
        let html = export_html(&deck, &options).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Part 2: Sampling</title>"));
        assert!(html.contains(GENERATOR));
        assert!(html.contains("2026-03-01T09:30:00Z"));
        assert!(html.contains("#dc2626"));
        assert_eq!(html.matches("<section class=\"slide\"").count(), 2);
        assert!(html.contains("Content for quiz"));
    }

    #[test]
    fn no_timestamp_by_default() {
        let deck = parse_json_deck(r#"[{"type": "summary", "title": "Wrap-up"}]"#).unwrap();
        let html = export_html(&deck, &ExportOptions::default()).unwrap();
        assert!(!html.contains("name=\"generated\""));
        assert!(!html.contains("name=\"generator\""));
        assert!(html.contains("#2563eb"));
    }

    #[test]
    fn section_ids_follow_deck_order() {
        let deck = parse_json_deck(
            r#"[{"type": "summary", "title": "A"}, {"type": "summary", "title": "B"}]"#,
        )
        .unwrap();
        let registry = RendererRegistry::new();
        let second = export_section(1, &deck.slides()[1], &registry);
        let section = second.as_element().unwrap();
        assert_eq!(section.attr_value("id"), Some("slide-2"));
        assert_eq!(section.attr_value("data-kind"), Some("summary"));
        assert_eq!(second.first_heading().as_deref(), Some("B"));
    }
}

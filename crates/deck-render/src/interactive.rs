//! Interactive view of one slide at a time.

use deck_model::{Deck, Navigator, Slide, UnknownSlide};

use crate::layout::{heading_or_default, slide_body};
use crate::registry::RendererRegistry;
use crate::theme::Theme;
use crate::view::{Element, View, el, text_el};

/// Render one slide with the built-in layouts only.
pub fn render_slide(slide: &Slide, theme: &Theme) -> View {
    render_slide_with(slide, theme, &RendererRegistry::new())
}

/// Render one slide, consulting `registry` for tags without a built-in layout.
///
/// The first `h1` of the result is the slide heading. Slides nobody can
/// render produce a marked placeholder instead of failing.
pub fn render_slide_with(slide: &Slide, theme: &Theme, registry: &RendererRegistry) -> View {
    let root = el("div").class(format!(
        "slide-view slide-{} theme-{}",
        slide.kind(),
        theme.name
    ));
    if let Some(body) = slide_body(slide) {
        return root
            .child(text_el("h1", slide.heading()))
            .children(body)
            .into();
    }
    let Slide::Unknown(unknown) = slide else {
        return root.into();
    };
    match registry.handler_for(unknown) {
        Some(handler) => root
            .child(text_el("h1", heading_or_default(slide)))
            .child(handler.view(unknown, theme))
            .into(),
        None => fallback(root, slide, unknown).into(),
    }
}

fn fallback(root: Element, slide: &Slide, unknown: &UnknownSlide) -> Element {
    let problem = unknown
        .problem
        .as_ref()
        .map(|problem| text_el("p", format!("Invalid slide fields: {problem}")).class("problem"));
    root.class("slide-fallback")
        .child(text_el("h1", heading_or_default(slide)))
        .child(
            text_el("p", format!("Slide type not implemented: {}", unknown.kind))
                .class("fallback-notice"),
        )
        .maybe(problem)
}

/// The current slide with presentation chrome.
///
/// Adds the deck label, a `Slide k of N` counter and Previous/Next
/// controls, each marked `disabled` at its boundary.
pub fn render_frame(deck: &Deck, navigator: &Navigator, theme: &Theme) -> View {
    render_frame_with(deck, navigator, theme, &RendererRegistry::new())
}

pub fn render_frame_with(
    deck: &Deck,
    navigator: &Navigator,
    theme: &Theme,
    registry: &RendererRegistry,
) -> View {
    let (position, total) = navigator.position();
    let header = el("header")
        .class("deck-bar")
        .child(text_el("span", deck.display_name()).class("deck-label"))
        .child(text_el("span", format!("Slide {position} of {total}")).class("counter"));
    let current = match deck.get(navigator.index()) {
        Some(slide) => render_slide_with(slide, theme, registry),
        None => text_el("p", "No slides in this deck").class("empty").into(),
    };
    let controls = el("nav").class("controls").child(
        el("p")
            .child(control("Previous", navigator.is_first()))
            .text(" | ")
            .child(control("Next", navigator.is_last())),
    );
    el("div")
        .class(format!("presentation theme-{}", theme.name))
        .child(header)
        .child(current)
        .child(controls)
        .into()
}

fn control(label: &str, disabled: bool) -> Element {
    let class = if disabled { "control disabled" } else { "control" };
    text_el("span", label).class(class)
}

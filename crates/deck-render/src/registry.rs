//! Handlers for slide tags outside the built-in layouts.

use std::collections::HashMap;
use std::fmt;

use deck_model::{SlideKind, UnknownSlide};

use crate::theme::Theme;
use crate::view::View;

/// Renders one custom slide tag for both outputs.
///
/// Implementations must be pure: the same slide always yields the same view.
/// Both renderers write the leading `<h1>` with the slide heading before the
/// handler's output, so handlers render the body only.
pub trait SlideHandler: Send + Sync {
    /// Body of the interactive view.
    fn view(&self, slide: &UnknownSlide, theme: &Theme) -> View;

    /// Body of the export section.
    fn export(&self, slide: &UnknownSlide) -> View;
}

struct Entry {
    kind: String,
    handler: Box<dyn SlideHandler>,
}

/// Tag to handler map consulted for [`deck_model::Slide::Unknown`] slides.
///
/// Tags match case-insensitively, like the built-in kinds. Built-in kinds
/// always use the built-in layouts; registering one of their tags has no
/// effect, including for slides of that kind whose fields failed to decode.
#[derive(Default)]
pub struct RendererRegistry {
    handlers: HashMap<String, Entry>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, replacing any previous one for `kind`.
    pub fn register(&mut self, kind: impl Into<String>, handler: impl SlideHandler + 'static) {
        let kind = kind.into();
        self.handlers.insert(
            kind.to_ascii_lowercase(),
            Entry {
                kind,
                handler: Box::new(handler),
            },
        );
    }

    #[must_use]
    pub fn with(mut self, kind: impl Into<String>, handler: impl SlideHandler + 'static) -> Self {
        self.register(kind, handler);
        self
    }

    pub fn get(&self, kind: &str) -> Option<&dyn SlideHandler> {
        self.handlers
            .get(&kind.to_ascii_lowercase())
            .map(|entry| entry.handler.as_ref())
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.handlers.contains_key(&kind.to_ascii_lowercase())
    }

    /// Handler for a slide without a built-in layout.
    ///
    /// Slides of a built-in kind that failed to decode never reach a handler,
    /// so their placeholder keeps the decode problem visible.
    pub(crate) fn handler_for(&self, slide: &UnknownSlide) -> Option<&dyn SlideHandler> {
        if slide.problem.is_some() || slide.kind.parse::<SlideKind>().is_ok() {
            return None;
        }
        self.get(&slide.kind)
    }

    /// Registered tags as given, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self
            .handlers
            .values()
            .map(|entry| entry.kind.as_str())
            .collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

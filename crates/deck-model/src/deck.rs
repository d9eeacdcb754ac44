use serde::{Deserialize, Serialize};

use crate::slide::Slide;

/// Name used when a deck has none.
pub const DEFAULT_DECK_NAME: &str = "Deck";

/// An ordered, immutable sequence of slides.
///
/// Slide order is display and export order. Decks are built once (from a
/// file or in code) and expose no mutation afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
    #[serde(default)]
    slides: Vec<Slide>,
}

/// Position of a slide that did not decode into a known layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSlideRef {
    pub index: usize,
    pub kind: String,
    pub problem: Option<String>,
}

impl Deck {
    pub fn new(name: impl Into<String>, slides: Vec<Slide>) -> Self {
        Self {
            name: name.into(),
            label: None,
            theme: None,
            slides,
        }
    }

    /// Set the human-readable label shown in the presentation footer and export title.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the theme name (see the renderer's theme presets).
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Fill in the name when the source did not carry one.
    pub(crate) fn with_default_name(mut self, name: &str) -> Self {
        if self.name.trim().is_empty() {
            self.name = name.to_string();
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Label if set, otherwise the name.
    pub fn display_name(&self) -> &str {
        self.label().unwrap_or_else(|| self.name())
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// File name for the exported document: `<name>.html`.
    ///
    /// Characters outside `[A-Za-z0-9_-]` become `_`; an empty name falls
    /// back to [`DEFAULT_DECK_NAME`].
    pub fn export_file_name(&self) -> String {
        let stem: String = self
            .name
            .trim()
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                    ch
                } else {
                    '_'
                }
            })
            .collect();
        if stem.is_empty() {
            format!("{DEFAULT_DECK_NAME}.html")
        } else {
            format!("{stem}.html")
        }
    }

    /// Slides that will render through the fallback path.
    pub fn unknown_slides(&self) -> Vec<UnknownSlideRef> {
        self.slides
            .iter()
            .enumerate()
            .filter_map(|(index, slide)| match slide {
                Slide::Unknown(unknown) => Some(UnknownSlideRef {
                    index,
                    kind: unknown.kind.clone(),
                    problem: unknown.problem.clone(),
                }),
                _ => None,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::{ReflectionSlide, Slide};

    fn reflection(title: &str) -> Slide {
        Slide::Reflection(ReflectionSlide {
            title: title.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn export_file_name_is_sanitized() {
        let deck = Deck::new("Part4 Challenges & Mitigation", vec![]);
        assert_eq!(deck.export_file_name(), "Part4_Challenges___Mitigation.html");
        let deck = Deck::new("Part6_Synthetic_Data-Techniques", vec![]);
        assert_eq!(deck.export_file_name(), "Part6_Synthetic_Data-Techniques.html");
    }

    #[test]
    fn empty_name_uses_default() {
        let deck = Deck::new("  ", vec![]);
        assert_eq!(deck.export_file_name(), "Deck.html");
        let deck = Deck::new("", vec![]).with_default_name("slides");
        assert_eq!(deck.name(), "slides");
    }

    #[test]
    fn display_name_prefers_label() {
        let deck = Deck::new("part1", vec![reflection("Q")]);
        assert_eq!(deck.display_name(), "part1");
        let deck = deck.with_label("Part 1: Introduction & Motivation");
        assert_eq!(deck.display_name(), "Part 1: Introduction & Motivation");
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.get(0).map(Slide::heading), Some("Q"));
        assert!(deck.get(1).is_none());
    }

    #[test]
    fn theme_set_in_code_survives_serialization() {
        let deck = Deck::new("part6", vec![reflection("Q")]).with_theme("sky");
        assert_eq!(deck.theme(), Some("sky"));
        let json = serde_json::to_value(&deck).unwrap();
        assert_eq!(json["theme"], "sky");
        assert!(Deck::new("part6", vec![]).theme().is_none());
    }
}

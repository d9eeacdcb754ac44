//! Closed set of slide kinds understood by the renderers.
//!
//! A kind is the value of the `type` tag on a serialized slide record.
//! Tags that do not parse into a [`SlideKind`] are kept as
//! [`crate::UnknownSlide`] and rendered through the fallback path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Slide layout selected by the `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlideKind {
    /// Deck opener with course metadata.
    Title,
    /// Session agenda: topics or timed parts.
    Overview,
    /// Learning objectives with optional icons.
    Objectives,
    /// Narrative case with labelled sections.
    CaseStudy,
    /// Grid of titled points.
    Importance,
    /// Principle, formula breakdown and insight.
    Foundation,
    /// Table and/or two-column contrast.
    Comparison,
    /// Named mechanisms with examples.
    Amplification,
    /// Application domains and their data.
    Dependencies,
    /// Dated findings and their impact.
    Crisis,
    /// Method card with properties, example, pros and cons.
    Technique,
    /// Numbered key points and a transition line.
    Summary,
    /// Open questions for the audience.
    Reflection,
    /// Multi-part session structure.
    SessionOverview,
}

impl SlideKind {
    /// Every known kind, in declaration order.
    pub const ALL: [SlideKind; 14] = [
        SlideKind::Title,
        SlideKind::Overview,
        SlideKind::Objectives,
        SlideKind::CaseStudy,
        SlideKind::Importance,
        SlideKind::Foundation,
        SlideKind::Comparison,
        SlideKind::Amplification,
        SlideKind::Dependencies,
        SlideKind::Crisis,
        SlideKind::Technique,
        SlideKind::Summary,
        SlideKind::Reflection,
        SlideKind::SessionOverview,
    ];

    /// Returns the tag as written in deck files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideKind::Title => "title",
            SlideKind::Overview => "overview",
            SlideKind::Objectives => "objectives",
            SlideKind::CaseStudy => "caseStudy",
            SlideKind::Importance => "importance",
            SlideKind::Foundation => "foundation",
            SlideKind::Comparison => "comparison",
            SlideKind::Amplification => "amplification",
            SlideKind::Dependencies => "dependencies",
            SlideKind::Crisis => "crisis",
            SlideKind::Technique => "technique",
            SlideKind::Summary => "summary",
            SlideKind::Reflection => "reflection",
            SlideKind::SessionOverview => "sessionOverview",
        }
    }

    /// One-line description of the layout.
    pub fn description(&self) -> &'static str {
        match self {
            SlideKind::Title => "Deck opener: title, subtitle, details and course line",
            SlideKind::Overview => "Session overview with duration and topics or timed parts",
            SlideKind::Objectives => "Learning objectives list",
            SlideKind::CaseStudy => "Case study with labelled sections and a highlight",
            SlideKind::Importance => "Grid of titled points with descriptions",
            SlideKind::Foundation => "Principle with a formula breakdown and an insight",
            SlideKind::Comparison => "Comparison table and/or left/right columns",
            SlideKind::Amplification => "Mechanisms with descriptions and examples",
            SlideKind::Dependencies => "Application domains with datasets and challenges",
            SlideKind::Crisis => "Dated findings with impact and a closing message",
            SlideKind::Technique => "Technique card: method, properties, example, pros and cons",
            SlideKind::Summary => "Numbered key points with a transition",
            SlideKind::Reflection => "Reflection questions with a note",
            SlideKind::SessionOverview => "Multi-part session structure with topics",
        }
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SlideKind {
    type Err = String;

    /// Parse a slide tag (case-insensitive). `mainTitle` is accepted as a title slide.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if normalized == "maintitle" {
            return Ok(SlideKind::Title);
        }
        SlideKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| format!("Unknown slide kind: {s}"))
    }
}

//! Slide descriptors.
//!
//! A serialized slide is a record with a `type` tag and the fields of the
//! selected layout. Known tags decode into the typed variants of [`Slide`];
//! anything else (including a known tag whose fields do not decode) becomes
//! [`Slide::Unknown`] so a deck always loads and the renderers can show a
//! placeholder in its place.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::kind::SlideKind;

/// Key holding the slide tag in serialized records.
pub const TYPE_TAG: &str = "type";

#[derive(Debug, Clone, PartialEq)]
pub enum Slide {
    Title(TitleSlide),
    Overview(OverviewSlide),
    Objectives(ObjectivesSlide),
    CaseStudy(CaseStudySlide),
    Importance(ImportanceSlide),
    Foundation(FoundationSlide),
    Comparison(ComparisonSlide),
    Amplification(AmplificationSlide),
    Dependencies(DependenciesSlide),
    Crisis(CrisisSlide),
    Technique(TechniqueSlide),
    Summary(SummarySlide),
    Reflection(ReflectionSlide),
    SessionOverview(SessionOverviewSlide),
    Unknown(UnknownSlide),
}

/// A slide whose tag is not part of [`SlideKind`], or whose fields failed to decode.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownSlide {
    /// The `type` tag as written.
    pub kind: String,
    /// The full record as written, tag included.
    pub fields: Value,
    /// Decode error for a recognized tag with malformed fields.
    pub problem: Option<String>,
}

impl UnknownSlide {
    /// String value of a top-level field, if present.
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Best-effort heading: `title`, then `content.title`.
    pub fn heading(&self) -> &str {
        self.field_str("title")
            .or_else(|| {
                self.fields
                    .get("content")
                    .and_then(|content| content.get("title"))
                    .and_then(Value::as_str)
            })
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TitleSlide {
    pub content: TitleContent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TitleContent {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<SessionPart>,
}

/// One timed part of an overview agenda.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionPart {
    pub name: String,
    pub topic: String,
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectivesSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub objectives: Vec<Objective>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Objective {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseStudySlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_name: Option<String>,
    pub sections: Vec<CaseSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseSection {
    pub label: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportanceSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Point {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoundationSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<Formula>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Formula {
    pub title: String,
    pub equation: String,
    pub components: Vec<FormulaComponent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormulaComponent {
    pub term: String,
    pub cause: String,
    pub impact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparisonSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Column>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Column>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Callout>,
}

impl ComparisonSlide {
    /// True when the slide carries a header row or body rows.
    pub fn has_table(&self) -> bool {
        !self.headers.is_empty() || !self.rows.is_empty()
    }
}

/// Titled list used by two-column comparisons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Column {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Callout {
    pub text: String,
    pub emphasis: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AmplificationSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub mechanisms: Vec<Mechanism>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mechanism {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DependenciesSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub applications: Vec<Application>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub domain: String,
    pub datasets: String,
    pub samples: String,
    pub challenge: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrisisSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub findings: Vec<Finding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Finding {
    pub year: String,
    pub study: String,
    pub finding: String,
    pub impact: String,
}

/// Generic method card.
///
/// `properties` and `example` are free-form key/value blocks; keys are
/// rendered in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechniqueSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub example: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub advantages: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub limitations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummarySlide {
    pub title: String,
    pub key_points: Vec<KeyPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyPoint {
    pub point: String,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReflectionSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub questions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionOverviewSlide {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_slides: Option<u32>,
    pub structure: Vec<SessionBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionBlock {
    pub part: String,
    pub title: String,
    pub duration: String,
    pub slides: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub topics: Vec<String>,
}

impl Slide {
    /// The slide's `type` tag.
    pub fn kind(&self) -> &str {
        match self {
            Slide::Unknown(unknown) => &unknown.kind,
            known => known.known_kind().map_or("", |kind| kind.as_str()),
        }
    }

    /// The known kind, or `None` for [`Slide::Unknown`].
    pub fn known_kind(&self) -> Option<SlideKind> {
        let kind = match self {
            Slide::Title(_) => SlideKind::Title,
            Slide::Overview(_) => SlideKind::Overview,
            Slide::Objectives(_) => SlideKind::Objectives,
            Slide::CaseStudy(_) => SlideKind::CaseStudy,
            Slide::Importance(_) => SlideKind::Importance,
            Slide::Foundation(_) => SlideKind::Foundation,
            Slide::Comparison(_) => SlideKind::Comparison,
            Slide::Amplification(_) => SlideKind::Amplification,
            Slide::Dependencies(_) => SlideKind::Dependencies,
            Slide::Crisis(_) => SlideKind::Crisis,
            Slide::Technique(_) => SlideKind::Technique,
            Slide::Summary(_) => SlideKind::Summary,
            Slide::Reflection(_) => SlideKind::Reflection,
            Slide::SessionOverview(_) => SlideKind::SessionOverview,
            Slide::Unknown(_) => return None,
        };
        Some(kind)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Slide::Unknown(_))
    }

    /// Primary heading shown first by both renderers.
    pub fn heading(&self) -> &str {
        match self {
            Slide::Title(slide) => &slide.content.title,
            Slide::Overview(slide) => &slide.title,
            Slide::Objectives(slide) => &slide.title,
            Slide::CaseStudy(slide) => &slide.title,
            Slide::Importance(slide) => &slide.title,
            Slide::Foundation(slide) => &slide.title,
            Slide::Comparison(slide) => &slide.title,
            Slide::Amplification(slide) => &slide.title,
            Slide::Dependencies(slide) => &slide.title,
            Slide::Crisis(slide) => &slide.title,
            Slide::Technique(slide) => &slide.title,
            Slide::Summary(slide) => &slide.title,
            Slide::Reflection(slide) => &slide.title,
            Slide::SessionOverview(slide) => &slide.title,
            Slide::Unknown(slide) => slide.heading(),
        }
    }

    /// Decode one slide record.
    ///
    /// Fails only when the record is not an object with a string `type` tag.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let tag = match value.get(TYPE_TAG) {
            Some(Value::String(tag)) => tag.clone(),
            Some(other) => return Err(format!("slide `type` must be a string, got {other}")),
            None => return Err("slide record is missing a `type` tag".to_string()),
        };
        let Ok(kind) = tag.parse::<SlideKind>() else {
            return Ok(Slide::Unknown(UnknownSlide {
                kind: tag,
                fields: value,
                problem: None,
            }));
        };
        let decoded = match kind {
            SlideKind::Title => decode(&value).map(Slide::Title),
            SlideKind::Overview => decode(&value).map(Slide::Overview),
            SlideKind::Objectives => decode(&value).map(Slide::Objectives),
            SlideKind::CaseStudy => decode(&value).map(Slide::CaseStudy),
            SlideKind::Importance => decode(&value).map(Slide::Importance),
            SlideKind::Foundation => decode(&value).map(Slide::Foundation),
            SlideKind::Comparison => decode(&value).map(Slide::Comparison),
            SlideKind::Amplification => decode(&value).map(Slide::Amplification),
            SlideKind::Dependencies => decode(&value).map(Slide::Dependencies),
            SlideKind::Crisis => decode(&value).map(Slide::Crisis),
            SlideKind::Technique => decode(&value).map(Slide::Technique),
            SlideKind::Summary => decode(&value).map(Slide::Summary),
            SlideKind::Reflection => decode(&value).map(Slide::Reflection),
            SlideKind::SessionOverview => decode(&value).map(Slide::SessionOverview),
        };
        Ok(decoded.unwrap_or_else(|error| {
            Slide::Unknown(UnknownSlide {
                kind: tag,
                fields: value,
                problem: Some(error.to_string()),
            })
        }))
    }

    /// Encode as a tagged record.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        let body = match self {
            Slide::Title(slide) => serde_json::to_value(slide)?,
            Slide::Overview(slide) => serde_json::to_value(slide)?,
            Slide::Objectives(slide) => serde_json::to_value(slide)?,
            Slide::CaseStudy(slide) => serde_json::to_value(slide)?,
            Slide::Importance(slide) => serde_json::to_value(slide)?,
            Slide::Foundation(slide) => serde_json::to_value(slide)?,
            Slide::Comparison(slide) => serde_json::to_value(slide)?,
            Slide::Amplification(slide) => serde_json::to_value(slide)?,
            Slide::Dependencies(slide) => serde_json::to_value(slide)?,
            Slide::Crisis(slide) => serde_json::to_value(slide)?,
            Slide::Technique(slide) => serde_json::to_value(slide)?,
            Slide::Summary(slide) => serde_json::to_value(slide)?,
            Slide::Reflection(slide) => serde_json::to_value(slide)?,
            Slide::SessionOverview(slide) => serde_json::to_value(slide)?,
            Slide::Unknown(slide) => return Ok(slide.fields.clone()),
        };
        let mut record = Map::new();
        record.insert(TYPE_TAG.to_string(), Value::String(self.kind().to_string()));
        if let Value::Object(fields) = body {
            record.extend(fields);
        }
        Ok(Value::Object(record))
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: &Value) -> Result<T, serde_json::Error> {
    T::deserialize(value)
}

impl<'de> Deserialize<'de> for Slide {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Slide::from_value(value).map_err(D::Error::custom)
    }
}

impl Serialize for Slide {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_known_tag() {
        let slide: Slide = serde_json::from_value(json!({
            "type": "summary",
            "title": "Part 1 Summary",
            "keyPoints": [{ "point": "Real-world failures", "detail": "Data problems" }],
            "transition": "Next: sampling"
        }))
        .unwrap();
        let Slide::Summary(summary) = &slide else {
            panic!("expected summary, got {slide:?}");
        };
        assert_eq!(summary.key_points.len(), 1);
        assert_eq!(summary.transition.as_deref(), Some("Next: sampling"));
        assert_eq!(slide.heading(), "Part 1 Summary");
        assert_eq!(slide.kind(), "summary");
    }

    #[test]
    fn unknown_tag_is_kept() {
        let slide: Slide = serde_json::from_value(json!({
            "type": "labExercise",
            "title": "Hands-On Lab"
        }))
        .unwrap();
        assert!(!slide.is_known());
        assert_eq!(slide.kind(), "labExercise");
        assert_eq!(slide.heading(), "Hands-On Lab");
    }

    #[test]
    fn malformed_known_slide_degrades_to_unknown() {
        let slide: Slide = serde_json::from_value(json!({
            "type": "reflection",
            "title": "Questions",
            "questions": "not a list"
        }))
        .unwrap();
        let Slide::Unknown(unknown) = &slide else {
            panic!("expected unknown, got {slide:?}");
        };
        assert_eq!(unknown.kind, "reflection");
        assert!(unknown.problem.is_some());
        assert_eq!(slide.heading(), "Questions");
    }

    #[test]
    fn missing_tag_is_an_error() {
        let result: Result<Slide, _> = serde_json::from_value(json!({ "title": "x" }));
        assert!(result.is_err());
        let result: Result<Slide, _> = serde_json::from_value(json!({ "type": 3 }));
        assert!(result.is_err());
    }

    #[test]
    fn title_heading_comes_from_content() {
        let slide: Slide = serde_json::from_value(json!({
            "type": "mainTitle",
            "content": { "title": "Data Collection", "level": "Level 7" }
        }))
        .unwrap();
        assert_eq!(slide.known_kind(), Some(SlideKind::Title));
        assert_eq!(slide.heading(), "Data Collection");
    }

    #[test]
    fn serializes_with_tag() {
        let slide = Slide::Reflection(ReflectionSlide {
            title: "Reflection".to_string(),
            subtitle: None,
            questions: vec!["Why?".to_string()],
            note: None,
        });
        let value = serde_json::to_value(&slide).unwrap();
        assert_eq!(value["type"], "reflection");
        assert_eq!(value["questions"][0], "Why?");
        assert!(value.get("subtitle").is_none());
    }
}

//! Slide deck data model.
//!
//! - [`Slide`]: tagged slide descriptor, one variant per [`SlideKind`] plus
//!   [`Slide::Unknown`] for tags the renderers do not know.
//! - [`Deck`]: the ordered, immutable slide sequence.
//! - [`Navigator`]: the current-slide index with saturating transitions.
//! - [`load_deck`]: JSON/TOML deck files.

pub mod deck;
pub mod error;
pub mod kind;
pub mod load;
pub mod navigation;
pub mod slide;

pub use deck::{DEFAULT_DECK_NAME, Deck, UnknownSlideRef};
pub use error::{DeckError, Result};
pub use kind::SlideKind;
pub use load::{load_deck, parse_json_deck, parse_toml_deck};
pub use navigation::Navigator;
pub use slide::{
    AmplificationSlide, Application, Callout, CaseSection, CaseStudySlide, Column,
    ComparisonSlide, CrisisSlide, DependenciesSlide, Finding, Formula, FormulaComponent,
    FoundationSlide, ImportanceSlide, KeyPoint, Mechanism, Objective, ObjectivesSlide,
    OverviewSlide, Point, ReflectionSlide, SessionBlock, SessionOverviewSlide, SessionPart, Slide,
    SummarySlide, TYPE_TAG, TechniqueSlide, TitleContent, TitleSlide, UnknownSlide,
};

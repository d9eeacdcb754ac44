//! Deck file loading.
//!
//! Decks are JSON or TOML. JSON accepts either a deck object
//! (`{"name": ..., "slides": [...]}`) or a bare array of slide records.
//! TOML uses top-level keys plus `[[slides]]` tables.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::deck::Deck;
use crate::error::{DeckError, Result};
use crate::slide::Slide;

const INLINE_ORIGIN: &str = "<inline>";

/// Load a deck from a `.json` or `.toml` file.
///
/// A deck without a `name` takes the file stem.
pub fn load_deck(path: &Path) -> Result<Deck> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let text = match extension.as_deref() {
        Some("json" | "toml") => fs::read_to_string(path).map_err(|e| DeckError::io(path, e))?,
        _ => {
            return Err(DeckError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };
    let origin = path.display().to_string();
    let deck = if extension.as_deref() == Some("toml") {
        decode_toml(&text, &origin)?
    } else {
        decode_json(&text, &origin)?
    };
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let deck = deck.with_default_name(stem);
    debug!(
        deck = %deck.name(),
        path = %origin,
        slide_count = deck.len(),
        "deck loaded"
    );
    report_unknown_slides(&deck);
    Ok(deck)
}

/// Parse a JSON deck held in memory.
pub fn parse_json_deck(text: &str) -> Result<Deck> {
    let deck = decode_json(text, INLINE_ORIGIN)?;
    report_unknown_slides(&deck);
    Ok(deck)
}

/// Parse a TOML deck held in memory.
pub fn parse_toml_deck(text: &str) -> Result<Deck> {
    let deck = decode_toml(text, INLINE_ORIGIN)?;
    report_unknown_slides(&deck);
    Ok(deck)
}

fn decode_json(text: &str, origin: &str) -> Result<Deck> {
    let json_error = |source| DeckError::Json {
        origin: origin.to_string(),
        source,
    };
    let value: Value = serde_json::from_str(text).map_err(json_error)?;
    match value {
        Value::Array(_) => {
            let slides: Vec<Slide> = serde_json::from_value(value).map_err(json_error)?;
            Ok(Deck::new("", slides))
        }
        other => serde_json::from_value(other).map_err(json_error),
    }
}

fn decode_toml(text: &str, origin: &str) -> Result<Deck> {
    toml::from_str(text).map_err(|source| DeckError::Toml {
        origin: origin.to_string(),
        source,
    })
}

fn report_unknown_slides(deck: &Deck) {
    for unknown in deck.unknown_slides() {
        match &unknown.problem {
            Some(problem) => warn!(
                deck = %deck.name(),
                slide_index = unknown.index,
                slide_type = %unknown.kind,
                problem = %problem,
                "slide fields did not decode; it will render as a placeholder"
            ),
            None => warn!(
                deck = %deck.name(),
                slide_index = unknown.index,
                slide_type = %unknown.kind,
                "unrecognized slide type; it will render as a placeholder"
            ),
        }
    }
}

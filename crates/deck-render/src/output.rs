//! Writing exports to disk.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use deck_model::Deck;
use tracing::info;

use crate::error::{RenderError, Result};
use crate::export::{ExportOptions, write_document, write_export};
use crate::registry::RendererRegistry;
use crate::theme::Theme;
use crate::view::{el, text_el};

/// File name of the deck index page.
pub const INDEX_FILE_NAME: &str = "index.html";

/// Export `deck` to `<dir>/<deck.export_file_name()>`, creating `dir`.
pub fn export_to_file(deck: &Deck, dir: &Path, options: &ExportOptions) -> Result<PathBuf> {
    export_to_file_with(deck, dir, options, &RendererRegistry::new())
}

pub fn export_to_file_with(
    deck: &Deck,
    dir: &Path,
    options: &ExportOptions,
    registry: &RendererRegistry,
) -> Result<PathBuf> {
    let path = dir.join(deck.export_file_name());
    let writer = create_file(dir, &path)?;
    write_export(deck, options, registry, writer).map_err(|e| RenderError::write(&path, e))?;
    info!(
        deck = %deck.name(),
        path = %path.display(),
        slide_count = deck.len(),
        "deck exported"
    );
    Ok(path)
}

/// One row of the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub label: String,
    pub file_name: String,
    pub slide_count: usize,
}

impl IndexEntry {
    pub fn for_deck(deck: &Deck) -> Self {
        Self {
            label: deck.display_name().to_string(),
            file_name: deck.export_file_name(),
            slide_count: deck.len(),
        }
    }
}

/// Write `<dir>/index.html` linking every entry in order.
pub fn export_index(entries: &[IndexEntry], dir: &Path, theme: &Theme) -> Result<PathBuf> {
    let path = dir.join(INDEX_FILE_NAME);
    let writer = create_file(dir, &path)?;
    let total: usize = entries.iter().map(|entry| entry.slide_count).sum();
    let links = entries.iter().map(|entry| {
        el("li")
            .child(
                text_el("a", entry.label.as_str()).attr("href", entry.file_name.as_str()),
            )
            .child(text_el("small", format!(" ({} slides)", entry.slide_count)).class("meta"))
    });
    let section = el("section")
        .class("slide")
        .child(text_el("h1", "Slide Decks"))
        .child(text_el(
            "p",
            format!(
                "{total} slides across {} deck{}",
                entries.len(),
                if entries.len() == 1 { "" } else { "s" }
            ),
        ))
        .child(el("ul").class("deck-index").children(links));
    let body = el("body").child(section);
    write_document("Slide Decks", theme, Vec::new(), body, writer)
        .map_err(|e| RenderError::write(&path, e))?;
    info!(path = %path.display(), deck_count = entries.len(), "index exported");
    Ok(path)
}

fn create_file(dir: &Path, path: &Path) -> Result<BufWriter<File>> {
    fs::create_dir_all(dir).map_err(|e| RenderError::create(dir, e))?;
    let file = File::create(path).map_err(|e| RenderError::create(path, e))?;
    Ok(BufWriter::new(file))
}

use std::collections::HashSet;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::Table;
use tracing::{error, info, info_span, warn};

use deck_cli::present::run_session;
use deck_model::{Deck, SlideKind, load_deck};
use deck_render::{
    ExportOptions, IndexEntry, RendererRegistry, Theme, export_index, export_to_file_with,
    render_slide,
};

use crate::cli::{ExportArgs, PresentArgs, ShowArgs};
use crate::summary::{apply_table_style, header_cell};
use crate::types::{DeckSummary, ExportResult};

pub fn run_kinds() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Type"), header_cell("Description")]);
    apply_table_style(&mut table);
    for kind in SlideKind::ALL {
        table.add_row(vec![kind.as_str(), kind.description()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let deck = load(&args.deck)?;
    let theme = Theme::resolve(args.theme.as_deref(), deck.theme());
    let index = args.slide.saturating_sub(1).min(deck.len().saturating_sub(1));
    let Some(slide) = deck.get(index) else {
        println!("No slides in this deck");
        return Ok(());
    };
    let view = render_slide(slide, &theme);
    let mut stdout = io::stdout().lock();
    if args.html {
        let html = view.to_html().context("render slide HTML")?;
        writeln!(stdout, "{html}")?;
    } else {
        write!(stdout, "{}", view.to_text())?;
    }
    Ok(())
}

pub fn run_present(args: &PresentArgs) -> Result<()> {
    let deck = load(&args.deck)?;
    let span = info_span!("present", deck = %deck.name());
    let _guard = span.enter();
    let theme = Theme::resolve(args.theme.as_deref(), deck.theme());
    let navigator = run_session(
        &deck,
        &theme,
        &RendererRegistry::new(),
        args.start.saturating_sub(1),
        io::stdin().lock(),
        io::stdout().lock(),
    )
    .context("presentation session")?;
    let (position, total) = navigator.position();
    info!(position, total, "presentation ended");
    Ok(())
}

/// Export every deck; a failing deck is recorded and the rest continue.
///
/// A deck whose file name was already written in this run is recorded as a
/// failure instead of overwriting the earlier export.
pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    let output_dir = &args.output_dir;
    let span = info_span!("export", output_dir = %output_dir.display());
    let _guard = span.enter();
    let registry = RendererRegistry::new();
    let theme_override = args.theme.as_deref().map(Theme::named);
    let mut decks = Vec::with_capacity(args.decks.len());
    let mut entries = Vec::new();
    let mut written: HashSet<String> = HashSet::new();

    for source in &args.decks {
        let deck = match load(source) {
            Ok(deck) => deck,
            Err(err) => {
                error!(path = %source.display(), error = %format!("{err:#}"), "deck failed to load");
                decks.push(failed(source, format!("{err:#}")));
                continue;
            }
        };
        let theme = theme_override.unwrap_or_else(|| Theme::resolve(None, deck.theme()));
        let mut options = ExportOptions::new().with_theme(theme).with_generator();
        if args.timestamp {
            options = options.with_timestamp(Utc::now());
        }
        let unknown_slides = deck.unknown_slides().len();
        if unknown_slides > 0 {
            warn!(
                deck = %deck.name(),
                unknown_slides,
                "deck has slides that export as placeholders"
            );
        }
        let mut summary = DeckSummary {
            source: source.clone(),
            name: deck.name().to_string(),
            label: deck.label().map(str::to_string),
            slides: deck.len(),
            unknown_slides,
            theme: theme.name.to_string(),
            output: None,
            error: None,
        };
        let file_name = deck.export_file_name();
        if written.contains(&file_name) {
            error!(
                deck = %deck.name(),
                file = %file_name,
                "another deck in this run already exported to the same file"
            );
            summary.error = Some(format!(
                "{file_name} was already written by an earlier deck; set a distinct deck name"
            ));
            decks.push(summary);
            continue;
        }
        match export_to_file_with(&deck, output_dir, &options, &registry) {
            Ok(path) => {
                written.insert(file_name);
                entries.push(IndexEntry::for_deck(&deck));
                summary.output = Some(path);
            }
            Err(err) => {
                error!(deck = %deck.name(), error = %err, "deck export failed");
                summary.error = Some(err.to_string());
            }
        }
        decks.push(summary);
    }

    let index = if args.index && !entries.is_empty() {
        let theme = theme_override.unwrap_or_default();
        Some(export_index(&entries, output_dir, &theme).context("write deck index")?)
    } else {
        None
    };
    let has_errors = decks.iter().any(|deck| deck.error.is_some());
    info!(
        deck_count = decks.len(),
        exported = entries.len(),
        has_errors,
        "export finished"
    );
    Ok(ExportResult {
        output_dir: output_dir.clone(),
        decks,
        index,
        has_errors,
    })
}

fn load(path: &Path) -> Result<Deck> {
    load_deck(path).with_context(|| format!("load deck {}", path.display()))
}

fn failed(source: &Path, error: String) -> DeckSummary {
    DeckSummary {
        source: source.to_path_buf(),
        name: String::new(),
        label: None,
        slides: 0,
        unknown_slides: 0,
        theme: "-".to_string(),
        output: None,
        error: Some(error),
    }
}

use std::path::PathBuf;

#[derive(Debug)]
pub struct ExportResult {
    pub output_dir: PathBuf,
    pub decks: Vec<DeckSummary>,
    pub index: Option<PathBuf>,
    pub has_errors: bool,
}

/// Outcome for one deck argument.
#[derive(Debug)]
pub struct DeckSummary {
    pub source: PathBuf,
    pub name: String,
    pub label: Option<String>,
    pub slides: usize,
    pub unknown_slides: usize,
    pub theme: String,
    pub output: Option<PathBuf>,
    pub error: Option<String>,
}

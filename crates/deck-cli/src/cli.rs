//! CLI argument definitions for `slidedeck`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "slidedeck",
    version,
    about = "Present slide decks in the terminal and export them to standalone HTML",
    long_about = "Present slide decks in the terminal and export them to standalone HTML.\n\n\
                  Decks are JSON or TOML files holding an ordered list of typed slides.\n\
                  Slides of unknown types render as placeholders instead of failing."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix pretty and compact log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the supported slide types.
    Kinds,

    /// Render one slide to stdout.
    Show(ShowArgs),

    /// Step through a deck interactively on stdin.
    Present(PresentArgs),

    /// Export decks to standalone HTML files.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Deck file (.json or .toml).
    #[arg(value_name = "DECK")]
    pub deck: PathBuf,

    /// Slide number, 1-based (clamped to the deck).
    #[arg(long = "slide", short = 's', value_name = "N", default_value_t = 1)]
    pub slide: usize,

    /// Print the HTML fragment instead of plain text.
    #[arg(long = "html")]
    pub html: bool,

    /// Theme name (overrides the deck theme).
    #[arg(long = "theme", value_name = "NAME")]
    pub theme: Option<String>,
}

#[derive(Parser)]
pub struct PresentArgs {
    /// Deck file (.json or .toml).
    #[arg(value_name = "DECK")]
    pub deck: PathBuf,

    /// Slide to start on, 1-based.
    #[arg(long = "start", value_name = "N", default_value_t = 1)]
    pub start: usize,

    /// Theme name (overrides the deck theme).
    #[arg(long = "theme", value_name = "NAME")]
    pub theme: Option<String>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Deck files (.json or .toml).
    #[arg(value_name = "DECK", required = true)]
    pub decks: Vec<PathBuf>,

    /// Output directory for the HTML files.
    #[arg(long = "output-dir", short = 'o', value_name = "DIR", default_value = "export")]
    pub output_dir: PathBuf,

    /// Theme name for every deck (overrides each deck's theme).
    #[arg(long = "theme", value_name = "NAME")]
    pub theme: Option<String>,

    /// Also write index.html linking the exported decks.
    #[arg(long = "index")]
    pub index: bool,

    /// Stamp each document with the generation time.
    #[arg(long = "timestamp")]
    pub timestamp: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON deck {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse TOML deck {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported deck format for {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },
}

impl DeckError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from writing rendered output.
///
/// Rendering itself never fails on slide content; these cover the sink.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTML serialization failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: Box<RenderError>,
    },
}

impl RenderError {
    pub(crate) fn create(path: &Path, source: std::io::Error) -> Self {
        Self::Create {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: RenderError) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;

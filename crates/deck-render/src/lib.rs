//! Slide deck rendering.
//!
//! - **Interactive**: one slide at a time as a [`View`] tree, with optional
//!   presentation chrome ([`render_frame`]).
//! - **Export**: the whole deck as one standalone HTML document, one
//!   `<section class="slide">` per slide.
//!
//! Both renderers share the per-kind layouts and fall back to a placeholder
//! for slide tags they do not know, unless a [`RendererRegistry`] handler
//! claims the tag.

mod error;
mod export;
mod interactive;
mod layout;
mod output;
mod registry;
mod theme;
mod view;

pub use error::{RenderError, Result};
pub use export::{
    ExportOptions, GENERATOR, export_html, export_html_with, export_section, write_export,
};
pub use interactive::{render_frame, render_frame_with, render_slide, render_slide_with};
pub use output::{INDEX_FILE_NAME, IndexEntry, export_index, export_to_file, export_to_file_with};
pub use registry::{RendererRegistry, SlideHandler};
pub use theme::Theme;
pub use view::{Element, View, el, text_el};
